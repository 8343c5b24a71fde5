//! Outlay is a web dashboard for tracking expenses held in a remote expense
//! API.
//!
//! This library serves HTML pages directly. All expense records live behind
//! the REST API configured at start-up; the server keeps no local copy beyond
//! the lifetime of a single request.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod endpoints;
mod expense;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod pagination;
mod routing;
mod state;
mod stores;
mod timezone;

#[cfg(test)]
pub(crate) mod test_utils;

pub use expense::{Expense, ExpenseDraft, ExpenseId, ExpenseSummary, FilterMode};
pub use pagination::PaginationConfig;
pub use routing::build_router;
pub use state::AppState;
pub use stores::{ApiConfig, ExpenseStore, RestExpenseStore};

use crate::internal_server_error::{InternalServerErrorPage, render_internal_server_error};
use crate::not_found::get_404_not_found_response;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The expense API could not be reached, or the connection failed before
    /// a response arrived.
    #[error("could not reach the expense API: {0}")]
    Transport(String),

    /// The expense API answered with an error status.
    ///
    /// Individual statuses are logged for diagnostics at the client boundary;
    /// recovery does not differ between them.
    #[error("the expense API returned status {0}")]
    ApiStatus(u16),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the expense ID
    /// is correct and that the expense has not already been deleted.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The expense API returned a body that could not be parsed.
    #[error("could not parse the expense API response: {0}")]
    InvalidResponse(String),

    /// An expense amount that is negative or not a finite number.
    #[error("{0} is not a valid expense amount")]
    InvalidAmount(f64),

    /// An error occurred while getting the local timezone from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidResponse(error.to_string())
        } else {
            tracing::error!("no response received from the expense API: {error}");
            Error::Transport(error.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}
