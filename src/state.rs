//! Implements a struct that holds the shared state of the server.

use std::marker::{Send, Sync};

use crate::{pagination::PaginationConfig, stores::ExpenseStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that reads and writes expenses through the remote API.
    pub expense_store: S,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S> AppState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name,
    /// e.g. "Pacific/Auckland".
    pub fn new(
        expense_store: S,
        pagination_config: PaginationConfig,
        local_timezone: &str,
    ) -> Self {
        Self {
            expense_store,
            pagination_config,
            local_timezone: local_timezone.to_owned(),
        }
    }
}
