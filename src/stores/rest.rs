//! The [ExpenseStore] implementation backed by the remote expense API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    Error,
    expense::{Expense, ExpenseDraft, ExpenseId},
    stores::ExpenseStore,
};

/// The connection settings for the remote expense API.
///
/// The bearer credential is injected here at construction rather than read
/// from process-wide state, so its lifecycle is tied to the store instance.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The base address of the API, e.g. "https://example.com/api/v1".
    pub base_url: String,
    /// The static bearer credential sent with every request.
    pub bearer_token: String,
    /// The deadline applied to each request.
    pub timeout: Duration,
}

/// An [ExpenseStore] that translates each operation into one HTTP request
/// against the remote expense API.
#[derive(Debug, Clone)]
pub struct RestExpenseStore {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl RestExpenseStore {
    /// Create a store from connection settings.
    ///
    /// The timeout is fixed on the underlying HTTP client and applies to
    /// every request the store makes.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| Error::Transport(error.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            bearer_token: config.bearer_token,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/expense", self.base_url)
    }

    fn expense_url(&self, id: &ExpenseId) -> String {
        format!("{}/expense/{}", self.base_url, id)
    }
}

/// Turn an error status into an [Error], logging a diagnostic per status.
///
/// The statuses are distinguished only in the logs; callers receive a uniform
/// failure apart from 404, which maps to [Error::NotFound].
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => tracing::warn!("unauthorized access to the expense API"),
        StatusCode::NOT_FOUND => tracing::warn!("expense API resource not found"),
        StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("expense API server error"),
        status => tracing::error!("expense API request failed with status {status}"),
    }

    if status == StatusCode::NOT_FOUND {
        Err(Error::NotFound)
    } else {
        Err(Error::ApiStatus(status.as_u16()))
    }
}

#[async_trait]
impl ExpenseStore for RestExpenseStore {
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        let response = self
            .http
            .get(self.collection_url())
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        let expenses = check_status(response)?.json().await?;

        Ok(expenses)
    }

    async fn get(&self, id: &ExpenseId) -> Result<Expense, Error> {
        let response = self
            .http
            .get(self.expense_url(id))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        let expense = check_status(response)?.json().await?;

        Ok(expense)
    }

    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, Error> {
        let response = self
            .http
            .post(self.collection_url())
            .bearer_auth(&self.bearer_token)
            .json(&draft)
            .send()
            .await?;

        let expense = check_status(response)?.json().await?;

        Ok(expense)
    }

    async fn update(&self, id: &ExpenseId, draft: ExpenseDraft) -> Result<Expense, Error> {
        let response = self
            .http
            .put(self.expense_url(id))
            .bearer_auth(&self.bearer_token)
            .json(&draft)
            .send()
            .await?;

        let expense = check_status(response)?.json().await?;

        Ok(expense)
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), Error> {
        let response = self
            .http
            .delete(self.expense_url(id))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        check_status(response)?;

        Ok(())
    }
}
