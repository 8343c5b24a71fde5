//! Data access for expense records.
//!
//! The dashboard reads and writes expenses through the [ExpenseStore] trait
//! so that route handlers do not need to know whether records come from the
//! live REST API or an in-memory double in tests.

mod rest;

use async_trait::async_trait;

use crate::{
    Error,
    expense::{Expense, ExpenseDraft, ExpenseId},
};

pub use rest::{ApiConfig, RestExpenseStore};

/// The five operations the remote expense API supports.
///
/// Each call issues exactly one request; failures are surfaced verbatim to
/// the caller with no retries.
#[async_trait]
pub trait ExpenseStore {
    /// Fetch every expense record.
    async fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Fetch a single expense by its ID.
    async fn get(&self, id: &ExpenseId) -> Result<Expense, Error>;

    /// Create a new expense from a draft and return the stored record.
    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, Error>;

    /// Replace the description, amount, and date of an existing expense.
    async fn update(&self, id: &ExpenseId, draft: ExpenseDraft) -> Result<Expense, Error>;

    /// Delete an expense by its ID.
    async fn delete(&self, id: &ExpenseId) -> Result<(), Error>;
}
