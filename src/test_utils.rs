//! Shared helpers for tests: an in-memory expense store and HTML parsing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use scraper::Html;
use time::Date;

use crate::{
    Error,
    expense::{Expense, ExpenseDraft, ExpenseId},
    stores::ExpenseStore,
};

/// Build an expense record for tests.
pub(crate) fn expense(id: &str, description: &str, amount: f64, date: Date) -> Expense {
    Expense {
        id: id.to_owned(),
        description: description.to_owned(),
        amount,
        date,
    }
}

#[derive(Debug, Default)]
struct FakeStoreInner {
    expenses: Vec<Expense>,
    next_id: u64,
    write_count: usize,
    fail_with: Option<Error>,
}

/// An in-memory [ExpenseStore] so that handler tests do not need a live API.
///
/// Records are held in insertion order, matching the API's oldest-first list
/// order. The store counts writes so that tests can assert that read-only
/// pages do not modify anything.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeExpenseStore {
    inner: Arc<Mutex<FakeStoreInner>>,
}

impl FakeExpenseStore {
    /// A store holding `expenses`, oldest first.
    pub(crate) fn with_expenses(expenses: Vec<Expense>) -> Self {
        let next_id = expenses.len() as u64 + 1;

        Self {
            inner: Arc::new(Mutex::new(FakeStoreInner {
                expenses,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// A store where every operation fails with `error`.
    pub(crate) fn failing(error: Error) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeStoreInner {
                fail_with: Some(error),
                ..Default::default()
            })),
        }
    }

    /// The number of create, update and delete calls made so far.
    pub(crate) fn write_count(&self) -> usize {
        self.lock().write_count
    }

    /// A snapshot of the stored expenses, oldest first.
    pub(crate) fn expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeStoreInner> {
        self.inner.lock().expect("Could not lock fake store")
    }

    fn check_failure(&self) -> Result<(), Error> {
        match &self.lock().fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExpenseStore for FakeExpenseStore {
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        self.check_failure()?;

        Ok(self.expenses())
    }

    async fn get(&self, id: &ExpenseId) -> Result<Expense, Error> {
        self.check_failure()?;

        self.lock()
            .expenses
            .iter()
            .find(|expense| &expense.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn create(&self, draft: ExpenseDraft) -> Result<Expense, Error> {
        self.check_failure()?;

        let mut inner = self.lock();
        let expense = Expense {
            id: inner.next_id.to_string(),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
        };
        inner.next_id += 1;
        inner.write_count += 1;
        inner.expenses.push(expense.clone());

        Ok(expense)
    }

    async fn update(&self, id: &ExpenseId, draft: ExpenseDraft) -> Result<Expense, Error> {
        self.check_failure()?;

        let mut inner = self.lock();
        let expense = inner
            .expenses
            .iter_mut()
            .find(|expense| &expense.id == id)
            .ok_or(Error::NotFound)?;

        expense.description = draft.description;
        expense.amount = draft.amount;
        expense.date = draft.date;
        let updated = expense.clone();
        inner.write_count += 1;

        Ok(updated)
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), Error> {
        self.check_failure()?;

        let mut inner = self.lock();
        let index = inner
            .expenses
            .iter()
            .position(|expense| &expense.id == id)
            .ok_or(Error::NotFound)?;

        inner.expenses.remove(index);
        inner.write_count += 1;

        Ok(())
    }
}

/// Parse a handler's response body as an HTML document.
pub(crate) async fn parse_html(response: Response) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    let html = Html::parse_document(&text);
    assert_valid_html(&html);

    html
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
