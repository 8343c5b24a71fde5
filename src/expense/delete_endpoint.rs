//! Defines the route handler for deleting an expense.

use axum::{
    extract::{FromRef, Path, State},
    response::Redirect,
};

use crate::{AppState, Error, endpoints, expense::ExpenseId, stores::ExpenseStore};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that writes expenses through the remote API.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for DeleteExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Delete an expense and redirect to the dashboard.
pub async fn delete_expense<S>(
    State(state): State<DeleteExpenseState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Redirect, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    state.expense_store.delete(&expense_id).await?;

    tracing::info!("deleted expense {expense_id}");

    Ok(Redirect::to(endpoints::EXPENSES_VIEW))
}
