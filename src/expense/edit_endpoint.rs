//! Defines the route handler for updating an expense.

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, Error, endpoints, expense::ExpenseId, stores::ExpenseStore};

use super::{core::ExpenseDraft, edit_page::edit_expense_view};

/// The state needed to update an expense.
#[derive(Debug, Clone)]
pub struct UpdateExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that writes expenses through the remote API.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for UpdateExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Replace an expense with the submitted form values and redirect to the
/// dashboard.
///
/// A failed submission re-renders the edit form with the entered values and
/// an error message. A missing record is surfaced as a not found page.
pub async fn update_expense<S>(
    State(state): State<UpdateExpenseState<S>>,
    Path(expense_id): Path<ExpenseId>,
    Form(draft): Form<ExpenseDraft>,
) -> Result<Response, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    if let Err(error) = draft.validate() {
        return Ok(
            edit_expense_view(&expense_id, &draft, Some(&error.to_string())).into_response(),
        );
    }

    match state.expense_store.update(&expense_id, draft.clone()).await {
        Ok(expense) => {
            tracing::info!("updated expense {}", expense.id);
            Ok(Redirect::to(endpoints::EXPENSES_VIEW).into_response())
        }
        Err(Error::NotFound) => Err(Error::NotFound),
        Err(error) => {
            tracing::error!("could not update expense {expense_id}: {error}");
            Ok(edit_expense_view(
                &expense_id,
                &draft,
                Some("Failed to save changes. Try again."),
            )
            .into_response())
        }
    }
}
