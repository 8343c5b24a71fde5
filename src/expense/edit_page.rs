//! Defines the route handler for the page with the form to edit an expense.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    expense::ExpenseId,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    stores::ExpenseStore,
};

use super::{core::ExpenseDraft, form::expense_form};

/// The state needed for the edit expense page.
#[derive(Debug, Clone)]
pub struct EditExpensePageState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that reads expenses from the remote API.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for EditExpensePageState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The page with the form for editing an expense.
pub fn edit_expense_view(
    expense_id: &ExpenseId,
    prefill: &ExpenseDraft,
    error_message: Option<&str>,
) -> Markup {
    let action = format_endpoint(endpoints::UPDATE_EXPENSE, expense_id);

    let content = html! {
        (NavBar::new(endpoints::EXPENSES_VIEW).into_html())

        main class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold my-6" { "Edit Expense" }

            div class="w-full"
            {
                (expense_form(&action, "Save Changes", Some(prefill), error_message))
            }
        }
    };

    base("Edit Expense", &content)
}

/// Display the form for editing an expense, pre-populated with its current
/// values.
///
/// This handler only reads. The record is not modified until the form is
/// submitted.
pub async fn get_edit_expense_page<S>(
    State(state): State<EditExpensePageState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    let expense = state.expense_store.get(&expense_id).await?;
    let prefill = ExpenseDraft {
        description: expense.description,
        amount: expense.amount,
        date: expense.date,
    };

    Ok(edit_expense_view(&expense_id, &prefill, None).into_response())
}
