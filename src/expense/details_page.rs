//! Defines the route handler for the page that displays a single expense.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    expense::ExpenseId,
    html::{BUTTON_DELETE_STYLE, CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
    stores::ExpenseStore,
};

use super::core::Expense;

/// The state needed for the expense details page.
#[derive(Debug, Clone)]
pub struct ExpenseDetailsState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that reads expenses from the remote API.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for ExpenseDetailsState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

fn details_view(expense: &Expense) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, &expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, &expense.id);

    let field = |label: &str, value: Markup| {
        html! {
            div class="py-2"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                p class="text-lg" { (value) }
            }
        }
    };

    let content = html! {
        (NavBar::new(endpoints::EXPENSES_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6" { "Expense Details" }

            div class=(CARD_STYLE) data-expense-details
            {
                (field("Description", html! { (expense.description) }))
                (field("Amount", html! { (format_currency(expense.amount)) }))
                (field("Date", html! { (expense.date) }))

                div class="flex gap-4 mt-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    form action=(delete_url) method="post"
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }

                    a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE) { "Back to Dashboard" }
                }
            }
        }
    };

    base("Expense Details", &content)
}

/// Display a single expense record.
pub async fn get_expense_details_page<S>(
    State(state): State<ExpenseDetailsState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    let expense = state.expense_store.get(&expense_id).await?;

    Ok(details_view(&expense).into_response())
}
