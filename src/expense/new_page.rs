//! Defines the route handler for the page with the form to create a new expense.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{core::ExpenseDraft, form::expense_form};

/// The page with the form for creating an expense.
///
/// `prefill` and `error_message` are set when a submission failed, so that
/// the user does not lose what they typed.
pub fn new_expense_view(prefill: Option<&ExpenseDraft>, error_message: Option<&str>) -> Markup {
    let content = html! {
        (NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html())

        main class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold my-6" { "New Expense" }

            div class="w-full"
            {
                (expense_form(
                    endpoints::CREATE_EXPENSE,
                    "Create Expense",
                    prefill,
                    error_message,
                ))
            }
        }
    };

    base("New Expense", &content)
}

/// Display the form for creating an expense.
pub async fn get_new_expense_page() -> Markup {
    new_expense_view(None, None)
}
