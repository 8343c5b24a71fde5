//! Defines the route handler for creating a new expense.

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, Error, endpoints, stores::ExpenseStore};

use super::{core::ExpenseDraft, new_page::new_expense_view};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that writes expenses through the remote API.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for CreateExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Create a new expense from the submitted form and redirect to the dashboard.
///
/// A failed submission re-renders the form with the entered values and an
/// error message instead of redirecting.
pub async fn create_expense<S>(
    State(state): State<CreateExpenseState<S>>,
    Form(draft): Form<ExpenseDraft>,
) -> Result<Response, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    if let Err(error) = draft.validate() {
        return Ok(new_expense_view(Some(&draft), Some(&error.to_string())).into_response());
    }

    match state.expense_store.create(draft.clone()).await {
        Ok(expense) => {
            tracing::info!("created expense {}", expense.id);
            Ok(Redirect::to(endpoints::EXPENSES_VIEW).into_response())
        }
        Err(error) => {
            tracing::error!("could not create expense: {error}");
            Ok(new_expense_view(Some(&draft), Some("Failed to create expense. Try again."))
                .into_response())
        }
    }
}

#[cfg(test)]
mod create_expense_tests {
    use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        Error,
        expense::ExpenseDraft,
        test_utils::{FakeExpenseStore, parse_html},
    };

    use super::{CreateExpenseState, create_expense};

    fn coffee_draft() -> ExpenseDraft {
        ExpenseDraft {
            description: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2025 - 03 - 14),
        }
    }

    #[tokio::test]
    async fn valid_form_creates_expense_and_redirects() {
        let store = FakeExpenseStore::with_expenses(vec![]);
        let state = CreateExpenseState {
            expense_store: store.clone(),
        };

        let response = create_expense(State(state), Form(coffee_draft()))
            .await
            .expect("Could not create expense")
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].description, "Coffee");
    }

    #[tokio::test]
    async fn negative_amount_rerenders_form_without_writing() {
        let store = FakeExpenseStore::with_expenses(vec![]);
        let state = CreateExpenseState {
            expense_store: store.clone(),
        };
        let draft = ExpenseDraft {
            amount: -5.0,
            ..coffee_draft()
        };

        let response = create_expense(State(state), Form(draft))
            .await
            .expect("Could not render form")
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.write_count(), 0);

        let html = parse_html(response).await;
        let selector = Selector::parse("[data-form-error]").expect("Could not parse selector");
        assert!(html.select(&selector).next().is_some());
    }

    #[tokio::test]
    async fn store_failure_rerenders_form_with_entered_values() {
        let store = FakeExpenseStore::failing(Error::ApiStatus(500));
        let state = CreateExpenseState {
            expense_store: store,
        };

        let response = create_expense(State(state), Form(coffee_draft()))
            .await
            .expect("Could not render form")
            .into_response();

        let html = parse_html(response).await;

        let error_selector =
            Selector::parse("[data-form-error]").expect("Could not parse selector");
        assert!(html.select(&error_selector).next().is_some());

        let input_selector = Selector::parse("input[name=description]")
            .expect("Could not parse selector");
        let input = html
            .select(&input_selector)
            .next()
            .expect("Missing description input");
        assert_eq!(input.attr("value"), Some("Coffee"));
    }
}
