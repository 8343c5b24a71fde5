//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense, delete_expense, get_edit_expense_page, get_expense_details_page,
        get_expenses_page, get_index_page, get_new_expense_page, update_expense,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    stores::ExpenseStore,
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::EXPENSES_VIEW,
            get(get_expenses_page::<S>).post(create_expense::<S>),
        )
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_new_expense_page))
        .route(
            endpoints::EXPENSE_DETAILS_VIEW,
            get(get_expense_details_page::<S>),
        )
        .route(
            endpoints::EDIT_EXPENSE_VIEW,
            get(get_edit_expense_page::<S>).post(update_expense::<S>),
        )
        .route(endpoints::DELETE_EXPENSE, post(delete_expense::<S>))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod root_route_tests {
    use axum::http::StatusCode;

    use crate::{endpoints, expense::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await;

        let response = axum::response::IntoResponse::into_response(response);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get("location")
                .and_then(|header| header.to_str().ok()),
            Some(endpoints::EXPENSES_VIEW)
        );
    }
}
