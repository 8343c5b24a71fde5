//! Defines the route handler for the dashboard page that displays expenses
//! as a table with summary cards, search and pagination.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    pagination::{
        PaginationConfig, PaginationIndicator, clamp_page, create_pagination_indicators,
        page_count,
    },
    stores::ExpenseStore,
    timezone::get_local_offset,
};

use super::{
    aggregation::ExpenseSummary,
    core::Expense,
    filter::{FilterMode, filter_expenses},
    view::{expenses_error_view, expenses_view},
};

/// The raw query parameters of the dashboard URL.
///
/// All parameters are optional so that a bare `/expenses` renders the default
/// view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensesQueryParams {
    /// Case-insensitive text to match against expense descriptions.
    pub search: Option<String>,
    /// The date range to narrow the table to.
    pub filter: Option<FilterMode>,
    /// The 1-based page of the filtered table to display.
    pub page: Option<u64>,
}

/// URL encoding helper for the dashboard query parameters.
///
/// This is used to build consistent pagination links from already-normalized
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensesQuery {
    /// The normalized search text, empty when no search is active.
    pub search: String,
    /// The active date filter.
    pub filter: FilterMode,
    /// The current page.
    pub page: u64,
}

impl ExpensesQuery {
    fn from_params(params: &ExpensesQueryParams) -> Self {
        Self {
            search: params.search.clone().unwrap_or_default(),
            filter: params.filter.unwrap_or_default(),
            page: params.page.unwrap_or(1),
        }
    }

    pub(crate) fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub(crate) fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self)
            .inspect_err(|error| {
                tracing::error!("could not encode dashboard query string: {error}");
            })
            .unwrap_or_default()
    }

    pub(crate) fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

/// The data needed to render the dashboard.
pub struct ExpensesViewModel {
    /// Summary figures over the full, unfiltered expense list.
    pub summary: ExpenseSummary,
    /// The expenses to display on the current page, newest first.
    pub rows: Vec<Expense>,
    /// The normalized query the page was rendered for.
    pub query: ExpensesQuery,
    /// The number of pages the filtered list spans.
    pub page_count: u64,
    /// The pagination controls to render below the table.
    pub indicators: Vec<PaginationIndicator>,
    /// Whether the store holds any expenses at all, ignoring filters.
    pub has_any_expenses: bool,
}

/// The state needed for the dashboard page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    /// The store that reads expenses from the remote API.
    pub expense_store: S,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S> FromRef<AppState<S>> for ExpensesPageState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            pagination_config: state.pagination_config,
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render an overview of the user's expenses.
///
/// The full expense list is fetched on every request and narrowed down here,
/// since the expense API offers no server-side search or paging.
pub async fn get_expenses_page<S>(
    State(state): State<ExpensesPageState<S>>,
    Query(query_params): Query<ExpensesQueryParams>,
) -> Result<Response, Error>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    let today = current_local_date(&state.local_timezone)?;
    let query = ExpensesQuery::from_params(&query_params);

    let expenses = match state.expense_store.list().await {
        Ok(expenses) => expenses,
        Err(error) => {
            tracing::error!("could not fetch expenses: {error}");
            return Ok(expenses_error_view(&query, &error.to_string()).into_response());
        }
    };

    let model = build_view_model(expenses, query, state.pagination_config, today);

    Ok(expenses_view(&model).into_response())
}

/// Today's date in the timezone the server was configured with.
pub(crate) fn current_local_date(local_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        tracing::error!("Invalid timezone {}", local_timezone);
        return Err(Error::InvalidTimezone(local_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

fn build_view_model(
    mut expenses: Vec<Expense>,
    query: ExpensesQuery,
    pagination_config: PaginationConfig,
    today: Date,
) -> ExpensesViewModel {
    // The API returns records oldest first. The dashboard shows newest first.
    expenses.reverse();

    // The summary cards always cover the full list so that they stay stable
    // while the user searches.
    let summary = ExpenseSummary::from_expenses(&expenses);
    let has_any_expenses = !expenses.is_empty();

    let filtered = filter_expenses(&expenses, &query.search, query.filter, today);

    let page_size = pagination_config.page_size;
    let page_count = page_count(filtered.len(), page_size);
    let curr_page = clamp_page(query.page, page_count);

    let page_start = (curr_page as usize - 1) * page_size;
    let rows = filtered
        .iter()
        .skip(page_start)
        .take(page_size)
        .map(|&expense| expense.clone())
        .collect();

    let indicators = create_pagination_indicators(curr_page, page_count);

    ExpensesViewModel {
        summary,
        rows,
        query: query.with_page(curr_page),
        page_count,
        indicators,
        has_any_expenses,
    }
}

/// Redirect the root URL to the dashboard.
pub async fn get_index_page() -> axum::response::Redirect {
    axum::response::Redirect::to(endpoints::EXPENSES_VIEW)
}
