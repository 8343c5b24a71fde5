//! The templates for the dashboard page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency,
    },
    navigation::NavBar,
    pagination::PaginationIndicator,
};

use super::{
    core::Expense,
    expenses_page::{ExpensesQuery, ExpensesViewModel},
    filter::FilterMode,
};

const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Shorten long descriptions so that they do not stretch the table.
fn truncate_description(description: &str) -> String {
    let mut graphemes = description.graphemes(true);
    let truncated: String = graphemes.by_ref().take(MAX_DESCRIPTION_GRAPHEMES).collect();

    if graphemes.next().is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}

fn summary_cards(model: &ExpensesViewModel) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-screen-lg mb-6"
        {
            div class=(CARD_STYLE) data-summary-total
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Total Spent" }
                p class="text-2xl font-semibold" { (format_currency(model.summary.total)) }
            }

            div class=(CARD_STYLE) data-summary-average
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Average Expense" }
                p class="text-2xl font-semibold" { (format_currency(model.summary.average)) }
            }

            div class=(CARD_STYLE) data-summary-maximum
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Highest Expense" }
                p class="text-2xl font-semibold" { (format_currency(model.summary.maximum)) }
            }
        }
    }
}

fn filter_option(mode: FilterMode, label: &str, selected: FilterMode) -> Markup {
    html! {
        option value=(mode.as_query_value()) selected[mode == selected] { (label) }
    }
}

/// The search and filter form.
///
/// The form deliberately carries no page field so that changing the search or
/// filter always lands on the first page of the new result set.
fn search_form(query: &ExpensesQuery) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::EXPENSES_VIEW)
            class="flex flex-col md:flex-row gap-2 w-full max-w-screen-lg mb-4"
        {
            input
                type="search"
                name="search"
                value=(query.search)
                placeholder="Search expenses..."
                class=(FORM_TEXT_INPUT_STYLE);

            select name="filter" class=(FORM_TEXT_INPUT_STYLE)
            {
                (filter_option(FilterMode::All, "All dates", query.filter))
                (filter_option(FilterMode::Month, "This month", query.filter))
                (filter_option(FilterMode::Year, "This year", query.filter))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let details_url = format_endpoint(endpoints::EXPENSE_DETAILS_VIEW, &expense.id);
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, &expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, &expense.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-row
        {
            td class=(TABLE_CELL_STYLE) { (truncate_description(&expense.description)) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE) { (expense.date) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(details_url) class=(LINK_STYLE) { "Details" }
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    form action=(delete_url) method="post"
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        }
    }
}

fn empty_state(has_any_expenses: bool) -> Markup {
    let message = if has_any_expenses {
        "No expenses match your search."
    } else {
        "No expenses yet. Add your first expense to get started."
    };

    html! {
        p class="py-8 text-gray-500 dark:text-gray-400 text-center" data-empty-state
        {
            (message)
        }
    }
}

fn pagination_nav(model: &ExpensesViewModel) -> Markup {
    let page_url = |page: u64| model.query.with_page(page).to_url(endpoints::EXPENSES_VIEW);

    html! {
        nav aria-label="Expense table pages" class="flex gap-2 mt-4"
        {
            @for indicator in &model.indicators {
                @match indicator {
                    PaginationIndicator::BackButton(page) => {
                        a href=(page_url(*page)) class=(LINK_STYLE) { "Previous" }
                    }
                    PaginationIndicator::Page(page) => {
                        a href=(page_url(*page)) class=(LINK_STYLE) { (page) }
                    }
                    PaginationIndicator::CurrPage(page) => {
                        span aria-current="page" class="font-bold" { (page) }
                    }
                    PaginationIndicator::NextButton(page) => {
                        a href=(page_url(*page)) class=(LINK_STYLE) { "Next" }
                    }
                }
            }
        }
    }
}

/// The dashboard page.
pub fn expenses_view(model: &ExpensesViewModel) -> Markup {
    let content = html! {
        (NavBar::new(endpoints::EXPENSES_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6" { "Expense Dashboard" }

            (summary_cards(model))
            (search_form(&model.query))

            div class="relative overflow-x-auto shadow-md sm:rounded-lg w-full max-w-screen-lg"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for expense in &model.rows {
                            (expense_row(expense))
                        }
                    }
                }

                @if model.rows.is_empty() {
                    (empty_state(model.has_any_expenses))
                }
            }

            @if model.page_count > 1 {
                (pagination_nav(model))
            }
        }
    };

    base("Dashboard", &content)
}

/// The dashboard page when the expense list could not be fetched.
///
/// The search form stays usable so that the user can retry without losing
/// their query.
pub fn expenses_error_view(query: &ExpensesQuery, message: &str) -> Markup {
    let content = html! {
        (NavBar::new(endpoints::EXPENSES_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6" { "Expense Dashboard" }

            (search_form(query))

            div
                class="w-full max-w-screen-lg p-4 text-red-800 bg-red-50 rounded-lg
                    dark:bg-gray-800 dark:text-red-400"
                data-error-panel
            {
                p { "Error: " (message) }
                p
                {
                    a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE) { "Try again" }
                }
            }
        }
    };

    base("Dashboard", &content)
}
