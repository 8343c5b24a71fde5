//! Client-side search and date filtering over the full expense list.
//!
//! The expense API has no query parameters, so the dashboard fetches every
//! record and narrows the list here before paging it.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::expense::Expense;

/// The date ranges the dashboard can narrow the expense table to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Show every expense regardless of date.
    #[default]
    All,
    /// Show expenses from the current calendar month.
    Month,
    /// Show expenses from the current calendar year.
    Year,
}

impl FilterMode {
    /// The value used for this mode in query strings and form options.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Month => "month",
            FilterMode::Year => "year",
        }
    }

    /// Whether an expense dated `date` falls inside this mode's range,
    /// relative to `today` in the server's local timezone.
    pub fn admits(&self, date: Date, today: Date) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Month => date.year() == today.year() && date.month() == today.month(),
            FilterMode::Year => date.year() == today.year(),
        }
    }
}

/// Whether an expense passes both the search text and the date filter.
///
/// The search is a case-insensitive substring match on the description. An
/// empty search string matches everything.
pub fn matches(expense: &Expense, search: &str, filter: FilterMode, today: Date) -> bool {
    let description_matches = search.is_empty()
        || expense
            .description
            .to_lowercase()
            .contains(&search.to_lowercase());

    description_matches && filter.admits(expense.date, today)
}

/// Narrow `expenses` to the records matching the search text and date filter,
/// preserving their order.
pub fn filter_expenses<'a>(
    expenses: &'a [Expense],
    search: &str,
    filter: FilterMode,
    today: Date,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| matches(expense, search, filter, today))
        .collect()
}
