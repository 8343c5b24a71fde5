//! The expense dashboard: domain types, route handlers and templates.

mod aggregation;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod details_page;
mod edit_endpoint;
mod edit_page;
mod expenses_page;
mod filter;
mod form;
mod new_page;
mod view;

pub use aggregation::ExpenseSummary;
pub use self::core::{Expense, ExpenseDraft, ExpenseId};
pub use create_endpoint::create_expense;
pub use delete_endpoint::delete_expense;
pub use details_page::get_expense_details_page;
pub use edit_endpoint::update_expense;
pub use edit_page::get_edit_expense_page;
pub use expenses_page::{get_expenses_page, get_index_page};
pub use filter::FilterMode;
pub use new_page::get_new_expense_page;
