//! The shared form markup for creating and editing an expense.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    expense::ExpenseDraft,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

const DATE_INPUT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

fn format_date_input(date: Date) -> String {
    // The format description only uses infallible components.
    date.format(DATE_INPUT_FORMAT).unwrap_or_default()
}

/// The form for entering the fields of an expense.
///
/// Renders empty inputs when `prefill` is `None` (creating) and pre-populated
/// inputs otherwise (editing). `error_message`, when set, is displayed above
/// the submit button.
pub fn expense_form(
    action: &str,
    submit_label: &str,
    prefill: Option<&ExpenseDraft>,
    error_message: Option<&str>,
) -> Markup {
    let description = prefill.map(|draft| draft.description.as_str());
    let amount = prefill.map(|draft| draft.amount.to_string());
    let date = prefill.map(|draft| format_date_input(draft.date));

    html! {
        form action=(action) method="post" class="space-y-4"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    type="text"
                    name="description"
                    id="description"
                    value=[description]
                    class=(FORM_TEXT_INPUT_STYLE)
                    placeholder="e.g. Groceries"
                    required;
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    type="number"
                    name="amount"
                    id="amount"
                    value=[amount]
                    min="0"
                    step="0.01"
                    class=(FORM_TEXT_INPUT_STYLE)
                    placeholder="0.00"
                    required;
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    type="date"
                    name="date"
                    id="date"
                    value=[date]
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            @if let Some(message) = error_message {
                p class="text-red-600 dark:text-red-500 text-sm" data-form-error
                {
                    (message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}

#[cfg(test)]
mod expense_form_tests {
    use time::macros::date;

    use crate::expense::ExpenseDraft;

    use super::expense_form;

    #[test]
    fn renders_empty_inputs_without_prefill() {
        let markup = expense_form("/expenses", "Create", None, None).into_string();

        assert!(markup.contains("name=\"description\""));
        assert!(markup.contains("name=\"amount\""));
        assert!(markup.contains("name=\"date\""));
        assert!(!markup.contains("data-form-error"));
    }

    #[test]
    fn renders_prefilled_inputs() {
        let draft = ExpenseDraft {
            description: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2025 - 03 - 14),
        };

        let markup = expense_form("/expenses/1/edit", "Save", Some(&draft), None).into_string();

        assert!(markup.contains("value=\"Coffee\""));
        assert!(markup.contains("value=\"4.5\""));
        assert!(markup.contains("value=\"2025-03-14\""));
    }

    #[test]
    fn renders_error_message() {
        let markup =
            expense_form("/expenses", "Create", None, Some("Something went wrong")).into_string();

        assert!(markup.contains("data-form-error"));
        assert!(markup.contains("Something went wrong"));
    }
}
