//! Summary figures for the overview cards on the dashboard.

use crate::expense::Expense;

/// The aggregate figures displayed above the expense table.
///
/// The figures always cover the full expense list, not the filtered view, so
/// they stay stable while the user searches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseSummary {
    /// The sum of all expense amounts.
    pub total: f64,
    /// The mean expense amount, or zero when there are no expenses.
    pub average: f64,
    /// The largest single expense amount, or zero when there are no expenses.
    pub maximum: f64,
}

impl ExpenseSummary {
    /// Compute the summary figures for `expenses`.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
        let average = if expenses.is_empty() {
            0.0
        } else {
            total / expenses.len() as f64
        };
        let maximum = expenses
            .iter()
            .map(|expense| expense.amount)
            .fold(0.0, f64::max);

        Self {
            total,
            average,
            maximum,
        }
    }
}

#[cfg(test)]
mod summary_tests {
    use time::macros::date;

    use crate::test_utils::expense;

    use super::ExpenseSummary;

    const TODAY: time::Date = date!(2025 - 03 - 14);

    #[test]
    fn empty_list_produces_zeroes() {
        let got = ExpenseSummary::from_expenses(&[]);

        assert_eq!(got, ExpenseSummary::default());
    }

    #[test]
    fn computes_total_average_and_maximum() {
        let expenses = [
            expense("1", "Coffee", 4.0, TODAY),
            expense("2", "Lunch", 16.0, TODAY),
            expense("3", "Bus fare", 2.5, TODAY),
        ];

        let got = ExpenseSummary::from_expenses(&expenses);

        assert_eq!(got.total, 22.5);
        assert_eq!(got.average, 7.5);
        assert_eq!(got.maximum, 16.0);
    }

    #[test]
    fn single_expense_is_its_own_summary() {
        let expenses = [expense("1", "Coffee", 4.5, TODAY)];

        let got = ExpenseSummary::from_expenses(&expenses);

        assert_eq!(got.total, 4.5);
        assert_eq!(got.average, 4.5);
        assert_eq!(got.maximum, 4.5);
    }

    #[test]
    fn total_is_average_times_count() {
        let expenses: Vec<_> = (1..=7)
            .map(|n| expense(&n.to_string(), "Item", n as f64 * 1.25, TODAY))
            .collect();

        let got = ExpenseSummary::from_expenses(&expenses);

        let want_total = got.average * expenses.len() as f64;
        assert!(
            (got.total - want_total).abs() < 1e-9,
            "want total {want_total}, got {}",
            got.total
        );
    }
}
