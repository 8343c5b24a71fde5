//! Defines the expense record and the draft used to create or replace one.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The identifier the expense API assigns to a record.
///
/// The API owns these values, so the server treats them as opaque strings and
/// never parses or generates them.
pub type ExpenseId = String;

/// An expense record as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the expense API.
    #[serde(rename = "expenseId")]
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub description: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The date the expense occurred.
    #[serde(with = "api_date")]
    pub date: Date,
}

/// The client-supplied fields of an expense, without the server-assigned ID.
///
/// Used both for creating a new expense and for replacing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// A short description of what the money was spent on.
    pub description: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The date the expense occurred.
    #[serde(with = "api_date")]
    pub date: Date,
}

impl ExpenseDraft {
    /// Check that the draft describes a well-formed expense.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is negative, NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), Error> {
        if self.amount.is_finite() && self.amount >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidAmount(self.amount))
        }
    }
}

/// Serde adapter for the date format the expense API uses.
///
/// The API sends dates as ISO 8601 timestamps ("2025-03-14T00:00:00") but
/// only the calendar date is meaningful, so everything after the first 'T'
/// is discarded on the way in. Outgoing dates are sent as a bare
/// "[year]-[month]-[day]" string, which the API accepts.
mod api_date {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        // `split` always yields at least one item, even for an empty string.
        let date_part = raw.split('T').next().unwrap_or_default();

        Date::parse(date_part, DATE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod expense_tests {
    use time::macros::date;

    use crate::Error;

    use super::{Expense, ExpenseDraft};

    #[test]
    fn parses_record_with_timestamp_date() {
        let json = r#"{
            "expenseId": "17",
            "description": "Coffee",
            "amount": 4.5,
            "date": "2025-03-14T00:00:00"
        }"#;
        let want = Expense {
            id: "17".to_owned(),
            description: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2025 - 03 - 14),
        };

        let got: Expense = serde_json::from_str(json).expect("Could not parse expense");

        assert_eq!(want, got);
    }

    #[test]
    fn parses_record_with_bare_date() {
        let json = r#"{
            "expenseId": "3",
            "description": "Rent",
            "amount": 1200.0,
            "date": "2025-01-01"
        }"#;

        let got: Expense = serde_json::from_str(json).expect("Could not parse expense");

        assert_eq!(got.date, date!(2025 - 01 - 01));
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"{
            "expenseId": "3",
            "description": "Rent",
            "amount": 1200.0,
            "date": "not a date"
        }"#;

        let got: Result<Expense, _> = serde_json::from_str(json);

        assert!(got.is_err(), "want error, got {got:?}");
    }

    #[test]
    fn serializes_draft_with_api_field_names() {
        let draft = ExpenseDraft {
            description: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2025 - 03 - 14),
        };
        let want = r#"{"description":"Coffee","amount":4.5,"date":"2025-03-14"}"#;

        let got = serde_json::to_string(&draft).expect("Could not serialize draft");

        assert_eq!(want, got);
    }

    #[test]
    fn accepts_valid_draft() {
        let draft = ExpenseDraft {
            description: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2025 - 03 - 14),
        };

        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn accepts_zero_amount() {
        let draft = ExpenseDraft {
            description: "Free sample".to_owned(),
            amount: 0.0,
            date: date!(2025 - 03 - 14),
        };

        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_amount() {
        let draft = ExpenseDraft {
            description: "Refund".to_owned(),
            amount: -10.0,
            date: date!(2025 - 03 - 14),
        };

        assert_eq!(draft.validate(), Err(Error::InvalidAmount(-10.0)));
    }

    #[test]
    fn rejects_non_finite_amount() {
        let draft = ExpenseDraft {
            description: "Oops".to_owned(),
            amount: f64::NAN,
            date: date!(2025 - 03 - 14),
        };

        assert!(draft.validate().is_err());
    }
}
