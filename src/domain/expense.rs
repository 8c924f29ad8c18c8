//! Expense domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::amount::{Amount, AmountInput};
use super::expense_date::{DatePolicy, ExpenseDate};
use crate::config::MSG_REQUIRED_FIELDS;
use crate::errors::{AppError, AppResult};

/// Expense domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Groceries")]
    pub description: String,
    #[schema(example = 42.5)]
    pub amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    #[schema(example = "2024-03-01")]
    pub date: String,
    /// `null` when the expense is uncategorised
    #[schema(example = "Food")]
    pub category: Option<String>,
}

/// Create expense input, as received from a client.
///
/// Only presence is checked here; [`NewExpense::parse`] applies the
/// remaining rules.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateExpense {
    #[validate(required(message = "Description, amount, and date are required."))]
    #[schema(example = "Groceries")]
    pub description: Option<String>,
    /// A number, or a string holding one
    #[validate(required(message = "Description, amount, and date are required."))]
    #[schema(value_type = Option<f64>, example = 42.5)]
    pub amount: Option<AmountInput>,
    /// `YYYY-MM-DD` or an ISO-8601 date-time
    #[validate(required(message = "Description, amount, and date are required."))]
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    #[schema(example = "Food")]
    pub category: Option<String>,
}

/// Validated expense ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Amount,
    pub date: ExpenseDate,
    pub category: Option<String>,
}

impl NewExpense {
    /// Validate a create request.
    ///
    /// Checks run in order: required fields, amount, date. The first
    /// failing check decides the error message.
    pub fn parse(input: CreateExpense, policy: DatePolicy) -> AppResult<Self> {
        input.validate()?;

        let (Some(description), Some(amount), Some(date)) =
            (input.description, input.amount, input.date)
        else {
            return Err(AppError::validation(MSG_REQUIRED_FIELDS));
        };
        if description.trim().is_empty() || date.trim().is_empty() {
            return Err(AppError::validation(MSG_REQUIRED_FIELDS));
        }

        let amount = Amount::parse(&amount)?;
        let date = ExpenseDate::parse(&date, policy)?;
        let category = input.category.filter(|c| !c.is_empty());

        Ok(Self {
            description,
            amount,
            date,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MSG_AMOUNT_NOT_POSITIVE, MSG_DATE_FORMAT};

    fn request(description: &str, amount: AmountInput, date: &str) -> CreateExpense {
        CreateExpense {
            description: Some(description.to_string()),
            amount: Some(amount),
            date: Some(date.to_string()),
            category: None,
        }
    }

    fn rejection(input: CreateExpense) -> String {
        match NewExpense::parse(input, DatePolicy::Strict) {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_is_normalized() {
        let mut input = request("Coffee", AmountInput::Text("3.5".into()), "2024-03-01T09:00:00Z");
        input.category = Some("Food".into());

        let expense = NewExpense::parse(input, DatePolicy::Strict).unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount.value(), 3.5);
        assert_eq!(expense.date.as_str(), "2024-03-01");
        assert_eq!(expense.category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_missing_fields_rejected_first() {
        assert_eq!(rejection(CreateExpense::default()), MSG_REQUIRED_FIELDS);

        // Missing date wins over a bad amount.
        let mut input = request("Coffee", AmountInput::Number(-1.0), "2024-03-01");
        input.date = None;
        assert_eq!(rejection(input), MSG_REQUIRED_FIELDS);

        assert_eq!(
            rejection(request("  ", AmountInput::Number(1.0), "2024-03-01")),
            MSG_REQUIRED_FIELDS
        );
        assert_eq!(
            rejection(request("Coffee", AmountInput::Number(1.0), "")),
            MSG_REQUIRED_FIELDS
        );
    }

    #[test]
    fn test_missing_amount_fails_presence_check() {
        let mut input = request("Coffee", AmountInput::Number(1.0), "2024-03-01");
        assert!(input.validate().is_ok());

        input.amount = None;
        assert!(input.validate().is_err());
        assert_eq!(rejection(input), MSG_REQUIRED_FIELDS);
    }

    #[test]
    fn test_amount_checked_before_date() {
        assert_eq!(
            rejection(request("Coffee", AmountInput::Number(0.0), "not a date")),
            MSG_AMOUNT_NOT_POSITIVE
        );
        assert_eq!(
            rejection(request("Coffee", AmountInput::Number(2.0), "not a date")),
            MSG_DATE_FORMAT
        );
    }

    #[test]
    fn test_empty_category_is_absent() {
        let mut input = request("Coffee", AmountInput::Number(2.0), "2024-03-01");
        input.category = Some(String::new());

        let expense = NewExpense::parse(input, DatePolicy::Strict).unwrap();
        assert_eq!(expense.category, None);
    }
}
