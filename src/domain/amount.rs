//! Amount value object.
//!
//! Clients send the amount either as a JSON number or as the text of a
//! number (form inputs). Both are parsed explicitly; nothing is coerced.

use serde::{Deserialize, Serialize};

use crate::config::{MSG_AMOUNT_NOT_POSITIVE, MSG_REQUIRED_FIELDS};
use crate::errors::{AppError, AppResult};

/// Raw amount as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

/// Strictly positive, finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Validate an already numeric amount.
    pub fn new(value: f64) -> AppResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(AppError::validation(MSG_AMOUNT_NOT_POSITIVE))
        }
    }

    /// Parse a wire amount.
    ///
    /// # Errors
    /// Blank text counts as a missing field; anything else that is not a
    /// positive number is rejected as such.
    pub fn parse(input: &AmountInput) -> AppResult<Self> {
        match input {
            AmountInput::Number(value) => Self::new(*value),
            AmountInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(AppError::validation(MSG_REQUIRED_FIELDS));
                }
                let value: f64 = text
                    .parse()
                    .map_err(|_| AppError::validation(MSG_AMOUNT_NOT_POSITIVE))?;
                Self::new(value)
            }
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
