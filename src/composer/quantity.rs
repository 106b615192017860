//! Per-line quantity edits.

use thiserror::Error;
use tracing::warn;

use super::ProductLine;

/// Raw quantity as it arrives from the row editor.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityInput {
    Count(i64),
    Text(String),
}

impl From<u32> for QuantityInput {
    fn from(value: u32) -> Self {
        QuantityInput::Count(i64::from(value))
    }
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        QuantityInput::Count(i64::from(value))
    }
}

impl From<i64> for QuantityInput {
    fn from(value: i64) -> Self {
        QuantityInput::Count(value)
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(value: String) -> Self {
        QuantityInput::Text(value)
    }
}

/// Quantity input that could not be used as-is. The line was set to 0.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuantityError {
    #[error("Quantity cannot be negative: {0}")]
    Negative(String),
    #[error("Quantity is not a number: {0:?}")]
    NotANumber(String),
    #[error("Quantity must be a whole number: {0}")]
    NotWhole(String),
    #[error("Quantity is too large: {0}")]
    TooLarge(String),
}

/// Converts raw input into a quantity. Empty text counts as 0.
pub fn parse_quantity(input: &QuantityInput) -> Result<u32, QuantityError> {
    match input {
        QuantityInput::Count(count) => count_to_quantity(*count),
        QuantityInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            if let Ok(count) = trimmed.parse::<i64>() {
                return count_to_quantity(count);
            }
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    if value.fract() != 0.0 {
                        Err(QuantityError::NotWhole(trimmed.to_string()))
                    } else if value < 0.0 {
                        Err(QuantityError::Negative(trimmed.to_string()))
                    } else if value > f64::from(u32::MAX) {
                        Err(QuantityError::TooLarge(trimmed.to_string()))
                    } else {
                        Ok(value as u32)
                    }
                }
                _ => Err(QuantityError::NotANumber(trimmed.to_string())),
            }
        }
    }
}

fn count_to_quantity(count: i64) -> Result<u32, QuantityError> {
    if count < 0 {
        return Err(QuantityError::Negative(count.to_string()));
    }
    u32::try_from(count).map_err(|_| QuantityError::TooLarge(count.to_string()))
}

/// Result of a quantity edit.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityUpdate {
    pub lines: Vec<ProductLine>,
    /// Whether a line with the requested product id exists.
    pub matched: bool,
    /// Set when the input was unusable and the line was floored to 0.
    pub rejected: Option<QuantityError>,
}

/// Replaces the quantity of the line matching `product_id`.
///
/// Other lines are moved through untouched. Unusable input sets the line to
/// 0 and is reported in [`QuantityUpdate::rejected`]; it is never a hard
/// failure.
pub fn set_quantity(
    mut lines: Vec<ProductLine>,
    product_id: &str,
    input: QuantityInput,
) -> QuantityUpdate {
    let (quantity, rejected) = match parse_quantity(&input) {
        Ok(quantity) => (quantity, None),
        Err(e) => {
            warn!(product_id, error = %e, "Quantity input rejected, using 0");
            (0, Some(e))
        }
    };

    let matched = match lines.iter_mut().find(|line| line.id == product_id) {
        Some(line) => {
            line.quantity = quantity;
            true
        }
        None => false,
    };

    QuantityUpdate {
        lines,
        matched,
        rejected,
    }
}
