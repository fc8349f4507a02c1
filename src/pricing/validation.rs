//! Gatekeeping checks run before a quote may go to checkout.
//!
//! Rejections are ordinary values. The booking page shows the message of
//! whichever rejection comes back, so only one is ever reported at a time.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{DateRange, DateSelection};

/// Why a date selection or price cannot be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("Please select a rental start date.")]
    MissingStart,

    #[error("Please select a rental end date.")]
    MissingEnd,

    #[error("Start date must be before the end date.")]
    StartNotBeforeEnd,

    #[error("Price per day is negative or too large to total.")]
    InvalidPrice,
}

/// Outcome of `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(Rejection),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// Check a date selection before checkout.
///
/// Checks run in order and the first failure wins:
/// 1. start missing
/// 2. end missing
/// 3. start not strictly before end (equal dates are rejected)
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use bikerental_pricing::pricing::{validate, DateSelection, Rejection, ValidationResult};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// let selection = DateSelection::from_dates(Some(day), Some(day));
/// assert_eq!(validate(&selection), ValidationResult::Invalid(Rejection::StartNotBeforeEnd));
/// ```
pub fn validate(selection: &DateSelection) -> ValidationResult {
    let result = match (selection.start, selection.end) {
        (None, _) => ValidationResult::Invalid(Rejection::MissingStart),
        (Some(_), None) => ValidationResult::Invalid(Rejection::MissingEnd),
        (Some(start), Some(end)) if !DateRange::new(start, end).is_ordered() => {
            ValidationResult::Invalid(Rejection::StartNotBeforeEnd)
        }
        (Some(_), Some(_)) => ValidationResult::Valid,
    };

    tracing::debug!(?selection, ?result, "validated date selection");
    result
}

/// Reject negative daily rates instead of letting them flow into a total.
pub fn validate_price(price_per_day: Decimal) -> Result<(), Rejection> {
    if price_per_day.is_sign_negative() && !price_per_day.is_zero() {
        return Err(Rejection::InvalidPrice);
    }
    Ok(())
}
