//! Checkout form checks and booking confirmation.
//!
//! Nothing is charged and nothing is stored; a confirmation only means the
//! payment form was filled in correctly for a prepared request.

use serde::{Deserialize, Serialize};

use super::request::BookingRequest;
use crate::error::Result;

/// Minimum digits in a card number
pub const CARD_NUMBER_DIGITS: usize = 16;
/// Minimum digits in a CVV
pub const CVV_MIN_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
}

/// What the user typed into the payment form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub method: Option<PaymentMethod>,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub cvv: String,
    /// `MM/YY`
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cardholder_name: String,
}

/// Why the payment form cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutRejection {
    #[error("Please select a payment method.")]
    MissingPaymentMethod,

    #[error("Invalid credit card number.")]
    InvalidCardNumber,

    #[error("Please enter a valid CVV.")]
    InvalidCvv,

    #[error("Please enter the expiry date.")]
    MissingExpiry,

    #[error("Please enter the cardholder name.")]
    MissingCardholderName,
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.trim().split_once('/') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Check the payment form, first failure wins, and return the chosen method.
///
/// Card fields are only looked at for credit card payments.
pub fn validate_payment(
    details: &PaymentDetails,
) -> std::result::Result<PaymentMethod, CheckoutRejection> {
    let method = details
        .method
        .ok_or(CheckoutRejection::MissingPaymentMethod)?;

    if method == PaymentMethod::CreditCard {
        if digit_count(&details.card_number) < CARD_NUMBER_DIGITS {
            return Err(CheckoutRejection::InvalidCardNumber);
        }
        if digit_count(&details.cvv) < CVV_MIN_DIGITS {
            return Err(CheckoutRejection::InvalidCvv);
        }
        if !is_valid_expiry(&details.expiry) {
            return Err(CheckoutRejection::MissingExpiry);
        }
        if details.cardholder_name.trim().is_empty() {
            return Err(CheckoutRejection::MissingCardholderName);
        }
    }

    Ok(method)
}

/// A booking whose payment form passed validation
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking: BookingRequest,
    pub payment_method: PaymentMethod,
}

impl BookingRequest {
    /// Check the payment form and confirm this booking.
    pub fn confirm(self, payment: &PaymentDetails) -> Result<BookingConfirmation> {
        let payment_method = validate_payment(payment).map_err(|reason| {
            tracing::debug!(reference = %self.reference(), %reason, "checkout rejected");
            reason
        })?;

        tracing::info!(
            reference = %self.reference(),
            ?payment_method,
            "booking confirmed"
        );

        Ok(BookingConfirmation {
            booking: self,
            payment_method,
        })
    }
}
