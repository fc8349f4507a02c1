//! The priced, validated booking handed from the detail page to checkout.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Bike;
use crate::error::{AppError, Result};
use crate::pricing::{quote, validate, DateRange, DateSelection, RentalQuote};

/// A booking ready for payment.
///
/// Built once by [`BookingRequest::prepare`]; the quote inside is never
/// recomputed by later steps.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    reference: Uuid,
    bike_id: u32,
    bike_name: String,
    range: DateRange,
    quote: RentalQuote,
    currency: String,
}

impl BookingRequest {
    /// Validate the selection and price it against the bike's daily rate.
    pub fn prepare(bike: &Bike, selection: &DateSelection, currency: &str) -> Result<Self> {
        if !bike.is_available() {
            return Err(AppError::Unavailable {
                bike_id: bike.id,
                availability: bike.availability,
            });
        }

        validate(selection).into_result()?;

        // validate() guarantees both ends are present
        let range = selection.range().ok_or_else(|| {
            AppError::Internal("validated selection is missing a date".to_string())
        })?;
        let quote = quote(&range, bike.price_per_day)?;

        let request = Self {
            reference: Uuid::new_v4(),
            bike_id: bike.id,
            bike_name: bike.name.clone(),
            range,
            quote,
            currency: currency.to_string(),
        };

        tracing::info!(
            reference = %request.reference,
            bike_id = request.bike_id,
            days = request.quote.days(),
            total = %request.quote.total_price(),
            "booking request prepared"
        );

        Ok(request)
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn bike_id(&self) -> u32 {
        self.bike_id
    }

    pub fn bike_name(&self) -> &str {
        &self.bike_name
    }

    pub fn pickup(&self) -> DateTime<Utc> {
        self.range.start
    }

    pub fn return_at(&self) -> DateTime<Utc> {
        self.range.end
    }

    pub fn quote(&self) -> &RentalQuote {
        &self.quote
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
