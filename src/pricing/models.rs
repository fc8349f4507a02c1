//! Value types for rental pricing.
//!
//! None of these are persisted. A `DateSelection` lives for as long as the
//! user is picking dates, and a `RentalQuote` is handed forward to checkout.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A proposed rental window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a range from calendar dates, both taken at midnight UTC.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// True when `start` is strictly earlier than `end`.
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }
}

/// Dates picked so far; either end may still be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl DateSelection {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Selection from optional calendar dates (midnight UTC).
    pub fn from_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            end: end.map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        }
    }

    /// The full range, once both ends are chosen.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }
}

impl From<DateRange> for DateSelection {
    fn from(range: DateRange) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

/// Day count and total for a range at a daily rate.
///
/// Only `quote` builds these, so `total_price == days * price_per_day`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalQuote {
    pub(crate) days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub(crate) price_per_day: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub(crate) total_price: Decimal,
}

impl RentalQuote {
    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}
