//! Bike catalog records.
//!
//! `BikeRecord` is what arrives from JSON. It only becomes a `Bike` after
//! passing the field checks in `TryFrom`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::pricing::validate_price;

/// Highest rating a bike can carry
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeType {
    City,
    Mountain,
    Electric,
    Road,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Rented,
    Maintenance,
}

/// Raw catalog entry as stored in JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BikeRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "type")]
    pub bike_type: BikeType,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
    pub rating: f64,
    pub location: String,
    pub availability: Availability,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A validated catalog bike
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bike {
    pub id: u32,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub bike_type: BikeType,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
    pub rating: f64,
    pub location: String,
    pub availability: Availability,
    pub description: String,
    pub features: Vec<String>,
}

impl Bike {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

impl TryFrom<BikeRecord> for Bike {
    type Error = CatalogError;

    fn try_from(record: BikeRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id: record.id,
            reason: reason.to_string(),
        };

        if record.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        validate_price(record.price_per_day).map_err(|e| invalid(&e.to_string()))?;
        if !(0.0..=MAX_RATING).contains(&record.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }

        Ok(Bike {
            id: record.id,
            name: record.name,
            brand: record.brand,
            bike_type: record.bike_type,
            price_per_day: record.price_per_day,
            rating: record.rating,
            location: record.location,
            availability: record.availability,
            description: record.description,
            features: record.features,
        })
    }
}
