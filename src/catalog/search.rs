//! Filtering the catalog for the search page.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::loader::Catalog;
use super::models::{Bike, BikeType};

/// Search page filters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchFilter {
    /// Case-insensitive substring of the pickup location; empty matches all
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bike_type: Option<BikeType>,
    #[serde(default = "default_min_price", with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
    #[serde(default = "default_max_price", with = "rust_decimal::serde::str")]
    pub max_price: Decimal,
}

fn default_min_price() -> Decimal {
    Decimal::from(20)
}

fn default_max_price() -> Decimal {
    Decimal::from(50)
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            location: String::new(),
            bike_type: None,
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}

impl SearchFilter {
    /// True if the bike passes every active filter
    pub fn matches(&self, bike: &Bike) -> bool {
        if let Some(bike_type) = self.bike_type {
            if bike.bike_type != bike_type {
                return false;
            }
        }

        if bike.price_per_day < self.min_price || bike.price_per_day > self.max_price {
            return false;
        }

        let location = self.location.trim();
        location.is_empty()
            || bike
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
    }
}

impl Catalog {
    /// Bikes passing `filter`, in catalog order
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Bike> {
        let found: Vec<&Bike> = self.bikes().iter().filter(|b| filter.matches(b)).collect();
        tracing::debug!(?filter, matches = found.len(), "catalog search");
        found
    }
}
