//! Rental pricing engine.
//!
//! Computes chargeable days and totals for a rental window, and validates a
//! date selection before it is allowed through to checkout.

pub mod calculators;
pub mod models;
pub mod validation;

// Re-export commonly used items
pub use calculators::{compute_days, display_days, quote};
pub use models::{DateRange, DateSelection, RentalQuote};
pub use validation::{validate, validate_price, Rejection, ValidationResult};
