//! Rental pricing, date validation and booking hand-off for BikeRental.
//!
//! The detail page asks [`pricing`] for a day count and total while the
//! user picks dates, and [`pricing::validate`] decides whether the
//! "Rent now" action may proceed. A [`booking::BookingRequest`] then carries
//! the quote forward to checkout unchanged.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;

pub use config::Config;
pub use error::{AppError, Result};
