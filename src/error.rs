//! Error handling for the crate

use crate::booking::CheckoutRejection;
use crate::catalog::{Availability, CatalogError};
use crate::pricing::Rejection;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("{0}")]
    Checkout(#[from] CheckoutRejection),

    #[error("Bike {bike_id} cannot be booked ({availability:?})")]
    Unavailable {
        bike_id: u32,
        availability: Availability,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for mistakes the user can fix in the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            AppError::Rejected(_) | AppError::Checkout(_) | AppError::Unavailable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
