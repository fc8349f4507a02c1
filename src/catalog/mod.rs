//! Bike catalog.
//!
//! Strictly typed catalog records, validated where they enter the crate,
//! plus the search-page filters.

pub mod loader;
pub mod models;
pub mod search;

pub use loader::Catalog;
pub use models::{Availability, Bike, BikeRecord, BikeType};
pub use search::SearchFilter;

/// Catalog loading and lookup errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog record {id}: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("Duplicate bike id {0}")]
    DuplicateId(u32),

    #[error("Bike {0} not found")]
    NotFound(u32),
}
