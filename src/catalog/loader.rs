//! Loading the bike catalog.
//!
//! Catalog data is checked once, here, and every `Bike` handed out after
//! that can be trusted by the pricing code.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use super::models::{Bike, BikeRecord};
use super::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../../data/bikes.json");

/// Validated, read-only list of bikes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bikes: Vec<Bike>,
}

impl Catalog {
    /// Parse and validate a JSON array of bike records.
    ///
    /// The whole catalog is refused if any record fails its checks or two
    /// records share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<BikeRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut bikes = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id) {
                warn!("Duplicate bike id in catalog: {}", record.id);
                return Err(CatalogError::DuplicateId(record.id));
            }
            let bike = Bike::try_from(record).map_err(|e| {
                warn!("Rejected catalog record: {}", e);
                e
            })?;
            bikes.push(bike);
        }

        info!("Loaded catalog with {} bikes", bikes.len());
        Ok(Self { bikes })
    }

    /// Read a catalog file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn bikes(&self) -> &[Bike] {
        &self.bikes
    }

    pub fn len(&self) -> usize {
        self.bikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty()
    }

    /// Look up a bike by id
    pub fn get(&self, id: u32) -> Result<&Bike, CatalogError> {
        self.bikes
            .iter()
            .find(|bike| bike.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}
