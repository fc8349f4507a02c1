//! Environment configuration

use std::env;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ISO 4217 code attached to booking requests
    pub currency: String,
    /// JSON catalog to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency = lookup("RENTAL_CURRENCY")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::Config(format!(
                "RENTAL_CURRENCY must be a three-letter uppercase code, got '{}'",
                currency
            )));
        }

        let catalog_path = lookup("BIKE_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            currency,
            catalog_path,
        })
    }

    /// Load the configured catalog, or the bundled one if none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::from_path(path)?
            }
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }
}
