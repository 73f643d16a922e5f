//! Journey and product catalogs.
//!
//! A catalog bundles the year of travel, the products on sale and the
//! tariff rules. It is read from JSON or taken from the built-in Zurich
//! sample.

mod sample;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{AgeBracket, Journey, SubscriptionProduct};
use crate::planner::TariffConfig;

pub use sample::zurich_sample;

/// Errors from loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or violates a domain rule
    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share a name
    #[error("duplicate product name: {0}")]
    DuplicateProduct(String),
}

/// Everything a plan search needs besides its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub journeys: Vec<Journey>,

    pub products: Vec<SubscriptionProduct>,

    #[serde(default)]
    pub tariff: TariffConfig,

    /// Products to fix when the caller names none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed: Vec<String>,
}

impl Catalog {
    /// Parse and validate a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a JSON catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            journeys = catalog.journeys.len(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every bracket at least one product is priced for, ascending.
    pub fn age_brackets(&self) -> Vec<AgeBracket> {
        let brackets: BTreeSet<AgeBracket> = self
            .products
            .iter()
            .flat_map(|p| p.price.keys().copied())
            .collect();
        brackets.into_iter().collect()
    }

    /// Look up a product by name.
    pub fn product(&self, name: &str) -> Option<&SubscriptionProduct> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Check rules serde cannot express.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.name.clone()));
            }
        }
        Ok(())
    }
}
