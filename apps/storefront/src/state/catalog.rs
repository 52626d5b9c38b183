//! # Catalog State
//!
//! Wraps the `Catalog` for use in commands.
//!
//! The catalog is loaded once and never mutated, so it is shared without a
//! lock.

use std::sync::Arc;

use storefront_core::{Catalog, CoreResult};
use tracing::error;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// The validated mock catalog.
    pub fn seeded() -> CoreResult<Self> {
        Catalog::seed().map(CatalogState::new)
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    /// The seeded catalog, or an empty grid if it fails validation.
    fn default() -> Self {
        CatalogState::seeded().unwrap_or_else(|err| {
            error!(error = %err, "Seed catalog rejected, starting with an empty grid");
            CatalogState::new(Catalog::default())
        })
    }
}
