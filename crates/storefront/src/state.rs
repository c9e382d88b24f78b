//! Application state shared across front ends.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::db::{FileStore, KeyValueStore};
use crate::services::{CartService, CheckoutService};

/// Application state shared across all commands.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the backing store, catalog and configuration.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    store: Box<dyn KeyValueStore>,
    catalog: Catalog,
}

impl Storefront {
    /// Create application state from already-built parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Box<dyn KeyValueStore>, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(StorefrontInner {
                config,
                store,
                catalog,
            }),
        }
    }

    /// Open the file-backed store and load the catalog named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog file cannot be read or parsed.
    pub fn open(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let store = FileStore::new(config.data_dir.clone());
        tracing::debug!(data_dir = %config.data_dir.display(), "Opened file store");
        Ok(Self::new(config, Box::new(store), catalog))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the restaurant catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the backing store.
    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.inner.store.as_ref()
    }

    /// Cart operations over the shared store.
    #[must_use]
    pub fn cart(&self) -> CartService<'_> {
        CartService::new(self.store(), self.inner.config.fees)
    }

    /// Checkout operations over the shared store.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.store(), self.inner.config.fees)
    }
}
