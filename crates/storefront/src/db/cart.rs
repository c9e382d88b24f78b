//! Cart repository.
//!
//! Every load repairs the stored cart and writes the repaired form straight
//! back, so readers downstream always see normalized data.

use tracing::instrument;

use super::{KeyValueStore, RepositoryError, keys};
use crate::cart::normalize;
use crate::models::CartLine;

/// Repository for the stored cart.
pub struct CartRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load and normalize the cart, persisting the normalized form.
    ///
    /// A cart that cannot be read or parsed loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the normalized cart cannot be written back.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<Vec<CartLine>, RepositoryError> {
        let raw = self.store.get(keys::CART).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read stored cart, treating as empty");
            None
        });

        let lines = normalize(raw.as_deref());
        self.save(&lines)?;

        tracing::debug!(lines = lines.len(), "Cart loaded");
        Ok(lines)
    }

    /// Persist `lines` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if serialization or the store write fails.
    pub fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(lines)?;
        self.store.set(keys::CART, &json)?;
        Ok(())
    }

    /// Replace the cart with an empty one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store write fails.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.save(&[])
    }
}
