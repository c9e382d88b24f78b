//! Saved contact repository.

use super::{KeyValueStore, RepositoryError, keys};
use crate::models::ContactRecord;

/// Repository for the contact record used to prefill checkout.
pub struct AddressRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the saved contact, if a readable one exists.
    ///
    /// Unreadable or malformed records load as `None`.
    #[must_use]
    pub fn load(&self) -> Option<ContactRecord> {
        let raw = match self.store.get(keys::ADDRESS) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved address");
                return None;
            }
        };

        match serde_json::from_str::<Option<ContactRecord>>(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed saved address");
                None
            }
        }
    }

    /// Save `record`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if serialization or the store write fails.
    pub fn save(&self, record: &ContactRecord) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(record)?;
        self.store.set(keys::ADDRESS, &json)?;
        Ok(())
    }
}
