//! Cart mutations.
//!
//! Each operation loads (and thereby repairs) the stored cart, applies one
//! change, persists the result and returns the new cart for re-rendering.
//! Keys that are no longer in the cart are ignored: a stale front end may
//! still show a line that an earlier action already removed.

use tracing::instrument;

use foodhub_core::LineKey;

use crate::cart::{CartSummary, FeeSchedule};
use crate::db::{CartRepository, KeyValueStore, RepositoryError};
use crate::models::{CandidateItem, CartLine};

/// Service for reading and changing the cart.
pub struct CartService<'a> {
    repo: CartRepository<'a>,
    fees: FeeSchedule,
}

impl<'a> CartService<'a> {
    /// Create a cart service over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore, fees: FeeSchedule) -> Self {
        Self {
            repo: CartRepository::new(store),
            fees,
        }
    }

    /// Load the current cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the repaired cart cannot be written back.
    pub fn lines(&self) -> Result<Vec<CartLine>, RepositoryError> {
        self.repo.load()
    }

    /// Load the current cart with totals and fees.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the repaired cart cannot be written back.
    pub fn summary(&self) -> Result<CartSummary, RepositoryError> {
        let lines = self.repo.load()?;
        Ok(CartSummary::new(&lines, &self.fees))
    }

    /// Add one unit of `item`, creating its line if needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cart cannot be persisted.
    #[instrument(skip(self, item), fields(key = %item.key))]
    pub fn add_or_increment(&self, item: CandidateItem) -> Result<Vec<CartLine>, RepositoryError> {
        let mut lines = self.repo.load()?;

        if let Some(line) = lines.iter_mut().find(|l| l.key == item.key) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(quantity = line.quantity, "Incremented existing line");
        } else {
            tracing::debug!("Added new line");
            lines.push(CartLine::from(item));
        }

        self.repo.save(&lines)?;
        Ok(lines)
    }

    /// Add one unit to the line with `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cart cannot be persisted.
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn increment(&self, key: &LineKey) -> Result<Vec<CartLine>, RepositoryError> {
        self.update_line(key, |lines, idx| {
            if let Some(line) = lines.get_mut(idx) {
                line.quantity = line.quantity.saturating_add(1);
            }
        })
    }

    /// Remove one unit from the line with `key`, dropping the line at zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cart cannot be persisted.
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn decrement(&self, key: &LineKey) -> Result<Vec<CartLine>, RepositoryError> {
        self.update_line(key, |lines, idx| {
            let remaining = lines.get(idx).map_or(0, |l| l.quantity.saturating_sub(1));
            if remaining == 0 {
                lines.remove(idx);
            } else if let Some(line) = lines.get_mut(idx) {
                line.quantity = remaining;
            }
        })
    }

    /// Drop the line with `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cart cannot be persisted.
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn remove(&self, key: &LineKey) -> Result<Vec<CartLine>, RepositoryError> {
        self.update_line(key, |lines, idx| {
            lines.remove(idx);
        })
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<Vec<CartLine>, RepositoryError> {
        self.repo.clear()?;
        tracing::info!("Cart cleared");
        Ok(Vec::new())
    }

    /// Locate the line with `key` and apply `change`; unknown keys are a no-op.
    fn update_line<F>(&self, key: &LineKey, change: F) -> Result<Vec<CartLine>, RepositoryError>
    where
        F: FnOnce(&mut Vec<CartLine>, usize),
    {
        let mut lines = self.repo.load()?;

        let Some(idx) = lines.iter().position(|l| &l.key == key) else {
            tracing::debug!("No line with this key, ignoring");
            return Ok(lines);
        };

        change(&mut lines, idx);
        self.repo.save(&lines)?;
        Ok(lines)
    }
}
