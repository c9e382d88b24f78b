//! Persistence for storefront state.
//!
//! # Keys
//!
//! Everything lives in a [`KeyValueStore`] under well-known keys shared with
//! the ordering pages:
//!
//! - `foodhub_cart` - serialized list of cart lines
//! - `foodhub_address` - contact record from the last checkout
//!
//! Repositories borrow the store and are cheap to create per operation.

pub mod address;
pub mod cart;
pub mod store;

pub use address::AddressRepository;
pub use cart::CartRepository;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Storage keys.
pub mod keys {
    /// Key holding the serialized cart.
    pub const CART: &str = "foodhub_cart";

    /// Key holding the saved contact record.
    pub const ADDRESS: &str = "foodhub_address";
}

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
