//! Unified error handling.
//!
//! Provides a unified `AppError` type for front ends. Each variant wraps the
//! error of one storefront layer so callers can report a single type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing persisted state failed.
    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Catalog loading or lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout was refused.
    #[error("{0}")]
    Checkout(#[from] CheckoutError),
}

impl AppError {
    /// Whether the user can fix this by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Catalog(CatalogError::UnknownRestaurant(_) | CatalogError::UnknownItem { .. })
                | Self::Checkout(CheckoutError::EmptyCart | CheckoutError::Validation(_))
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
