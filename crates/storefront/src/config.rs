//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FOODHUB_DATA_DIR` - Directory holding persisted state (default: `.foodhub`)
//! - `FOODHUB_CATALOG` - Restaurant catalog YAML file (default: `data/catalog.yaml`)
//! - `FOODHUB_FREE_DELIVERY_THRESHOLD` - Subtotal for free delivery in rupees (default: 299)
//! - `FOODHUB_DELIVERY_FEE` - Delivery fee below the threshold (default: 25)
//! - `FOODHUB_PLATFORM_FEE` - Platform fee on every order (default: 5)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use foodhub_core::Price;

use crate::cart::FeeSchedule;

const DEFAULT_DATA_DIR: &str = ".foodhub";
const DEFAULT_CATALOG: &str = "data/catalog.yaml";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file-backed store
    pub data_dir: PathBuf,
    /// Restaurant catalog file
    pub catalog_path: PathBuf,
    /// Delivery and platform fee rules
    pub fees: FeeSchedule,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            fees: FeeSchedule::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a fee override is not a non-negative decimal.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a fee override is not a non-negative decimal.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FeeSchedule::default();
        let fees = FeeSchedule {
            free_delivery_threshold: get_price_or_default(
                &lookup,
                "FOODHUB_FREE_DELIVERY_THRESHOLD",
                defaults.free_delivery_threshold,
            )?,
            delivery_fee: get_price_or_default(
                &lookup,
                "FOODHUB_DELIVERY_FEE",
                defaults.delivery_fee,
            )?,
            platform_fee: get_price_or_default(
                &lookup,
                "FOODHUB_PLATFORM_FEE",
                defaults.platform_fee,
            )?,
        };

        Ok(Self {
            data_dir: lookup("FOODHUB_DATA_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from),
            catalog_path: lookup("FOODHUB_CATALOG")
                .map_or_else(|| PathBuf::from(DEFAULT_CATALOG), PathBuf::from),
            fees,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional rupee amount, falling back to `default` when unset.
fn get_price_or_default<F>(lookup: &F, key: &str, default: Price) -> Result<Price, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let amount = Decimal::from_str(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(Price::new(amount))
}
