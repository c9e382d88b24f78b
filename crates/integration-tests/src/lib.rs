//! Integration tests for FoodHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodhub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations through the shared application state
//! - `checkout_flow` - Checkout against carts built from the catalog
//! - `persistence` - State written by one process and read by the next
//!
//! Each test gets its own data directory under the system temp dir.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use foodhub_storefront::catalog::{Catalog, CatalogError};
use foodhub_storefront::config::StorefrontConfig;
use foodhub_storefront::db::{FileStore, MemoryStore};
use foodhub_storefront::state::Storefront;

/// Catalog shared by the integration tests.
pub const TEST_CATALOG: &str = r"
- id: r1
  name: Spice Garden
  rating: 4.5
  eta_minutes: 25
  tag: biryani
  cuisines: Biryani, Hyderabadi
  menu:
    - id: b1
      category: Biryani
      name: Veg Biryani
      base_price: 180
    - id: b2
      category: Biryani
      name: Mutton Biryani
      base_price: 360
      discount_percent: 10
- id: r2
  name: Slice Street
  rating: 4.1
  eta_minutes: 40
  tag: pizza
  cuisines: Pizza, Italian
  menu:
    - id: p1
      category: Pizza
      name: Pizza
      base_price: 200
    - id: p2
      category: Drinks
      name: Lemonade
      base_price: 60
";

/// Parse [`TEST_CATALOG`].
///
/// # Errors
///
/// Returns `CatalogError` if the catalog text is malformed.
pub fn test_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml_str(TEST_CATALOG)
}

/// A unique, not yet created data directory.
#[must_use]
pub fn temp_data_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("foodhub-it-{name}-{}", uuid::Uuid::new_v4()))
}

/// Application state over an in-memory store.
///
/// # Errors
///
/// Returns `CatalogError` if the test catalog is malformed.
pub fn memory_app() -> Result<Storefront, CatalogError> {
    Ok(Storefront::new(
        StorefrontConfig::default(),
        Box::new(MemoryStore::new()),
        test_catalog()?,
    ))
}

/// Application state over a file store in `dir`.
///
/// Opening twice on the same directory simulates two separate runs.
///
/// # Errors
///
/// Returns `CatalogError` if the test catalog is malformed.
pub fn file_app(dir: &Path) -> Result<Storefront, CatalogError> {
    let config = StorefrontConfig {
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    };
    Ok(Storefront::new(
        config,
        Box::new(FileStore::new(dir)),
        test_catalog()?,
    ))
}
