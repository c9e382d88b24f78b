//! Restaurant and menu catalog.
//!
//! The catalog is static data authored alongside the site. The CLI reads it
//! from a YAML file shaped like:
//!
//! ```yaml
//! - id: r1
//!   name: Paradise Biryani
//!   rating: 4.6
//!   eta_minutes: 28
//!   tag: biryani
//!   cuisines: Biryani, Mughlai
//!   menu:
//!     - id: m1
//!       category: Biryani
//!       name: Chicken Dum Biryani
//!       description: Slow-cooked with saffron rice
//!       base_price: 320
//!       discount_percent: 10
//! ```

pub mod filter;

pub use filter::{Chip, RestaurantQuery, SortOrder, filter_restaurants, menu_categories, menu_items};

use std::path::Path;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use foodhub_core::{ItemId, Price, RestaurantId};

use crate::models::CandidateItem;

/// Errors from loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML for the catalog shape.
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No restaurant has this id.
    #[error("unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    /// The restaurant has no menu item with this id.
    #[error("unknown menu item {item} at restaurant {restaurant}")]
    UnknownItem {
        restaurant: RestaurantId,
        item: ItemId,
    },
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price before discount.
    pub base_price: Price,
    /// Percentage off the base price, 0 for none.
    #[serde(default)]
    pub discount_percent: u8,
}

impl MenuItem {
    /// Price after discount, rounded to whole rupees.
    ///
    /// Undiscounted items keep their base price unrounded.
    #[must_use]
    pub fn final_price(&self) -> Price {
        if self.discount_percent == 0 {
            return self.base_price;
        }

        let base = self.base_price.amount();
        let off = base * Decimal::from(self.discount_percent) / Decimal::ONE_HUNDRED;
        Price::new((base - off).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// A restaurant and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Average rating out of 5.
    pub rating: f64,
    /// Estimated delivery time.
    pub eta_minutes: u32,
    /// Highlight tag such as `biryani`; compared case-insensitively.
    #[serde(default)]
    pub tag: String,
    /// Comma-separated cuisine list for display and search.
    #[serde(default)]
    pub cuisines: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Cheapest final price on the menu, `None` for an empty menu.
    #[must_use]
    pub fn min_menu_price(&self) -> Option<Price> {
        self.menu.iter().map(MenuItem::final_price).min()
    }

    /// Find a menu item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|i| &i.id == id)
    }

    /// One-line summary: rating, delivery time and cuisines.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!("{:.1}★ • {} mins • {}", self.rating, self.eta_minutes, self.cuisines)
    }

    /// The cart candidate for one of this restaurant's items.
    #[must_use]
    pub fn candidate(&self, item: &MenuItem) -> CandidateItem {
        CandidateItem::new(
            self.id.clone(),
            item.id.clone(),
            item.name.clone(),
            item.final_price(),
            self.name.clone(),
        )
    }
}

/// All restaurants, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text does not match the catalog shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or
    /// `CatalogError::Parse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            restaurants = catalog.restaurants.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Find a restaurant by id.
    #[must_use]
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// Build the cart candidate for `item` at `restaurant`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownRestaurant` or `CatalogError::UnknownItem`
    /// if either id is not in the catalog.
    pub fn candidate(
        &self,
        restaurant: &RestaurantId,
        item: &ItemId,
    ) -> Result<CandidateItem, CatalogError> {
        let r = self
            .restaurant(restaurant)
            .ok_or_else(|| CatalogError::UnknownRestaurant(restaurant.clone()))?;
        let i = r.item(item).ok_or_else(|| CatalogError::UnknownItem {
            restaurant: restaurant.clone(),
            item: item.clone(),
        })?;
        Ok(r.candidate(i))
    }
}
