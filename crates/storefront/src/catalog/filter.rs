//! Search, quick filters and sorting over the catalog.

use std::cmp::Ordering;

use foodhub_core::Price;

use super::{Catalog, MenuItem, Restaurant};

/// Category label that matches every menu item.
pub const ALL_CATEGORIES: &str = "All";

/// Quick filter chips on the restaurant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chip {
    #[default]
    All,
    /// Restaurants tagged `biryani`.
    Biryani,
    /// Delivery in 30 minutes or less.
    Under30,
    /// Rated 4.5 or higher.
    Rating45,
    /// At least one dish at ₹200 or less.
    Under200,
}

impl Chip {
    const FAST_DELIVERY_MINUTES: u32 = 30;
    const TOP_RATING: f64 = 4.5;
    const BUDGET_PRICE_RUPEES: i64 = 200;

    fn matches(self, restaurant: &Restaurant) -> bool {
        match self {
            Self::All => true,
            Self::Biryani => restaurant.tag.eq_ignore_ascii_case("biryani"),
            Self::Under30 => restaurant.eta_minutes <= Self::FAST_DELIVERY_MINUTES,
            Self::Rating45 => restaurant.rating >= Self::TOP_RATING,
            Self::Under200 => restaurant
                .min_menu_price()
                .is_some_and(|p| p <= Price::from_rupees(Self::BUDGET_PRICE_RUPEES)),
        }
    }
}

impl std::str::FromStr for Chip {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "biryani" => Ok(Self::Biryani),
            "under30" => Ok(Self::Under30),
            "rating45" => Ok(Self::Rating45),
            "under200" => Ok(Self::Under200),
            _ => Err(format!("invalid filter: {s}")),
        }
    }
}

/// Restaurant list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevance,
    /// Highest rated first.
    Rating,
    /// Fastest delivery first.
    Eta,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "rating" => Ok(Self::Rating),
            "eta" => Ok(Self::Eta),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Restaurant list controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantQuery {
    /// Free-text search over names, cuisines and dishes.
    pub search: String,
    pub chip: Chip,
    pub sort: SortOrder,
}

/// Restaurants matching `query`, in display order.
#[must_use]
pub fn filter_restaurants<'c>(catalog: &'c Catalog, query: &RestaurantQuery) -> Vec<&'c Restaurant> {
    let needle = query.search.trim().to_lowercase();

    let mut out: Vec<&Restaurant> = catalog
        .restaurants
        .iter()
        .filter(|r| needle.is_empty() || matches_search(r, &needle))
        .filter(|r| query.chip.matches(r))
        .collect();

    match query.sort {
        SortOrder::Relevance => {}
        SortOrder::Rating => out.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
        SortOrder::Eta => out.sort_by_key(|r| r.eta_minutes),
    }

    out
}

fn matches_search(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant.name.to_lowercase().contains(needle)
        || restaurant.cuisines.to_lowercase().contains(needle)
        || restaurant
            .menu
            .iter()
            .any(|i| i.name.to_lowercase().contains(needle))
}

/// Category tabs for a menu: `All`, then each category in first-seen order.
#[must_use]
pub fn menu_categories(restaurant: &Restaurant) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];
    for item in &restaurant.menu {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }
    categories
}

/// Menu items in `category` (or all, for `All`) whose name contains `search`.
#[must_use]
pub fn menu_items<'r>(restaurant: &'r Restaurant, category: &str, search: &str) -> Vec<&'r MenuItem> {
    let needle = search.trim().to_lowercase();
    restaurant
        .menu
        .iter()
        .filter(|i| category == ALL_CATEGORIES || i.category == category)
        .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
        .collect()
}
