//! Catalog browsing commands.

use foodhub_core::RestaurantId;
use foodhub_storefront::catalog::{
    CatalogError, Chip, RestaurantQuery, SortOrder, filter_restaurants, menu_categories,
    menu_items,
};
use foodhub_storefront::error::Result;
use foodhub_storefront::state::Storefront;

/// List restaurants matching the search, chip and ordering.
#[allow(clippy::print_stdout)]
pub fn restaurants(app: &Storefront, search: String, chip: Chip, sort: SortOrder) {
    let query = RestaurantQuery { search, chip, sort };
    let found = filter_restaurants(app.catalog(), &query);

    if found.is_empty() {
        println!("No restaurants found.");
        return;
    }

    for r in found {
        println!("{:<6} {:<28} {}", r.id.as_str(), r.name, r.meta_line());
    }
}

/// Show one restaurant's menu, optionally narrowed to a category or dish name.
#[allow(clippy::print_stdout)]
pub fn menu(app: &Storefront, rid: &str, category: &str, search: &str) -> Result<()> {
    let id = RestaurantId::from(rid);
    let restaurant = app
        .catalog()
        .restaurant(&id)
        .ok_or_else(|| CatalogError::UnknownRestaurant(id.clone()))?;

    println!("{}", restaurant.name);
    println!("{}", restaurant.meta_line());
    println!("Categories: {}", menu_categories(restaurant).join(" | "));
    println!();

    let items = menu_items(restaurant, category, search);
    if items.is_empty() {
        println!("No dishes found.");
        return Ok(());
    }

    for item in items {
        let price = if item.discount_percent > 0 {
            format!(
                "{} (was {}, {}% off)",
                item.final_price(),
                item.base_price,
                item.discount_percent
            )
        } else {
            item.final_price().to_string()
        };
        println!("{:<6} {:<28} {}", item.id.as_str(), item.name, price);
        if !item.description.is_empty() {
            println!("       {}", item.description);
        }
    }
    Ok(())
}
