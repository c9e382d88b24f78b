//! Cart commands.
//!
//! Every command prints the cart as it stands afterwards.

use foodhub_core::{ItemId, LineKey, RestaurantId};
use foodhub_storefront::cart::CartSummary;
use foodhub_storefront::error::Result;
use foodhub_storefront::models::CartLine;
use foodhub_storefront::state::Storefront;

/// Print the current cart.
pub fn show(app: &Storefront) -> Result<()> {
    print_summary(&app.cart().summary()?);
    Ok(())
}

/// Add one unit of a catalog item.
pub fn add(app: &Storefront, rid: &str, item: &str) -> Result<()> {
    let candidate = app
        .catalog()
        .candidate(&RestaurantId::from(rid), &ItemId::from(item))?;
    tracing::info!(item = %candidate.name, "Adding to cart");
    let lines = app.cart().add_or_increment(candidate)?;
    print_lines(app, &lines);
    Ok(())
}

pub fn increment(app: &Storefront, key: &str) -> Result<()> {
    let lines = app.cart().increment(&LineKey::from(key))?;
    print_lines(app, &lines);
    Ok(())
}

pub fn decrement(app: &Storefront, key: &str) -> Result<()> {
    let lines = app.cart().decrement(&LineKey::from(key))?;
    print_lines(app, &lines);
    Ok(())
}

pub fn remove(app: &Storefront, key: &str) -> Result<()> {
    let lines = app.cart().remove(&LineKey::from(key))?;
    print_lines(app, &lines);
    Ok(())
}

pub fn clear(app: &Storefront) -> Result<()> {
    let lines = app.cart().clear()?;
    print_lines(app, &lines);
    Ok(())
}

fn print_lines(app: &Storefront, lines: &[CartLine]) {
    print_summary(&CartSummary::new(lines, &app.config().fees));
}

/// Print cart lines followed by the bill.
#[allow(clippy::print_stdout)]
pub fn print_summary(summary: &CartSummary) {
    if summary.is_empty() {
        println!("Your cart is empty.");
        println!("{}", summary.hint);
        return;
    }

    for line in &summary.lines {
        println!(
            "{:<28} {:>3} x {:>8} = {:>9}   {} ({})",
            line.name,
            line.quantity,
            line.unit_price.to_string(),
            line.line_total.to_string(),
            line.restaurant,
            line.key,
        );
    }
    println!();
    println!("{:<20} {:>9}", "Items", summary.item_count);
    println!("{:<20} {:>9}", "Subtotal", summary.subtotal.to_string());
    println!("{:<20} {:>9}", "Delivery fee", summary.fees.delivery.to_string());
    println!("{:<20} {:>9}", "Platform fee", summary.fees.platform.to_string());
    println!("{:<20} {:>9}", "To pay", summary.fees.grand.to_string());
    println!("{}", summary.hint);
}
