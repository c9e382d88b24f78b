//! Cart display data for front ends.

use serde::Serialize;

use foodhub_core::{LineKey, Price};

use super::fees::{FeeSchedule, Fees};
use super::{items_subtotal, total_quantity};
use crate::models::CartLine;

/// Hint shown when the cart cannot be checked out.
pub const EMPTY_CART_HINT: &str = "Add at least 1 item to checkout.";

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub key: LineKey,
    pub name: String,
    pub restaurant: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            key: line.key.clone(),
            name: line.name.clone(),
            restaurant: line.restaurant_name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Everything a front end needs to draw the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub subtotal: Price,
    pub fees: Fees,
    pub hint: String,
}

impl CartSummary {
    /// Build the summary for `lines`, computing fees fresh.
    #[must_use]
    pub fn new(lines: &[CartLine], schedule: &FeeSchedule) -> Self {
        let subtotal = items_subtotal(lines);
        let hint = if lines.is_empty() {
            EMPTY_CART_HINT.to_owned()
        } else {
            format!("Free delivery above {}.", schedule.free_delivery_threshold)
        };

        Self {
            lines: lines.iter().map(CartLineView::from).collect(),
            item_count: total_quantity(lines),
            subtotal,
            fees: schedule.compute(subtotal),
            hint,
        }
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether checkout may be opened.
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        !self.is_empty()
    }
}
