//! Cart state: normalization, totals, fees and display data.
//!
//! Everything here is pure. Reading and writing the stored cart lives in
//! [`crate::db::CartRepository`]; mutations live in
//! [`crate::services::CartService`].

pub mod fees;
pub mod normalize;
pub mod view;

pub use fees::{FeeSchedule, Fees, compute_fees};
pub use normalize::{normalize, normalize_value};
pub use view::{CartLineView, CartSummary};

use foodhub_core::Price;

use crate::models::CartLine;

/// Total number of units across all lines.
#[must_use]
pub fn total_quantity(lines: &[CartLine]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}

/// Sum of `unit_price * quantity` over all lines, before fees.
#[must_use]
pub fn items_subtotal(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_totals() {
        let lines = normalize_value(json!([
            { "name": "Pizza", "price": 200, "qty": 1 },
            { "name": "Coke", "price": "45.50", "qty": 2 }
        ]));
        assert_eq!(total_quantity(&lines), 3);
        assert_eq!(
            items_subtotal(&lines),
            Price::new(rust_decimal::Decimal::new(291, 0))
        );
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_quantity(&[]), 0);
        assert_eq!(items_subtotal(&[]), Price::ZERO);
    }
}
