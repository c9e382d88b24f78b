//! Cart line types.

use serde::Serialize;
use serde_json::{Map, Value};

use foodhub_core::{ItemId, LineKey, Price, RestaurantId};

/// One product entry in the cart, keyed by restaurant and item.
///
/// Field names on the wire follow the shape the ordering pages already
/// write (`rid`, `restaurant`, `price`, `qty`). Fields this type does not
/// know about are carried in `extra` and written back untouched. Lines are
/// only ever read back through [`crate::cart::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Unique key within the cart.
    pub key: LineKey,
    /// Restaurant the item belongs to.
    #[serde(rename = "rid")]
    pub restaurant_id: RestaurantId,
    /// Menu item id within the restaurant.
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// Display name of the restaurant.
    #[serde(rename = "restaurant")]
    pub restaurant_name: String,
    /// Price of one unit.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Number of units, always at least 1 once persisted.
    #[serde(rename = "qty")]
    pub quantity: u32,
    /// Unrecognized fields from the stored record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartLine {
    /// Price of this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

impl From<CandidateItem> for CartLine {
    fn from(item: CandidateItem) -> Self {
        Self {
            key: item.key,
            restaurant_id: item.restaurant_id,
            item_id: item.item_id,
            name: item.name.trim().to_owned(),
            restaurant_name: item.restaurant_name.trim().to_owned(),
            unit_price: item.unit_price,
            quantity: 1,
            extra: Map::new(),
        }
    }
}

/// An item the catalog offers for adding to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    /// Key the resulting line will carry.
    pub key: LineKey,
    pub restaurant_id: RestaurantId,
    pub item_id: ItemId,
    pub name: String,
    /// Price after any discount.
    pub unit_price: Price,
    pub restaurant_name: String,
}

impl CandidateItem {
    /// Build a candidate, deriving its key from the restaurant and item ids.
    #[must_use]
    pub fn new(
        restaurant_id: RestaurantId,
        item_id: ItemId,
        name: impl Into<String>,
        unit_price: Price,
        restaurant_name: impl Into<String>,
    ) -> Self {
        Self {
            key: LineKey::derive(&restaurant_id, &item_id),
            restaurant_id,
            item_id,
            name: name.into(),
            unit_price,
            restaurant_name: restaurant_name.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pizza() -> CandidateItem {
        CandidateItem::new(
            RestaurantId::new("r1"),
            ItemId::new("m1"),
            "  Pizza ",
            Price::from_rupees(200),
            "Slice Co",
        )
    }

    #[test]
    fn test_candidate_derives_key() {
        assert_eq!(pizza().key.as_str(), "r1__m1");
    }

    #[test]
    fn test_line_from_candidate() {
        let line = CartLine::from(pizza());
        assert_eq!(line.name, "Pizza");
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total(), Price::from_rupees(200));
    }

    #[test]
    fn test_wire_field_names() {
        let mut line = CartLine::from(pizza());
        line.extra
            .insert("veg".to_owned(), Value::Bool(true));
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["key"], "r1__m1");
        assert_eq!(value["rid"], "r1");
        assert_eq!(value["itemId"], "m1");
        assert_eq!(value["restaurant"], "Slice Co");
        assert_eq!(value["qty"], 1);
        assert_eq!(value["veg"], true);
        assert!(value["price"].is_number());
    }
}
