//! Repair pass applied to the stored cart on every read.
//!
//! The stored cart may have been written by an older page, edited by hand, or
//! truncated. Normalization never fails: unreadable input becomes an empty
//! cart, and each record is coerced into a valid [`CartLine`] or dropped.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Number, Value};

use foodhub_core::{ItemId, LineKey, Price, RestaurantId};

use crate::models::CartLine;

/// Fallback display name for lines without a restaurant name.
pub const DEFAULT_RESTAURANT_NAME: &str = "Restaurant";

/// Most whole-rupee digits a stored price may have.
///
/// Together with [`PRICE_SCALE`] this keeps every price within the 15
/// significant digits a JSON number carries exactly, so a stored cart reads
/// back to the same amounts.
pub const MAX_PRICE_DIGITS: usize = 12;

/// Decimal places kept on stored prices (paise).
pub const PRICE_SCALE: u32 = 2;

/// Field names consumed by normalization, canonical names first.
const KNOWN_FIELDS: &[&str] = &[
    "key",
    "rid",
    "restaurantId",
    "itemId",
    "id",
    "name",
    "restaurant",
    "restName",
    "restaurantName",
    "price",
    "unitPrice",
    "qty",
    "quantity",
];

/// Normalize the raw stored cart text.
///
/// `None`, invalid JSON, `null` and non-array values all yield an empty cart.
#[must_use]
pub fn normalize(raw: Option<&str>) -> Vec<CartLine> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => normalize_value(value),
        Err(e) => {
            tracing::debug!(error = %e, "Stored cart is not valid JSON, treating as empty");
            Vec::new()
        }
    }
}

/// Normalize an already-parsed stored cart.
#[must_use]
pub fn normalize_value(value: Value) -> Vec<CartLine> {
    let Value::Array(records) = value else {
        return Vec::new();
    };

    records
        .into_iter()
        .filter_map(|record| match record {
            Value::Object(map) => normalize_record(map),
            _ => None,
        })
        .filter(|line| {
            !line.name.is_empty()
                && !line.unit_price.is_negative()
                && line.quantity > 0
                && line.unit_price.checked_times(line.quantity).is_some()
        })
        .collect()
}

/// Coerce one stored record, `None` if its price is out of range.
fn normalize_record(mut map: Map<String, Value>) -> Option<CartLine> {
    let restaurant_id = first_text(&map, &["rid", "restaurantId"])
        .map_or_else(RestaurantId::placeholder, RestaurantId::from);
    let item_id = first_text(&map, &["itemId", "id", "name"])
        .map_or_else(ItemId::placeholder, ItemId::from);
    let key = first_text(&map, &["key"])
        .map_or_else(|| LineKey::derive(&restaurant_id, &item_id), LineKey::new);

    let name = first_text(&map, &["name"])
        .map(|n| n.trim().to_owned())
        .unwrap_or_default();
    let restaurant_name = first_text(&map, &["restaurant", "restName", "restaurantName"])
        .map_or_else(
            || DEFAULT_RESTAURANT_NAME.to_owned(),
            |n| n.trim().to_owned(),
        );

    let unit_price = coerce_price(first_present(&map, &["price", "unitPrice"]))?;
    let quantity = match coerce_quantity(first_present(&map, &["qty", "quantity"])) {
        0 => 1,
        q => q,
    };

    for field in KNOWN_FIELDS {
        map.remove(*field);
    }

    Some(CartLine {
        key,
        restaurant_id,
        item_id,
        name,
        restaurant_name,
        unit_price,
        quantity,
        extra: map,
    })
}

/// Coerce a stored price into a rupee amount.
///
/// Everything except ASCII digits and `.` is stripped, then the longest
/// leading `digits[.digits]` run is read and rounded to paise. Text without
/// digits is zero. Amounts with more than [`MAX_PRICE_DIGITS`] whole-rupee
/// digits are out of range and yield `None`.
#[must_use]
pub fn coerce_price(value: Option<&Value>) -> Option<Price> {
    let text = value.and_then(value_text).unwrap_or_default();
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        } else {
            seen_digit = true;
        }
        end = i + 1;
    }

    if !seen_digit {
        return Some(Price::ZERO);
    }

    let prefix = cleaned.get(..end).unwrap_or_default();
    let (whole, fraction) = prefix.split_once('.').unwrap_or((prefix, ""));
    let whole = whole.trim_start_matches('0');
    if whole.len() > MAX_PRICE_DIGITS {
        return None;
    }

    // One digit past paise is enough to round correctly.
    let fraction: String = fraction.chars().take(PRICE_SCALE as usize + 1).collect();
    let whole = if whole.is_empty() { "0" } else { whole };
    let text = if fraction.is_empty() {
        whole.to_owned()
    } else {
        format!("{whole}.{fraction}")
    };

    Decimal::from_str(&text).ok().map(|amount| {
        Price::new(
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    })
}

/// Coerce a stored quantity into a whole number.
///
/// Every non-digit character is stripped before parsing, so `"2 pcs"` is 2.
/// Unparseable or overflowing input yields 0; callers treat 0 as "default".
#[must_use]
pub fn coerce_quantity(value: Option<&Value>) -> u32 {
    let text = value.and_then(value_text).unwrap_or_default();
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// First field among `fields` holding a non-empty scalar, rendered as text.
fn first_text(map: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|f| map.get(*f))
        .filter(|v| is_truthy(v))
        .find_map(value_text)
}

/// First field among `fields` that is present and not `null`.
fn first_present<'m>(map: &'m Map<String, Value>, fields: &[&str]) -> Option<&'m Value> {
    fields
        .iter()
        .filter_map(|f| map.get(*f))
        .find(|v| !v.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a scalar; containers have no usable text.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral floats print without a fraction (`2.0` reads as `"2"`).
#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn price(s: &str) -> Price {
        Price::new(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_unreadable_input_is_empty() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some("not json")).is_empty());
        assert!(normalize(Some("null")).is_empty());
        assert!(normalize(Some(r#"{"key":"a"}"#)).is_empty());
        assert!(normalize(Some("42")).is_empty());
    }

    #[test]
    fn test_full_record_kept() {
        let raw = json!([{
            "key": "r1__m1", "rid": "r1", "itemId": "m1",
            "name": "Paneer Tikka", "restaurant": "Tandoor", "price": 180, "qty": 2
        }]);
        let lines = normalize_value(raw);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.key.as_str(), "r1__m1");
        assert_eq!(line.unit_price, Price::from_rupees(180));
        assert_eq!(line.quantity, 2);
        assert!(line.extra.is_empty());
    }

    #[test]
    fn test_key_and_ids_derived() {
        let lines = normalize_value(json!([{ "name": "Dosa", "price": 60 }]));
        let line = &lines[0];
        assert_eq!(line.restaurant_id.as_str(), "r");
        assert_eq!(line.item_id.as_str(), "Dosa");
        assert_eq!(line.key.as_str(), "r__Dosa");
        assert_eq!(line.restaurant_name, DEFAULT_RESTAURANT_NAME);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_aliases_accepted() {
        let lines = normalize_value(json!([{
            "restaurantId": "r9", "id": "m4", "name": "Idli",
            "restName": " Udupi ", "unitPrice": "40", "quantity": 3
        }]));
        let line = &lines[0];
        assert_eq!(line.key.as_str(), "r9__m4");
        assert_eq!(line.restaurant_name, "Udupi");
        assert_eq!(line.unit_price, Price::from_rupees(40));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_empty_name_dropped() {
        let lines = normalize_value(json!([
            { "name": "   ", "price": 10 },
            { "price": 10 },
            "garbage",
            null,
            { "name": "Vada", "price": 30 }
        ]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Vada");
    }

    #[test]
    fn test_price_coercion() {
        let coerce = |v: Value| coerce_price(Some(&v)).unwrap();
        assert_eq!(coerce(json!("₹ 1,299.50")), price("1299.50"));
        assert_eq!(coerce(json!("12.5.3")), price("12.5"));
        assert_eq!(coerce(json!(".5")), price("0.5"));
        assert_eq!(coerce(json!("12.")), Price::from_rupees(12));
        assert_eq!(coerce(json!("-40")), Price::from_rupees(40));
        assert_eq!(coerce(json!("free")), Price::ZERO);
        assert_eq!(coerce(json!(99.9)), price("99.9"));
        assert_eq!(coerce(json!([1])), Price::ZERO);
        assert_eq!(coerce_price(None), Some(Price::ZERO));
    }

    #[test]
    fn test_price_rounded_to_paise() {
        let coerce = |v: Value| coerce_price(Some(&v)).unwrap();
        assert_eq!(coerce(json!("0.12345678901234567891")), price("0.12"));
        assert_eq!(coerce(json!("19.995")), price("20"));
        assert_eq!(coerce(json!("19.994999")), price("19.99"));
        assert_eq!(coerce(json!("000250")), Price::from_rupees(250));
    }

    #[test]
    fn test_price_out_of_range() {
        assert_eq!(
            coerce_price(Some(&json!("999999999999.99"))),
            Some(price("999999999999.99"))
        );
        assert_eq!(coerce_price(Some(&json!("1000000000000"))), None);
        assert_eq!(coerce_price(Some(&json!("1".repeat(40)))), None);
    }

    #[test]
    fn test_oversized_price_line_dropped() {
        let lines = normalize(Some(
            r#"[{"name":"Gold","price":"10000000000000000000000000","qty":100000},
                {"name":"Tea","price":20,"qty":2}]"#,
        ));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Tea");
        assert_eq!(crate::cart::items_subtotal(&lines), Price::from_rupees(40));
    }

    #[test]
    fn test_largest_line_totals_do_not_overflow() {
        let lines = normalize_value(json!([
            { "name": "Feast", "price": "999999999999.99", "qty": u32::MAX },
            { "name": "Banquet", "price": "999999999999.99", "qty": u32::MAX }
        ]));
        assert_eq!(lines.len(), 2);

        let subtotal = crate::cart::items_subtotal(&lines);
        assert!(subtotal > lines[0].line_total());
        let fees = crate::cart::compute_fees(subtotal);
        assert_eq!(fees.delivery, Price::ZERO);
    }

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(coerce_quantity(Some(&json!("3"))), 3);
        assert_eq!(coerce_quantity(Some(&json!("2 pcs"))), 2);
        assert_eq!(coerce_quantity(Some(&json!(4.0))), 4);
        assert_eq!(coerce_quantity(Some(&json!("abc"))), 0);
        assert_eq!(coerce_quantity(Some(&json!("99999999999999"))), 0);
        assert_eq!(coerce_quantity(None), 0);
    }

    #[test]
    fn test_bad_quantity_defaults_to_one() {
        let lines = normalize_value(json!([
            { "name": "A", "price": 1, "qty": 0 },
            { "name": "B", "price": 1, "qty": "lots" },
            { "name": "C", "price": 1, "qty": -2 }
        ]));
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[1].quantity, 1);
        // The sign is stripped along with every other non-digit.
        assert_eq!(lines[2].quantity, 2);
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let lines = normalize_value(json!([
            { "name": "Lassi", "price": 50, "veg": true, "notes": "less sugar" }
        ]));
        assert_eq!(lines[0].extra["veg"], json!(true));
        assert_eq!(lines[0].extra["notes"], json!("less sugar"));
        assert!(!lines[0].extra.contains_key("price"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!([
            { "rid": "r1", "itemId": "m1", "name": " Biryani ", "restaurant": "Paradise", "price": "₹249", "qty": "2", "spicy": 3 },
            { "name": "Raita", "price": 35.5 },
            { "name": "", "price": 5 },
            { "key": "custom", "name": "Kebab", "price": 120, "qty": 0 },
            { "name": "Saffron", "price": "0.12345678901234567891" },
            { "name": "Platter", "price": "999999999999.99", "qty": "4294967295" }
        ]);
        let once = normalize_value(raw);
        let text = serde_json::to_string(&once).unwrap();
        let twice = normalize(Some(&text));
        assert_eq!(once, twice);
        assert_eq!(once.len(), 5);
        assert_eq!(serde_json::to_string(&twice).unwrap(), text);
    }
}
