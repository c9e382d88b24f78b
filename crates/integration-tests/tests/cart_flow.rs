//! Integration tests for cart mutations through the application state.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use foodhub_core::{ItemId, LineKey, Price, RestaurantId};
use foodhub_integration_tests::memory_app;
use foodhub_storefront::db::keys;
use foodhub_storefront::state::Storefront;

fn add(app: &Storefront, rid: &str, item: &str) {
    let candidate = app
        .catalog()
        .candidate(&RestaurantId::new(rid), &ItemId::new(item))
        .unwrap();
    app.cart().add_or_increment(candidate).unwrap();
}

#[test]
fn test_catalog_items_land_in_cart() {
    let app = memory_app().unwrap();
    add(&app, "r1", "b1");
    add(&app, "r1", "b2");
    add(&app, "r1", "b1");

    let summary = app.cart().summary().unwrap();
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.lines[0].key.as_str(), "r1__b1");
    assert_eq!(summary.lines[0].quantity, 2);
    // 10% off 360
    assert_eq!(summary.lines[1].unit_price, Price::from_rupees(324));
    assert_eq!(summary.subtotal, Price::from_rupees(684));
    assert_eq!(summary.fees.delivery, Price::ZERO);
    assert_eq!(summary.fees.grand, Price::from_rupees(689));
}

#[test]
fn test_fees_follow_subtotal() {
    let app = memory_app().unwrap();

    add(&app, "r1", "b1");
    let summary = app.cart().summary().unwrap();
    assert_eq!(summary.fees.delivery, Price::from_rupees(25));
    assert_eq!(summary.fees.grand, Price::from_rupees(210));
    assert_eq!(summary.hint, "Free delivery above ₹299.");

    add(&app, "r1", "b1");
    let summary = app.cart().summary().unwrap();
    assert_eq!(summary.fees.delivery, Price::ZERO);
    assert_eq!(summary.fees.grand, Price::from_rupees(365));

    let key = LineKey::new("r1__b1");
    app.cart().decrement(&key).unwrap();
    app.cart().decrement(&key).unwrap();
    let summary = app.cart().summary().unwrap();
    assert!(summary.is_empty());
    assert!(!summary.can_checkout());
    assert_eq!(summary.fees.grand, Price::ZERO);
    assert_eq!(summary.hint, "Add at least 1 item to checkout.");
}

#[test]
fn test_stale_key_leaves_cart_alone() {
    let app = memory_app().unwrap();
    add(&app, "r2", "p1");
    app.cart().remove(&LineKey::new("r2__p1")).unwrap();

    let cart = app.cart().increment(&LineKey::new("r2__p1")).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_damaged_cart_is_repaired_on_load() {
    let app = memory_app().unwrap();
    app.store()
        .set(
            keys::CART,
            r#"[
                {"restaurantId": "r2", "id": "p1", "name": " Pizza ", "unitPrice": "₹200", "quantity": "2"},
                {"name": "", "price": 10},
                "junk",
                {"rid": "r2", "itemId": "p2", "name": "Lemonade", "restName": "Slice Street", "price": 60, "qty": 0, "note": "no ice"}
            ]"#,
        )
        .unwrap();

    let lines = app.cart().lines().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].key.as_str(), "r2__p1");
    assert_eq!(lines[0].name, "Pizza");
    assert_eq!(lines[0].restaurant_name, "Restaurant");
    assert_eq!(lines[0].unit_price, Price::from_rupees(200));
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[1].quantity, 1);
    assert_eq!(lines[1].extra["note"], "no ice");

    // The repaired form is written back in canonical field names.
    let stored: serde_json::Value =
        serde_json::from_str(&app.store().get(keys::CART).unwrap().unwrap()).unwrap();
    assert_eq!(stored[0]["rid"], "r2");
    assert_eq!(stored[0]["itemId"], "p1");
    assert_eq!(stored[0]["qty"], 2);
    assert!(stored[0].get("unitPrice").is_none());
    assert_eq!(stored[1]["note"], "no ice");

    // Further mutations build on the repaired cart.
    let cart = app.cart().increment(&LineKey::new("r2__p1")).unwrap();
    assert_eq!(cart[0].quantity, 3);
}

#[test]
fn test_unparseable_cart_reads_as_empty() {
    let app = memory_app().unwrap();
    app.store().set(keys::CART, "{not json").unwrap();

    assert!(app.cart().lines().unwrap().is_empty());
    add(&app, "r2", "p2");
    assert_eq!(app.cart().lines().unwrap().len(), 1);
}
