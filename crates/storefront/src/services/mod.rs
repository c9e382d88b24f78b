//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - Adding, incrementing, decrementing and removing cart lines
//! - `checkout` - Opening checkout and placing orders
//!
//! Services borrow a [`KeyValueStore`](crate::db::KeyValueStore) and are
//! cheap to construct per command.

pub mod cart;
pub mod checkout;

pub use cart::CartService;
pub use checkout::{CheckoutError, CheckoutService, OrderReceipt};
