//! FoodHub Core - Shared types library.
//!
//! This crate provides common types used across all FoodHub components:
//! - `storefront` - Cart, checkout and catalog logic
//! - `cli` - Terminal front end over the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, phone numbers and payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
