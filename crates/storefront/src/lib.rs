//! FoodHub storefront library.
//!
//! Cart normalization, fee calculation, cart mutations, checkout validation
//! and the restaurant catalog, independent of any front end.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
