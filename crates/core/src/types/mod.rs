//! Core types for FoodHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod payment;
pub mod phone;
pub mod price;

pub use id::*;
pub use payment::PaymentMethod;
pub use phone::{Phone, PhoneError};
pub use price::Price;
