//! Domain models for the storefront.

pub mod cart;
pub mod contact;

pub use cart::{CandidateItem, CartLine};
pub use contact::ContactRecord;
