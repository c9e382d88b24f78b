//! Checkout form and validation.

pub mod form;
pub mod validate;

pub use form::{CardDetails, CheckoutForm, PaymentDetails};
pub use validate::{ValidationError, validate};
