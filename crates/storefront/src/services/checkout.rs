//! Checkout: opening the form and placing the order.
//!
//! Placing an order is a local simulation. Nothing is charged; the contact
//! details are remembered and the cart is emptied. The two writes are not
//! atomic: a crash between them leaves the contact saved and the cart intact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use foodhub_core::Price;

use crate::cart::{FeeSchedule, items_subtotal, total_quantity};
use crate::checkout::{CheckoutForm, ValidationError, validate};
use crate::db::{AddressRepository, CartRepository, KeyValueStore, RepositoryError};

/// Errors from checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout needs at least one item in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A form field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing storefront state failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Confirmation of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    /// Amount charged, fees included.
    pub grand_total: Price,
    /// Units in the order.
    pub item_count: u64,
    pub placed_at: DateTime<Utc>,
    /// Confirmation text for the customer.
    pub message: String,
}

/// Service for the checkout flow.
pub struct CheckoutService<'a> {
    cart: CartRepository<'a>,
    address: AddressRepository<'a>,
    fees: FeeSchedule,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore, fees: FeeSchedule) -> Self {
        Self {
            cart: CartRepository::new(store),
            address: AddressRepository::new(store),
            fees,
        }
    }

    /// Open checkout: a UPI form prefilled from the saved contact.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if there is nothing to order.
    pub fn begin(&self) -> Result<CheckoutForm, CheckoutError> {
        if self.cart.load()?.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut form = CheckoutForm::default();
        if let Some(saved) = self.address.load() {
            form.prefill(&saved);
        }
        Ok(form)
    }

    /// Place the order described by `form`.
    ///
    /// Saves the contact details, empties the cart and returns a receipt
    /// carrying the grand total of the cart as it was.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart is empty,
    /// `CheckoutError::Validation` if the form is invalid (nothing is written
    /// in either case), or `CheckoutError::Repository` if a write fails.
    #[instrument(skip(self, form), fields(method = %form.payment.method()))]
    pub fn commit(&self, form: &CheckoutForm) -> Result<OrderReceipt, CheckoutError> {
        let lines = self.cart.load()?;
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        validate(form).inspect_err(|e| {
            tracing::info!(reason = %e, "Checkout rejected");
        })?;

        let now = Utc::now();
        self.address.save(&form.contact_record(now))?;

        let grand_total = self.fees.compute(items_subtotal(&lines)).grand;
        let item_count = total_quantity(&lines);
        self.cart.clear()?;

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4(),
            grand_total,
            item_count,
            placed_at: now,
            message: format!(
                "Payment received. Your order of {grand_total} has been placed successfully."
            ),
        };

        tracing::info!(
            order_id = %receipt.order_id,
            grand_total = %receipt.grand_total,
            item_count,
            "Order placed"
        );
        Ok(receipt)
    }
}
