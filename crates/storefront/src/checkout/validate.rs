//! Checkout field rules.
//!
//! Rules run in a fixed order and the first failure is reported; the
//! customer only ever sees one message at a time.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::ExposeSecret;
use thiserror::Error;

use foodhub_core::Phone;

use super::form::{CardDetails, CheckoutForm, PaymentDetails};

const MIN_NAME_CHARS: usize = 2;
const MIN_ADDRESS_CHARS: usize = 10;
const MIN_CARD_NUMBER_CHARS: usize = 12;

// Format only: "13/99" passes, the calendar is not consulted.
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("Invalid regex"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid regex"));

/// The first checkout rule the form failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    NameTooShort,
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
    #[error("Please enter a proper delivery address.")]
    AddressTooShort,
    #[error("Please enter a valid UPI ID (example@upi).")]
    InvalidUpiId,
    #[error("Please enter a valid card number.")]
    InvalidCardNumber,
    #[error("Please enter name on card.")]
    InvalidCardName,
    #[error("Expiry must be MM/YY.")]
    InvalidExpiry,
    #[error("Please enter a valid CVV.")]
    InvalidCvv,
}

/// Validate a checkout form.
///
/// # Errors
///
/// Returns the first failing rule, checked in this order: name, phone,
/// address, then the payment fields of the selected method.
pub fn validate(form: &CheckoutForm) -> Result<(), ValidationError> {
    if form.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if Phone::parse(&form.phone).is_err() {
        return Err(ValidationError::InvalidPhone);
    }
    if form.address.trim().chars().count() < MIN_ADDRESS_CHARS {
        return Err(ValidationError::AddressTooShort);
    }

    match &form.payment {
        PaymentDetails::Upi { upi_id } => validate_upi(upi_id),
        PaymentDetails::Card(card) => validate_card(card),
        PaymentDetails::CashOnDelivery => Ok(()),
    }
}

fn validate_upi(upi_id: &str) -> Result<(), ValidationError> {
    let upi_id = upi_id.trim();
    if upi_id.is_empty() || !upi_id.contains('@') {
        return Err(ValidationError::InvalidUpiId);
    }
    Ok(())
}

fn validate_card(card: &CardDetails) -> Result<(), ValidationError> {
    let number_len = card
        .number
        .expose_secret()
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    if number_len < MIN_CARD_NUMBER_CHARS {
        return Err(ValidationError::InvalidCardNumber);
    }
    if card.holder.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::InvalidCardName);
    }
    if !EXPIRY_RE.is_match(card.expiry.trim()) {
        return Err(ValidationError::InvalidExpiry);
    }
    if !CVV_RE.is_match(card.cvv.expose_secret().trim()) {
        return Err(ValidationError::InvalidCvv);
    }
    Ok(())
}
