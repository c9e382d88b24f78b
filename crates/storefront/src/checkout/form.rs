//! Checkout form snapshot.

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use foodhub_core::PaymentMethod;

use crate::models::ContactRecord;

/// Card fields.
///
/// Implements `Debug` manually to redact the card number and CVV.
#[derive(Clone)]
pub struct CardDetails {
    pub number: SecretString,
    /// Name printed on the card.
    pub holder: String,
    /// Expiry as typed, expected `MM/YY`.
    pub expiry: String,
    pub cvv: SecretString,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("holder", &self.holder)
            .field("expiry", &self.expiry)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// Payment fields for the selected method.
#[derive(Debug, Clone)]
pub enum PaymentDetails {
    Upi {
        /// Handle such as `name@bank`.
        upi_id: String,
    },
    Card(CardDetails),
    CashOnDelivery,
}

impl PaymentDetails {
    /// The method these details belong to.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Upi { .. } => PaymentMethod::Upi,
            Self::Card(_) => PaymentMethod::Card,
            Self::CashOnDelivery => PaymentMethod::CashOnDelivery,
        }
    }
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self::Upi {
            upi_id: String::new(),
        }
    }
}

/// Snapshot of the checkout form as the customer filled it in.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment: PaymentDetails,
}

impl CheckoutForm {
    /// Copy every non-empty saved contact field into the form.
    ///
    /// Payment details are never saved, so they are left alone.
    pub fn prefill(&mut self, saved: &ContactRecord) {
        if !saved.name.is_empty() {
            self.name.clone_from(&saved.name);
        }
        if !saved.phone.is_empty() {
            self.phone.clone_from(&saved.phone);
        }
        if !saved.address.is_empty() {
            self.address.clone_from(&saved.address);
        }
    }

    /// The contact record to remember for next time.
    #[must_use]
    pub fn contact_record(&self, saved_at: DateTime<Utc>) -> ContactRecord {
        ContactRecord {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            method: self.payment.method(),
            saved_at: Some(saved_at),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_skips_empty_fields() {
        let mut form = CheckoutForm {
            name: "Typed".to_owned(),
            ..CheckoutForm::default()
        };
        form.prefill(&ContactRecord {
            phone: "9876543210".to_owned(),
            ..ContactRecord::default()
        });
        assert_eq!(form.name, "Typed");
        assert_eq!(form.phone, "9876543210");
        assert!(form.address.is_empty());
    }

    #[test]
    fn test_contact_record_is_trimmed() {
        let form = CheckoutForm {
            name: " Meera ".to_owned(),
            phone: "9876543210 ".to_owned(),
            address: "  7 Park Street, Kolkata ".to_owned(),
            payment: PaymentDetails::CashOnDelivery,
        };
        let record = form.contact_record(Utc::now());
        assert_eq!(record.name, "Meera");
        assert_eq!(record.phone, "9876543210");
        assert_eq!(record.address, "7 Park Street, Kolkata");
        assert_eq!(record.method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_card_debug_is_redacted() {
        let card = CardDetails {
            number: SecretString::from("4111 1111 1111 1111"),
            holder: "A Kumar".to_owned(),
            expiry: "08/29".to_owned(),
            cvv: SecretString::from("123"),
        };
        let debug = format!("{card:?}");
        assert!(!debug.contains("4111"));
        assert!(!debug.contains("123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
