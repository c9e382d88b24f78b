//! Payment method selection for checkout.

use serde::{Deserialize, Serialize};

/// How the customer intends to pay.
///
/// Only UPI and card payments collect extra details; cash on delivery needs
/// nothing beyond the contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Unified Payments Interface, identified by a `name@bank` handle.
    #[default]
    Upi,
    /// Debit or credit card.
    Card,
    /// Pay the rider in cash.
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Every selectable method, in the order the checkout offers them.
    pub const ALL: [Self; 3] = [Self::Upi, Self::Card, Self::CashOnDelivery];

    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::CashOnDelivery => "cod",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upi" => Ok(Self::Upi),
            "card" => Ok(Self::Card),
            "cod" | "cash" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
