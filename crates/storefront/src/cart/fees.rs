//! Delivery and platform fees.
//!
//! Fees are derived from the current subtotal every time they are shown and
//! are never stored.

use serde::Serialize;

use foodhub_core::Price;

/// Fee amounts for one cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fees {
    pub delivery: Price,
    pub platform: Price,
    /// Subtotal plus both fees.
    pub grand: Price,
}

impl Fees {
    /// Fees of an empty cart.
    pub const NONE: Self = Self {
        delivery: Price::ZERO,
        platform: Price::ZERO,
        grand: Price::ZERO,
    };
}

/// Fee rules: a flat delivery fee waived at a threshold, plus a flat
/// platform fee on every non-empty order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Subtotals at or above this ship for free.
    pub free_delivery_threshold: Price,
    pub delivery_fee: Price,
    pub platform_fee: Price,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            free_delivery_threshold: Price::from_rupees(299),
            delivery_fee: Price::from_rupees(25),
            platform_fee: Price::from_rupees(5),
        }
    }
}

impl FeeSchedule {
    /// Compute the fees for `subtotal`.
    ///
    /// All fees are zero exactly when the subtotal is zero.
    #[must_use]
    pub fn compute(&self, subtotal: Price) -> Fees {
        if subtotal.is_zero() || subtotal.is_negative() {
            return Fees::NONE;
        }

        let delivery = if subtotal >= self.free_delivery_threshold {
            Price::ZERO
        } else {
            self.delivery_fee
        };
        let platform = self.platform_fee;

        Fees {
            delivery,
            platform,
            grand: subtotal + delivery + platform,
        }
    }
}

/// Compute fees for `subtotal` under the default schedule.
#[must_use]
pub fn compute_fees(subtotal: Price) -> Fees {
    FeeSchedule::default().compute(subtotal)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_empty_cart_has_no_fees() {
        assert_eq!(compute_fees(Price::ZERO), Fees::NONE);
    }

    #[test]
    fn test_small_order_pays_delivery() {
        for rupees in [1, 100, 200, 298] {
            let fees = compute_fees(Price::from_rupees(rupees));
            assert_eq!(fees.delivery, Price::from_rupees(25), "subtotal {rupees}");
            assert_eq!(fees.platform, Price::from_rupees(5));
            assert_eq!(fees.grand, Price::from_rupees(rupees + 30));
        }
    }

    #[test]
    fn test_just_below_threshold() {
        let subtotal = Price::new(Decimal::new(29899, 2));
        assert_eq!(compute_fees(subtotal).delivery, Price::from_rupees(25));
    }

    #[test]
    fn test_free_delivery_at_threshold() {
        for rupees in [299, 300, 1500] {
            let fees = compute_fees(Price::from_rupees(rupees));
            assert_eq!(fees.delivery, Price::ZERO, "subtotal {rupees}");
            assert_eq!(fees.grand, Price::from_rupees(rupees + 5));
        }
    }

    #[test]
    fn test_pizza_order() {
        let fees = compute_fees(Price::from_rupees(200));
        assert_eq!(fees.grand, Price::from_rupees(230));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule {
            free_delivery_threshold: Price::from_rupees(500),
            delivery_fee: Price::from_rupees(40),
            platform_fee: Price::ZERO,
        };
        let fees = schedule.compute(Price::from_rupees(300));
        assert_eq!(fees.delivery, Price::from_rupees(40));
        assert_eq!(fees.grand, Price::from_rupees(340));
    }
}
