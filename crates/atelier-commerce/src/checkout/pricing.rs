//! Derived pricing for a checkout session.
//!
//! Pricing is a pure function of its inputs and is recomputed on every call;
//! nothing here is cached. Intermediate amounts stay unrounded, rounding to
//! currency precision happens only in the display helpers on [`Money`].

use crate::config::StoreConfig;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::Serialize;

/// Complete pricing breakdown for a single-product checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceBreakdown {
    /// Subtotal before discounts (the product's base price).
    pub subtotal: Money,
    /// Whole-percent discount the coupon bought, 0-100.
    pub discount_percent: u8,
    /// Discount amount, unrounded.
    pub discount_amount: Money,
    /// Delivery charge derived from the destination.
    pub delivery_charge: Money,
    /// Tax amount; zero unless the store configures a rate.
    pub tax: Money,
    /// Final total, unrounded.
    pub total: Money,
}

impl PriceBreakdown {
    /// Check if a coupon actually bought a discount.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}

/// Compute the full breakdown from the session's current inputs.
///
/// `coupon_code` is matched against the store table exactly and
/// case-sensitively; anything unknown prices as no coupon. `postal_code` is
/// the destination if one has been entered; unknown or unserviceable
/// destinations price with no delivery charge (serviceability is enforced at
/// the address gate, not here).
pub fn quote(
    base_price: Money,
    coupon_code: Option<&str>,
    postal_code: Option<&str>,
    config: &StoreConfig,
) -> PriceBreakdown {
    let subtotal = base_price;

    let discount_percent = coupon_code
        .map(|code| config.discount_percent(code))
        .unwrap_or(0);
    let discount_amount = subtotal.percentage(Decimal::from(discount_percent));

    let delivery = postal_code
        .and_then(|postal| config.delivery.charge(postal.trim()))
        .unwrap_or(Decimal::ZERO);
    let delivery_charge = Money::new(delivery, base_price.currency);

    let tax = subtotal.percentage(config.tax_rate);

    let total = subtotal.subtract(&discount_amount).add(&delivery_charge) + tax;

    PriceBreakdown {
        subtotal,
        discount_percent,
        discount_amount,
        delivery_charge,
        tax,
        total,
    }
}
