//! Store configuration: coupon table, delivery zones, tax.
//!
//! In a production system these would be remote lookups; here they are fixed
//! tables the surrounding application supplies once. Defaults reproduce the
//! storefront's built-in tables; everything is serde-loadable so a config
//! file can override them.

use crate::money::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A coupon entry: exact code and its whole-percent discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub percent: u8,
}

impl Coupon {
    pub fn new(code: impl Into<String>, percent: u8) -> Self {
        Self {
            code: code.into(),
            percent,
        }
    }
}

/// Delivery zones keyed by postal-code prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Postal prefixes the store ships to at all.
    #[serde(default = "default_serviceable_prefixes")]
    pub serviceable_prefixes: Vec<String>,
    /// Serviceable prefixes that ship free.
    #[serde(default = "default_free_prefixes")]
    pub free_prefixes: Vec<String>,
    /// Flat charge for serviceable destinations outside the free zones.
    #[serde(default = "default_flat_fee")]
    pub flat_fee: Decimal,
}

impl DeliveryConfig {
    /// Whether the store delivers to this postal code at all.
    pub fn is_serviceable(&self, postal_code: &str) -> bool {
        self.serviceable_prefixes
            .iter()
            .any(|p| postal_code.starts_with(p.as_str()))
    }

    /// Delivery charge for a postal code; `None` when not serviceable.
    pub fn charge(&self, postal_code: &str) -> Option<Decimal> {
        if !self.is_serviceable(postal_code) {
            return None;
        }
        let free = self
            .free_prefixes
            .iter()
            .any(|p| postal_code.starts_with(p.as_str()));
        Some(if free { Decimal::ZERO } else { self.flat_fee })
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            serviceable_prefixes: default_serviceable_prefixes(),
            free_prefixes: default_free_prefixes(),
            flat_fee: default_flat_fee(),
        }
    }
}

/// Static configuration the checkout flow consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency every price in the store is quoted in.
    #[serde(default)]
    pub currency: Currency,
    /// Tax in percent of the subtotal. Zero unless a store opts in.
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Seconds between simulated tracking updates.
    #[serde(default = "default_tracking_interval")]
    pub tracking_interval_secs: u64,
    /// Coupon table. Matching is exact and case-sensitive.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<Coupon>,
    /// Delivery zones and fees.
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl StoreConfig {
    /// Look up the discount percent for a coupon code.
    ///
    /// Returns 0 for anything not in the table; an unknown code is not an
    /// error, it simply buys nothing.
    pub fn discount_percent(&self, code: &str) -> u8 {
        self.coupons
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.percent)
            .unwrap_or(0)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            tax_rate: Decimal::ZERO,
            tracking_interval_secs: default_tracking_interval(),
            coupons: default_coupons(),
            delivery: DeliveryConfig::default(),
        }
    }
}

fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon::new("SAVE10", 10),
        Coupon::new("FIRST20", 20),
        Coupon::new("WELCOME15", 15),
    ]
}

fn default_serviceable_prefixes() -> Vec<String> {
    // Six-digit pincode zones and five-digit ZIP zones the studio ships to.
    ["110", "122", "201", "400", "411", "560", "600", "700", "100", "900"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_free_prefixes() -> Vec<String> {
    ["110", "400", "560"].iter().map(|p| p.to_string()).collect()
}

fn default_flat_fee() -> Decimal {
    dec!(49)
}

fn default_tracking_interval() -> u64 {
    5
}
