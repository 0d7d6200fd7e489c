//! Checkout flow state machine.
//!
//! A [`CheckoutSession`] is an explicit value the surrounding application
//! owns: created when the checkout opens, dropped when it closes. Every
//! transition is a synchronous method that either moves the step forward or
//! reports why it can't; nothing here performs I/O.

use crate::catalog::ProductRef;
use crate::checkout::address::AddressForm;
use crate::checkout::order::PlacedOrder;
use crate::checkout::payment::PaymentForm;
use crate::checkout::pricing::{quote, PriceBreakdown};
use crate::checkout::tracking::TrackingTimeline;
use crate::config::StoreConfig;
use crate::error::CheckoutError;
use crate::money::Money;
use crate::random::RandomSource;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Shipping address entry.
    #[default]
    Address,
    /// Payment method and details.
    Payment,
    /// Review before placing the order.
    Confirmation,
    /// Post-placement tracking. Terminal.
    Tracking,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "address",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
            CheckoutStep::Tracking => "tracking",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "Shipping Address",
            CheckoutStep::Payment => "Payment Method",
            CheckoutStep::Confirmation => "Order Confirmation",
            CheckoutStep::Tracking => "Order Tracking",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
            CheckoutStep::Tracking => 4,
        }
    }

    /// Whether the flow can never leave this step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutStep::Tracking)
    }
}

/// State for one buy-now checkout of a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    /// Display metadata of the product being bought.
    pub product: ProductRef,
    /// The product's price at session start; immutable for the session.
    pub base_price: Money,
    /// Current step.
    pub step: CheckoutStep,
    /// Address form, preserved across back/forward navigation.
    pub address: AddressForm,
    /// Payment form, preserved across back/forward navigation.
    pub payment: PaymentForm,
    /// Coupon code as entered, if any.
    pub coupon_code: Option<String>,
    /// Set exactly once, when the order is placed.
    placed: Option<PlacedOrder>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl CheckoutSession {
    /// Open a checkout for a product.
    pub fn open(product: ProductRef, base_price: Money) -> Self {
        let now = current_timestamp();
        Self {
            product,
            base_price,
            step: CheckoutStep::Address,
            address: AddressForm::default(),
            payment: PaymentForm::default(),
            coupon_code: None,
            placed: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Submit the address step.
    ///
    /// Validates the form and the store's delivery area; on success the flow
    /// moves to [`CheckoutStep::Payment`]. On failure the step and every
    /// entered value stay exactly as they were.
    pub fn submit_address(&mut self, config: &StoreConfig) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Address {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Payment.as_str(),
            });
        }

        let mut errors = self.address.validate();
        if errors.for_field("postal_code").is_none()
            && config
                .delivery
                .charge(self.address.postal_code.trim())
                .is_none()
        {
            errors.push(
                "postal_code",
                "Delivery is not available for this postal code",
            );
        }
        errors.into_result()?;

        self.step = CheckoutStep::Payment;
        self.touch();
        Ok(())
    }

    /// Submit the payment step.
    ///
    /// Card fields are required only when the method collects them; on
    /// success the flow moves to [`CheckoutStep::Confirmation`].
    pub fn submit_payment(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Confirmation.as_str(),
            });
        }

        self.payment.validate().into_result()?;

        self.step = CheckoutStep::Confirmation;
        self.touch();
        Ok(())
    }

    /// Step back to the previous step, keeping every entered value.
    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let prev = match self.step {
            CheckoutStep::Payment => CheckoutStep::Address,
            CheckoutStep::Confirmation => CheckoutStep::Payment,
            CheckoutStep::Address | CheckoutStep::Tracking => {
                return Err(CheckoutError::InvalidTransition {
                    from: self.step.as_str(),
                    to: "previous",
                })
            }
        };
        self.step = prev;
        self.touch();
        Ok(prev)
    }

    /// Record a coupon code and report the percent it bought (0 when the
    /// code isn't in the store's table; an unknown code is kept but prices
    /// as no coupon).
    pub fn apply_coupon(&mut self, code: impl Into<String>, config: &StoreConfig) -> u8 {
        let code = code.into().trim().to_string();
        let percent = config.discount_percent(&code);
        self.coupon_code = Some(code);
        self.touch();
        percent
    }

    /// Drop any recorded coupon code.
    pub fn clear_coupon(&mut self) {
        self.coupon_code = None;
        self.touch();
    }

    /// Current pricing, re-derived from the session's inputs on every call.
    pub fn pricing(&self, config: &StoreConfig) -> PriceBreakdown {
        let postal = self.address.postal_code.trim();
        quote(
            self.base_price,
            self.coupon_code.as_deref(),
            (!postal.is_empty()).then_some(postal),
            config,
        )
    }

    /// Place the order, dated today.
    pub fn place_order(&mut self, rng: &mut dyn RandomSource) -> Result<PlacedOrder, CheckoutError> {
        self.place_order_on(Utc::now().date_naive(), rng)
    }

    /// Place the order with an explicit date.
    ///
    /// Only valid from [`CheckoutStep::Confirmation`]. Idempotent: once an
    /// order exists, every further call returns it unchanged instead of
    /// generating a new id or estimate.
    pub fn place_order_on(
        &mut self,
        today: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<PlacedOrder, CheckoutError> {
        if let Some(order) = &self.placed {
            return Ok(order.clone());
        }
        if self.step != CheckoutStep::Confirmation {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Tracking.as_str(),
            });
        }

        let order = PlacedOrder::place(today, rng);
        self.placed = Some(order.clone());
        self.step = CheckoutStep::Tracking;
        self.touch();
        Ok(order)
    }

    /// The placed order, if the session got that far.
    pub fn placed_order(&self) -> Option<&PlacedOrder> {
        self.placed.as_ref()
    }

    /// Whether an order has been placed.
    pub fn is_placed(&self) -> bool {
        self.placed.is_some()
    }

    /// Mutable access to the tracking timeline, for the scheduler that
    /// drives milestone advancement.
    pub fn timeline_mut(&mut self) -> Option<&mut TrackingTimeline> {
        self.placed.as_mut().map(|order| &mut order.timeline)
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::money::Currency;
    use crate::random::SeededRandom;
    use rust_decimal_macros::dec;

    fn session() -> CheckoutSession {
        let product = demo_catalog(Currency::USD)
            .into_iter()
            .find(|p| p.name == "Celestial Ocean Wave Pendant")
            .unwrap();
        CheckoutSession::open(product.reference(), product.price)
    }

    fn fill_valid_address(session: &mut CheckoutSession, postal_code: &str) {
        session.address = AddressForm {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9876543210".to_string(),
            street: "221B Residency Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: postal_code.to_string(),
            country: "India".to_string(),
        };
    }

    fn fill_valid_card(session: &mut CheckoutSession) {
        session.payment.method = crate::checkout::PaymentMethod::Card;
        session.payment.card = crate::checkout::CardDetails {
            card_number: "4111111111111111".to_string(),
            expiry_date: "09/27".to_string(),
            cvv: "123".to_string(),
            card_name: "Priya Sharma".to_string(),
        };
    }

    #[test]
    fn test_opens_at_address_step() {
        let session = session();
        assert_eq!(session.step, CheckoutStep::Address);
        assert!(!session.is_placed());
        assert_eq!(session.base_price.amount, dec!(45.99));
    }

    #[test]
    fn test_valid_address_advances_once_and_preserves_values() {
        let config = StoreConfig::default();
        let mut session = session();
        fill_valid_address(&mut session, "560001");

        session.submit_address(&config).unwrap();
        assert_eq!(session.step, CheckoutStep::Payment);
        assert_eq!(session.address.full_name, "Priya Sharma");
        assert_eq!(session.address.postal_code, "560001");

        // Submitting again from the wrong step is rejected, not re-applied.
        assert!(matches!(
            session.submit_address(&config),
            Err(CheckoutError::InvalidTransition { .. })
        ));
        assert_eq!(session.step, CheckoutStep::Payment);
    }

    #[test]
    fn test_invalid_address_blocks_and_keeps_input() {
        let config = StoreConfig::default();
        let mut session = session();
        fill_valid_address(&mut session, "560001");
        session.address.phone = "12345".to_string();

        let err = session.submit_address(&config).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.for_field("phone").is_some());
        assert_eq!(session.step, CheckoutStep::Address);
        assert_eq!(session.address.phone, "12345");
    }

    #[test]
    fn test_unserviceable_postal_code_blocks_with_field_error() {
        let config = StoreConfig::default();
        let mut session = session();
        fill_valid_address(&mut session, "999999");

        let err = session.submit_address(&config).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(
            errors.for_field("postal_code"),
            Some("Delivery is not available for this postal code")
        );
        assert_eq!(session.step, CheckoutStep::Address);
    }

    #[test]
    fn test_card_payment_requires_every_card_field() {
        let config = StoreConfig::default();

        for (field, value) in [
            ("card_number", "1234"),
            ("expiry_date", "13/27"),
            ("cvv", "1"),
            ("card_name", "X"),
        ] {
            let mut session = session();
            fill_valid_address(&mut session, "560001");
            session.submit_address(&config).unwrap();
            fill_valid_card(&mut session);
            match field {
                "card_number" => session.payment.card.card_number = value.to_string(),
                "expiry_date" => session.payment.card.expiry_date = value.to_string(),
                "cvv" => session.payment.card.cvv = value.to_string(),
                _ => session.payment.card.card_name = value.to_string(),
            }

            let err = session.submit_payment().unwrap_err();
            assert!(
                err.field_errors().unwrap().for_field(field).is_some(),
                "expected {} to block the transition",
                field
            );
            assert_eq!(session.step, CheckoutStep::Payment);
        }
    }

    #[test]
    fn test_non_card_methods_advance_without_card_fields() {
        let config = StoreConfig::default();
        for method in crate::checkout::PaymentMethod::ALL {
            if method.requires_card() {
                continue;
            }
            let mut session = session();
            fill_valid_address(&mut session, "560001");
            session.submit_address(&config).unwrap();
            session.payment.method = method;

            session.submit_payment().unwrap();
            assert_eq!(session.step, CheckoutStep::Confirmation);
        }
    }

    #[test]
    fn test_back_and_forth_preserves_address_exactly() {
        let config = StoreConfig::default();
        let mut session = session();
        fill_valid_address(&mut session, "560001");
        session.submit_address(&config).unwrap();

        let before = session.address.clone();
        session.back().unwrap();
        assert_eq!(session.step, CheckoutStep::Address);
        assert_eq!(session.address, before);

        session.submit_address(&config).unwrap();
        assert_eq!(session.step, CheckoutStep::Payment);
        assert_eq!(session.address, before);
    }

    #[test]
    fn test_back_from_address_and_tracking_is_rejected() {
        let mut session = session();
        assert!(session.back().is_err());

        let config = StoreConfig::default();
        let mut rng = SeededRandom::new(5);
        fill_valid_address(&mut session, "560001");
        session.submit_address(&config).unwrap();
        session.payment.method = crate::checkout::PaymentMethod::Cod;
        session.submit_payment().unwrap();
        session.place_order(&mut rng).unwrap();

        assert_eq!(session.step, CheckoutStep::Tracking);
        assert!(session.back().is_err());
    }

    #[test]
    fn test_place_order_is_idempotent() {
        let config = StoreConfig::default();
        let mut session = session();
        let mut rng = SeededRandom::new(6);
        fill_valid_address(&mut session, "560001");
        session.submit_address(&config).unwrap();
        session.payment.method = crate::checkout::PaymentMethod::Upi;
        session.submit_payment().unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let first = session.place_order_on(today, &mut rng).unwrap();
        let second = session.place_order_on(today, &mut rng).unwrap();

        assert_eq!(first.order_id, second.order_id);
        assert_eq!(first.estimated_delivery, second.estimated_delivery);
        assert_eq!(session.step, CheckoutStep::Tracking);
    }

    #[test]
    fn test_place_order_requires_confirmation_step() {
        let mut session = session();
        let mut rng = SeededRandom::new(7);
        assert!(matches!(
            session.place_order(&mut rng),
            Err(CheckoutError::InvalidTransition { .. })
        ));
        assert!(!session.is_placed());
    }

    #[test]
    fn test_coupon_changes_pricing_and_bogus_does_not() {
        let config = StoreConfig::default();
        let mut session = session();
        fill_valid_address(&mut session, "560001");

        let base_total = session.pricing(&config).total;

        assert_eq!(session.apply_coupon("FIRST20", &config), 20);
        let discounted = session.pricing(&config);
        assert_eq!(discounted.total.rounded(), dec!(36.79));

        assert_eq!(session.apply_coupon("BOGUS", &config), 0);
        let bogus = session.pricing(&config);
        assert_eq!(bogus.total, base_total);

        session.clear_coupon();
        assert_eq!(session.pricing(&config).total, base_total);
    }

    #[test]
    fn test_full_flow_with_flat_fee_delivery() {
        let config = StoreConfig::default();
        let mut session = session();
        let mut rng = SeededRandom::new(8);

        fill_valid_address(&mut session, "700032");
        session.submit_address(&config).unwrap();
        fill_valid_card(&mut session);
        session.submit_payment().unwrap();

        let pricing = session.pricing(&config);
        assert_eq!(pricing.delivery_charge.amount, dec!(49));
        assert_eq!(pricing.total.rounded(), dec!(94.99));

        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let order = session.place_order_on(today, &mut rng).unwrap();
        assert!(order.order_id.as_str().starts_with("ORD-"));

        let days = (order.estimated_delivery - today).num_days();
        assert!((3..=7).contains(&days));

        // The estimate is cached on the order, so every later read agrees.
        assert_eq!(
            session.placed_order().unwrap().estimated_delivery,
            order.estimated_delivery
        );
    }

    #[test]
    fn test_timeline_advances_through_scheduler_access() {
        let config = StoreConfig::default();
        let mut session = session();
        let mut rng = SeededRandom::new(9);
        fill_valid_address(&mut session, "560001");
        session.submit_address(&config).unwrap();
        session.payment.method = crate::checkout::PaymentMethod::Wallet;
        session.submit_payment().unwrap();
        session.place_order(&mut rng).unwrap();

        let timeline = session.timeline_mut().unwrap();
        let mut ticks = 0;
        while timeline.advance() {
            ticks += 1;
        }
        assert_eq!(ticks, 4);
        assert!(session.placed_order().unwrap().timeline.is_delivered());
    }
}
