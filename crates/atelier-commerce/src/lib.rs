//! Storefront domain types and checkout logic for Atelier.
//!
//! This crate is the client-side core of the storefront: everything is
//! in-memory, synchronous and owned by the caller. It provides:
//!
//! - **Catalog**: the products the studio sells
//! - **Checkout**: the multi-step flow (address, payment, confirmation,
//!   tracking) with validation gating and derived pricing
//! - **Config**: the store's fixed coupon table, delivery zones and tax rate
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_commerce::prelude::*;
//!
//! let config = StoreConfig::default();
//! let product = demo_catalog(config.currency).remove(3);
//!
//! let mut session = CheckoutSession::open(product.reference(), product.price);
//! session.address = my_address_form;
//! session.submit_address(&config)?;
//! session.payment.method = PaymentMethod::Upi;
//! session.submit_payment()?;
//! session.apply_coupon("SAVE10", &config);
//!
//! let order = session.place_order(&mut ThreadRandom)?;
//! println!("{} arrives {}", order.order_id, order.delivery_display());
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod random;

pub use config::StoreConfig;
pub use error::{CheckoutError, FieldError, FieldErrors};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Coupon, DeliveryConfig, StoreConfig};
    pub use crate::error::{CheckoutError, FieldError, FieldErrors};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{demo_catalog, Product, ProductRef};

    // Checkout
    pub use crate::checkout::{
        quote, AddressForm, CardDetails, CheckoutSession, CheckoutStep, Milestone,
        MilestoneStatus, PaymentForm, PaymentMethod, PlacedOrder, PriceBreakdown,
        TrackingTimeline, MILESTONES,
    };

    // Randomness
    pub use crate::random::{RandomSource, SeededRandom, ThreadRandom};
}
