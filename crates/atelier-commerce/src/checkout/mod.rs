//! Multi-step checkout flow: session state machine, form validation,
//! derived pricing, order placement and simulated tracking.

mod address;
mod order;
mod payment;
mod pricing;
mod session;
mod tracking;

pub use address::AddressForm;
pub use order::{
    PlacedOrder, DELIVERY_MAX_DAYS, DELIVERY_MIN_DAYS, ORDER_ID_PREFIX, ORDER_SUFFIX_LEN,
};
pub use payment::{CardDetails, PaymentForm, PaymentMethod};
pub use pricing::{quote, PriceBreakdown};
pub use session::{CheckoutSession, CheckoutStep};
pub use tracking::{Milestone, MilestoneStatus, TrackingTimeline, MILESTONES};
