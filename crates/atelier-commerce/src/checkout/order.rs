//! Order placement artifacts.

use crate::checkout::tracking::TrackingTimeline;
use crate::ids::OrderId;
use crate::random::RandomSource;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Prefix every order id starts with.
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Length of the random suffix after the prefix.
pub const ORDER_SUFFIX_LEN: usize = 9;

/// Earliest and latest delivery estimates, in days from placement.
pub const DELIVERY_MIN_DAYS: i64 = 3;
pub const DELIVERY_MAX_DAYS: i64 = 7;

/// The outcome of placing an order: assigned exactly once per session and
/// immutable afterwards, apart from the advancing tracking timeline.
///
/// The id suffix is not cryptographic; collisions are acceptable for a
/// non-persisted storefront simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedOrder {
    /// Generated order identifier.
    pub order_id: OrderId,
    /// Delivery estimate, fixed at placement so every view agrees.
    pub estimated_delivery: NaiveDate,
    /// Unix timestamp of placement.
    pub placed_at: i64,
    /// Simulated delivery progress.
    pub timeline: TrackingTimeline,
}

impl PlacedOrder {
    /// Place an order "today", drawing the id and the delivery estimate from
    /// the given source.
    pub(crate) fn place(today: NaiveDate, rng: &mut dyn RandomSource) -> Self {
        let suffix = rng.order_suffix(ORDER_SUFFIX_LEN);
        let offset = rng.days_between(DELIVERY_MIN_DAYS, DELIVERY_MAX_DAYS);
        Self {
            order_id: OrderId::new(format!("{}{}", ORDER_ID_PREFIX, suffix)),
            estimated_delivery: today + Duration::days(offset),
            placed_at: current_timestamp(),
            timeline: TrackingTimeline::new(),
        }
    }

    /// Long-form delivery date, e.g. "Monday, 10 August 2026".
    pub fn delivery_display(&self) -> String {
        self.estimated_delivery.format("%A, %-d %B %Y").to_string()
    }

    /// Shareable order summary text.
    pub fn share_text(&self) -> String {
        format!(
            "Order ID: {}\nStatus: {}\nExpected Delivery: {}",
            self.order_id,
            self.timeline.current_milestone().label,
            self.delivery_display()
        )
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
