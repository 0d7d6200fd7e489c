//! Simulated post-placement tracking timeline.
//!
//! A fixed milestone sequence the surrounding application advances on a
//! timer. This is a display simulation; there is no status feed behind it.

use serde::{Deserialize, Serialize};

/// A named point in the delivery journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub label: &'static str,
    pub description: &'static str,
}

/// The journey every order takes, in order.
pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        label: "Order Placed",
        description: "Your order has been confirmed",
    },
    Milestone {
        label: "Order Packed",
        description: "Your order is being packed",
    },
    Milestone {
        label: "Shipped",
        description: "Your order is on the way",
    },
    Milestone {
        label: "Out for Delivery",
        description: "Your order is out for delivery",
    },
    Milestone {
        label: "Delivered",
        description: "Order delivered successfully",
    },
];

/// Where a milestone sits relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneStatus {
    Completed,
    Active,
    Pending,
}

/// Monotone progress through [`MILESTONES`].
///
/// The index only ever moves forward; the scheduler that drives it simply
/// stops calling [`advance`](TrackingTimeline::advance) once it returns
/// `false` or the tracking view goes away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackingTimeline {
    current: usize,
}

impl TrackingTimeline {
    /// A fresh timeline at "Order Placed".
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active milestone.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active milestone.
    pub fn current_milestone(&self) -> &'static Milestone {
        &MILESTONES[self.current.min(MILESTONES.len() - 1)]
    }

    /// Move to the next milestone. Returns `false` once delivered, at which
    /// point further calls are no-ops.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 >= MILESTONES.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Whether the terminal milestone has been reached.
    pub fn is_delivered(&self) -> bool {
        self.current == MILESTONES.len() - 1
    }

    /// Status of the milestone at `index`.
    pub fn status_of(&self, index: usize) -> MilestoneStatus {
        if index < self.current {
            MilestoneStatus::Completed
        } else if index == self.current {
            MilestoneStatus::Active
        } else {
            MilestoneStatus::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_order_placed() {
        let timeline = TrackingTimeline::new();
        assert_eq!(timeline.current_index(), 0);
        assert_eq!(timeline.current_milestone().label, "Order Placed");
        assert!(!timeline.is_delivered());
    }

    #[test]
    fn test_advances_through_every_milestone() {
        let mut timeline = TrackingTimeline::new();
        let labels: Vec<&str> = std::iter::once(timeline.current_milestone().label)
            .chain(std::iter::from_fn(|| {
                timeline.advance().then(|| timeline.current_milestone().label)
            }))
            .collect();

        assert_eq!(
            labels,
            vec![
                "Order Placed",
                "Order Packed",
                "Shipped",
                "Out for Delivery",
                "Delivered"
            ]
        );
    }

    #[test]
    fn test_stops_at_delivered() {
        let mut timeline = TrackingTimeline::new();
        while timeline.advance() {}
        assert!(timeline.is_delivered());

        // Further ticks change nothing.
        assert!(!timeline.advance());
        assert_eq!(timeline.current_index(), MILESTONES.len() - 1);
    }

    #[test]
    fn test_status_partitions() {
        let mut timeline = TrackingTimeline::new();
        timeline.advance();
        timeline.advance();

        assert_eq!(timeline.status_of(0), MilestoneStatus::Completed);
        assert_eq!(timeline.status_of(1), MilestoneStatus::Completed);
        assert_eq!(timeline.status_of(2), MilestoneStatus::Active);
        assert_eq!(timeline.status_of(3), MilestoneStatus::Pending);
        assert_eq!(timeline.status_of(4), MilestoneStatus::Pending);
    }
}
