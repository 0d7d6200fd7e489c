//! Follow an order's delivery milestones.
//!
//! Orders aren't persisted anywhere, so tracking an id recreates the display
//! simulation from placement; the estimate shown is non-authoritative.

use anyhow::Result;
use atelier_commerce::checkout::{
    PlacedOrder, TrackingTimeline, DELIVERY_MAX_DAYS, DELIVERY_MIN_DAYS, MILESTONES,
};
use atelier_commerce::random::{RandomSource, ThreadRandom};
use atelier_commerce::OrderId;
use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::{sleep, Duration};

use super::TrackArgs;
use crate::context::Context;
use crate::output::milestone_marker;

/// Run the track command.
pub async fn run(args: TrackArgs, ctx: &Context) -> Result<()> {
    let mut rng = ThreadRandom;
    let offset = rng.days_between(DELIVERY_MIN_DAYS, DELIVERY_MAX_DAYS);
    let mut order = PlacedOrder {
        order_id: OrderId::new(args.order_id),
        estimated_delivery: Utc::now().date_naive() + ChronoDuration::days(offset),
        placed_at: Utc::now().timestamp(),
        timeline: TrackingTimeline::new(),
    };

    if args.share {
        println!("{}", order.share_text());
        return Ok(());
    }
    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    let interval = args
        .interval
        .unwrap_or(ctx.config.store.tracking_interval_secs);
    follow(ctx, &mut order, interval).await
}

/// Drive the milestone ticker until delivered.
///
/// This is the scheduler of the tracking view: it stops as soon as
/// `advance` reports the terminal milestone, and dropping the future (the
/// user closing the view) stops it too.
pub async fn follow(ctx: &Context, order: &mut PlacedOrder, interval_secs: u64) -> Result<()> {
    ctx.output.header("Track Your Order");
    ctx.output.kv("Order ID", order.order_id.as_str());
    ctx.output.kv("Expected delivery", &order.delivery_display());
    ctx.output.kv(
        "Current status",
        order.timeline.current_milestone().label,
    );
    render_timeline(ctx, &order.timeline);

    while !order.timeline.is_delivered() {
        let spinner = ctx
            .output
            .spinner(&format!("{}...", order.timeline.current_milestone().description));
        sleep(Duration::from_secs(interval_secs)).await;
        spinner.finish_and_clear();

        if !order.timeline.advance() {
            break;
        }
        render_timeline(ctx, &order.timeline);
    }

    ctx.output.success("Order delivered successfully");
    ctx.output.info("Share order details:");
    for line in order.share_text().lines() {
        ctx.output.list_item(line);
    }
    Ok(())
}

fn render_timeline(ctx: &Context, timeline: &TrackingTimeline) {
    ctx.output.plain("");
    for (index, milestone) in MILESTONES.iter().enumerate() {
        let marker = milestone_marker(timeline.status_of(index));
        ctx.output.plain(&format!(
            "  {} {} - {}",
            marker, milestone.label, milestone.description
        ));
    }
    ctx.output.plain("");
}
