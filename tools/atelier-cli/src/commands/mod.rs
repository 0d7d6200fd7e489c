//! CLI command implementations.

pub mod checkout;
pub mod products;
pub mod track;

use clap::Args;

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product id to buy (skips the product picker).
    #[arg(short, long)]
    pub product: Option<String>,

    /// Seed for order id / delivery estimate generation (reproducible runs).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the tracking view after placing the order.
    #[arg(long)]
    pub no_track: bool,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Order id to track (e.g. ORD-4F7K2M9QX).
    pub order_id: String,

    /// Seconds between milestone updates (overrides config).
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Print the shareable order summary and exit.
    #[arg(long)]
    pub share: bool,
}
