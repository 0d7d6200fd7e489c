//! Atelier CLI - terminal storefront for the Atelier commerce crates.
//!
//! Commands:
//! - `atelier products` - browse the demo catalog
//! - `atelier checkout` - walk the multi-step checkout flow
//! - `atelier track` - follow a placed order through its milestones

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckoutArgs, TrackArgs};

/// Atelier CLI - browse, buy and track handcrafted resin pieces
#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products in the catalog
    Products,

    /// Buy a product through the checkout flow
    Checkout(CheckoutArgs),

    /// Follow an order's delivery milestones
    Track(TrackArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products => commands::products::run(&ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Track(args) => commands::track::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
