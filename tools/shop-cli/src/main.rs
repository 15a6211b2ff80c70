//! Shop CLI - the storefront from a terminal.
//!
//! Commands:
//! - `shop products` - List products, optionally filtered
//! - `shop facets` - Show filter options and counts
//! - `shop cart` - Add, list, remove and clear cart items
//! - `shop login` / `shop logout` - Set or clear the login marker
//! - `shop countdown` - Time left until a promotion ends

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CountdownArgs, FacetsArgs, LoginArgs, ProductsArgs};

/// Shop CLI - Browse the catalog and manage the cart
#[derive(Parser)]
#[command(name = "shop")]
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
    /// List products matching the given filters
    Products(ProductsArgs),

    /// Show facet groups and price ranges
    Facets(FacetsArgs),

    /// Manage the cart
    Cart(CartArgs),

    /// Mark a user as logged in
    Login(LoginArgs),

    /// Clear the login marker
    Logout,

    /// Show the time left until a promotion ends
    Countdown(CountdownArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.log, cli.verbose);
    tracing::debug!(root = %ctx.root.display(), "configuration loaded");

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Facets(args) => commands::facets::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Login(args) => commands::session::login(args, &ctx),
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Countdown(args) => commands::countdown::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
