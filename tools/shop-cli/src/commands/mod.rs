//! CLI command implementations.

pub mod cart;
pub mod countdown;
pub mod facets;
pub mod products;
pub mod session;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use shop_storefront::{LoadState, Storefront, StorefrontView};

use crate::context::Context;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only these brands (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Only these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only these volumes (repeatable).
    #[arg(long = "volume")]
    pub volumes: Vec<String>,

    /// Only these scents (repeatable).
    #[arg(long = "scent")]
    pub scents: Vec<String>,

    /// Price range, by position in `shop facets`.
    #[arg(long)]
    pub price: Option<usize>,

    /// Print the HTML product grid.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Filter every group's options by this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show every option instead of the first few.
    #[arg(short, long)]
    pub all: bool,

    /// Print the HTML filter panel.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product
    Add {
        /// Product id.
        id: String,

        /// How many to add.
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Skip the login prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// List cart items
    Show,

    /// Remove a product
    Remove {
        /// Product id.
        id: String,
    },

    /// Empty the cart
    Clear,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Display name stored in the login marker.
    pub name: String,
}

/// Arguments for the countdown command.
#[derive(Args)]
pub struct CountdownArgs {
    /// End of the promotion (RFC 3339).
    pub until: String,
}

/// Load the catalog behind a spinner and fail on error.
pub(crate) async fn load_catalog<V: StorefrontView>(
    store: &mut Storefront<V>,
    ctx: &Context,
) -> Result<()> {
    let spinner = ctx.output.spinner("Loading catalog...");
    let state = store.load().await.clone();
    spinner.finish_and_clear();

    match state {
        LoadState::Loaded => Ok(()),
        LoadState::Failed { reason } => bail!("Failed to load catalog: {}", reason),
        LoadState::NotLoaded => bail!("Catalog was not loaded"),
    }
}
