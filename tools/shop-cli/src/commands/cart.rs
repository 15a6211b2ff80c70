//! Cart commands.

use anyhow::{bail, Result};
use shop_commerce::prelude::*;
use shop_storefront::CartOutcome;

use super::{load_catalog, CartArgs, CartCommand};
use crate::context::Context;
use crate::view::ConsoleView;

const WIDTHS: [usize; 5] = [6, 36, 16, 12, 5];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Add { id, quantity, yes }) => add(&id, quantity, yes, ctx).await,
        Some(CartCommand::Show) | None => show(ctx),
        Some(CartCommand::Remove { id }) => remove(&id, ctx),
        Some(CartCommand::Clear) => clear(ctx),
    }
}

async fn add(id: &str, quantity: u32, yes: bool, ctx: &Context) -> Result<()> {
    let view = ConsoleView::new(ctx.output.clone()).assume_yes(yes);
    let mut store = ctx.storefront(view)?;

    // a failed load still leaves the products document fallback
    if let Err(e) = load_catalog(&mut store, ctx).await {
        ctx.output.debug(&format!("{:#}", e));
    }

    let outcome = store.add_to_cart(&ProductId::new(id), quantity).await?;
    match outcome {
        CartOutcome::Changed(change) => {
            if ctx.output.is_json() {
                ctx.output.json(&change);
            }
            ctx.output
                .info(&format!("Cart now holds {} item(s)", store.cart()?.item_count()));
            Ok(())
        }
        CartOutcome::LoginRequired { .. } => bail!("Login required to add to the cart"),
        CartOutcome::ProductNotFound => bail!("Product '{}' not found", id),
        CartOutcome::LookupFailed => bail!("Could not look up product '{}'", id),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.storefront(ConsoleView::new(ctx.output.clone()))?;
    let cart = store.cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "QTY"], &WIDTHS);
    for item in cart.items() {
        let price = item.price.display();
        let quantity = item.quantity.to_string();
        ctx.output.table_row(
            &[item.id.as_str(), &item.name, &item.brand, &price, &quantity],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Subtotal", &cart.subtotal()?.display());
    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(ConsoleView::new(ctx.output.clone()))?;
    let removed = store.remove_from_cart(&ProductId::new(id))?;
    ctx.output.success(&format!("Removed {} from the cart", removed.name));
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(ConsoleView::new(ctx.output.clone()))?;
    store.clear_cart()?;
    ctx.output.success("Cart cleared");
    Ok(())
}
