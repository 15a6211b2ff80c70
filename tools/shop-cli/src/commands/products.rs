//! Product listing command.

use anyhow::Result;
use shop_commerce::prelude::*;
use shop_storefront::render;

use super::{load_catalog, ProductsArgs};
use crate::context::Context;
use crate::output::price_cell;
use crate::view::ConsoleView;

const WIDTHS: [usize; 5] = [6, 36, 16, 34, 8];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(ConsoleView::new(ctx.output.clone()))?;
    load_catalog(&mut store, ctx).await?;

    let selection = selection_from(&args)?;
    if !selection.is_empty() {
        store.set_selection(selection);
    }
    let products = store.products();

    if args.html {
        ctx.output
            .raw(&render::render_product_grid(products, &ctx.config.assets.image_prefix));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info(render::EMPTY_STATE_MESSAGE);
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "SOLD"], &WIDTHS);
    for p in products {
        let sold = p.product.units_sold.to_string();
        let price = price_cell(p);
        ctx.output.table_row(
            &[
                p.id().as_str(),
                &p.product.name,
                &p.product.brand,
                &price,
                &sold,
            ],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} of {} product(s)",
        products.len(),
        store.all_products().len()
    ));

    Ok(())
}

fn selection_from(args: &ProductsArgs) -> Result<FacetSelection> {
    let groups = [
        (FacetKind::Brand, &args.brands),
        (FacetKind::Category, &args.categories),
        (FacetKind::Volume, &args.volumes),
        (FacetKind::Scent, &args.scents),
    ];

    let mut selection = FacetSelection::new();
    for (kind, values) in groups {
        for value in values {
            selection.select(kind, value.as_str());
        }
    }
    if let Some(index) = args.price {
        selection.set_price_range(Some(PriceRange::by_index(index)?));
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProductsArgs {
        ProductsArgs {
            brands: vec!["Dior".to_string(), "Chanel".to_string()],
            categories: Vec::new(),
            volumes: vec!["100ml".to_string()],
            scents: Vec::new(),
            price: Some(0),
            html: false,
        }
    }

    #[test]
    fn test_selection_from_args() {
        let selection = selection_from(&args()).unwrap();
        assert!(selection.is_selected(FacetKind::Brand, "Dior"));
        assert!(selection.is_selected(FacetKind::Brand, "Chanel"));
        assert!(selection.is_selected(FacetKind::Volume, "100ml"));
        assert_eq!(selection.price_range, Some(PriceRange::bounded(0, 200_000)));
    }

    #[test]
    fn test_unknown_price_range() {
        let mut args = args();
        args.price = Some(9);
        assert!(selection_from(&args).is_err());
    }
}
