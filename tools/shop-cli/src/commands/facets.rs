//! Facet listing command.

use anyhow::Result;
use console::style;
use shop_commerce::prelude::*;
use shop_storefront::render;

use super::{load_catalog, FacetsArgs};
use crate::context::Context;
use crate::view::ConsoleView;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(ConsoleView::new(ctx.output.clone()))?;
    load_catalog(&mut store, ctx).await?;

    for kind in FacetKind::ALL {
        if let Some(term) = &args.search {
            store.search_facet(kind, term);
        }
        if args.all && !store.panel().is_expanded(kind) {
            store.toggle_more(kind);
        }
    }
    let panel = store.panel();

    if args.html {
        ctx.output.raw(&render::render_facet_panel(panel));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(panel.index());
        return Ok(());
    }

    for group in panel.index().visible_groups() {
        ctx.output.header(group.kind.title());
        let options = panel.visible_options(group.kind);
        if options.is_empty() {
            ctx.output.list_item(&style("(no match)").dim().to_string());
        }
        for option in options {
            ctx.output.list_item(&option.label());
        }
        if panel.shows_more_link(group.kind) && !panel.is_expanded(group.kind) {
            let hidden = group.len().saturating_sub(shop_commerce::search::DEFAULT_VISIBLE_OPTIONS);
            ctx.output.kv("Xem thêm", &format!("{} more (--all)", hidden));
        }
    }

    ctx.output.header("Giá sản phẩm");
    for option in &panel.index().price_ranges {
        ctx.output.list_item(&format!(
            "[{}] {} ({})",
            option.index,
            option.range.label(),
            option.count
        ));
    }

    Ok(())
}
