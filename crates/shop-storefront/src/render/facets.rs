//! Filter dropdowns.

use super::html_escape;
use crate::panel::FacetPanel;
use shop_commerce::prelude::*;

/// Render every visible facet group, the price ranges and the reset button.
pub fn render_facet_panel(panel: &FacetPanel) -> String {
    let groups: String = panel
        .index()
        .visible_groups()
        .map(|group| render_facet_group(panel, group))
        .collect();

    let prices = render_price_ranges(panel);

    format!(
        r#"<aside class="filters" data-section="facets">
    {groups}
    {prices}
    <button id="resetFilters" class="reset-filters">Xóa bộ lọc</button>
</aside>"#
    )
}

fn render_facet_group(panel: &FacetPanel, group: &FacetGroup) -> String {
    let kind = group.kind;
    let selection = panel.selection();

    let options: String = panel
        .visible_options(kind)
        .into_iter()
        .map(|v| {
            let checked = if selection.is_selected(kind, &v.value) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label><input class="checkbox" type="checkbox" name="{}" value="{}"{}> {}</label>"#,
                kind.key(),
                html_escape(&v.value),
                checked,
                html_escape(&v.label())
            )
        })
        .collect();

    let more = if panel.shows_more_link(kind) {
        let text = if panel.is_expanded(kind) { "Thu gọn" } else { "Xem thêm" };
        format!(r##"<a href="#" class="more-link" data-facet="{}">{}</a>"##, kind.key(), text)
    } else {
        String::new()
    };

    format!(
        r#"<div class="dropdown" data-facet="{key}">
        <h3 class="facet-title">{title}</h3>
        <div class="dropdown-content">
            <input class="search" type="text" placeholder="Tìm kiếm" value="{search}">
            {options}
            {more}
        </div>
    </div>"#,
        key = kind.key(),
        title = kind.title(),
        search = html_escape(panel.search_text(kind)),
    )
}

fn render_price_ranges(panel: &FacetPanel) -> String {
    let selected = panel.selection().price_range;

    let options: String = panel
        .index()
        .price_ranges
        .iter()
        .map(|option| {
            let checked = if selected == Some(option.range) { " checked" } else { "" };
            let max = option
                .range
                .max
                .map(|m| m.amount().to_string())
                .unwrap_or_else(|| "Infinity".to_string());
            format!(
                r#"<label><input class="checkbox price-checkbox" type="radio" name="priceRange" data-index="{}" data-min="{}" data-max="{}"{}> {} ({})</label>"#,
                option.index,
                option.range.min.amount(),
                max,
                checked,
                option.range.label(),
                option.count
            )
        })
        .collect();

    format!(
        r#"<div class="dropdown" data-facet="price">
        <h3 class="facet-title">Giá sản phẩm</h3>
        <div class="dropdown-content">{options}</div>
    </div>"#
    )
}

/// Cart count indicator.
pub fn render_cart_badge(count: u64) -> String {
    format!(r#"<span class="cart-badge" data-count="{count}">{count}</span>"#)
}

/// Notice with a retry affordance shown after a failed catalog load.
pub fn render_load_error(reason: &str) -> String {
    format!(
        r#"<div class="load-error" role="alert">
    <p>Không thể tải danh sách sản phẩm.</p>
    <p class="load-error-detail">{}</p>
    <button class="retry-load">Thử lại</button>
</div>"#,
        html_escape(reason)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<EnrichedProduct> {
        let brands = ["Dior", "Chanel", "Gucci", "Prada", "Versace", "Hermes"];
        brands
            .iter()
            .enumerate()
            .map(|(i, brand)| {
                let price = Vnd::new(150_000 * (i as i64 + 1));
                let mut p = Product::new(i.to_string(), format!("SP{i}"), price);
                p.brand = brand.to_string();
                p.category = "Nam".to_string();
                EnrichedProduct::undiscounted(p)
            })
            .collect()
    }

    #[test]
    fn test_scent_group_not_rendered_when_empty() {
        let panel = FacetPanel::new(FacetIndex::build(&catalog()));
        let html = render_facet_panel(&panel);
        assert!(html.contains(r#"data-facet="brand""#));
        assert!(html.contains(r#"data-facet="category""#));
        assert!(!html.contains(r#"data-facet="scent""#));
    }

    #[test]
    fn test_more_link_and_counts() {
        let panel = FacetPanel::new(FacetIndex::build(&catalog()));
        let html = render_facet_panel(&panel);
        assert!(html.contains("Xem thêm"));
        assert!(html.contains("Dior (1)"));
        assert!(!html.contains("Hermes (1)"));
        assert!(html.contains("Nam (6)"));
    }

    #[test]
    fn test_checked_state_follows_selection() {
        let mut panel = FacetPanel::new(FacetIndex::build(&catalog()));
        panel.selection_mut().select(FacetKind::Brand, "Gucci");
        panel
            .selection_mut()
            .set_price_range(Some(shop_commerce::search::PRICE_RANGES[0]));
        let html = render_facet_panel(&panel);
        assert!(html.contains(r#"value="Gucci" checked"#));
        assert!(html.contains(r#"data-index="0" data-min="0" data-max="200000" checked"#));
    }

    #[test]
    fn test_only_populated_price_ranges() {
        let panel = FacetPanel::new(FacetIndex::build(&catalog()));
        let html = render_facet_panel(&panel);
        // prices 150k..900k
        assert!(html.contains("Dưới 200.000₫ (1)"));
        assert!(!html.contains("Trên 2.000.000₫"));
    }

    #[test]
    fn test_badge_and_error() {
        assert!(render_cart_badge(3).contains(">3<"));
        assert!(render_load_error("HTTP 404").contains("Thử lại"));
    }
}
