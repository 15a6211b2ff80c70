//! Product grid.

use super::{html_escape, urlencoding_encode, DETAIL_PAGE};
use shop_commerce::prelude::*;

/// Shown in place of the grid when nothing matches.
pub const EMPTY_STATE_MESSAGE: &str = "Không tìm thấy sản phẩm phù hợp.";

/// Render the product grid for the current view.
pub fn render_product_grid(products: &[EnrichedProduct], image_prefix: &str) -> String {
    if products.is_empty() {
        return format!(
            r#"<div class="product-grid"><div class="no-products">{}</div></div>"#,
            EMPTY_STATE_MESSAGE
        );
    }

    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, image_prefix))
        .collect();

    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

/// Render one product card.
pub fn render_product_card(product: &EnrichedProduct, image_prefix: &str) -> String {
    let id = html_escape(product.id().as_str());
    let name = html_escape(&product.product.name);

    let badge = product
        .discount
        .as_ref()
        .map(|d| format!(r#"<div class="discount-badge">{}</div>"#, html_escape(&d.badge())))
        .unwrap_or_default();

    let old_price = product
        .discount
        .as_ref()
        .map(|d| format!(r#"<span class="old-price">{}</span>"#, d.original_price.display()))
        .unwrap_or_default();

    format!(
        r#"<div class="product-item" data-product-id="{id}">
    <a class="product-link" href="{detail}?id={link_id}">
        {badge}
        <div class="image-container">
            <img src="{image}" alt="{name}">
        </div>
        <div class="brand">{brand}</div>
        <div class="name">{name}</div>
        <div class="price">
            {price}
            {old_price}
        </div>
    </a>
    <button class="add-to-cart-btn" data-product-id="{id}" data-quantity="1">
        Thêm vào giỏ
    </button>
</div>"#,
        detail = DETAIL_PAGE,
        link_id = urlencoding_encode(product.id().as_str()),
        image = html_escape(&format!("{}{}", image_prefix, product.product.image)),
        brand = html_escape(&product.product.brand),
        price = product.effective_price.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(discounted: bool) -> EnrichedProduct {
        let mut p = Product::new("7", "NH007", Vnd::new(200_000));
        p.name = "Bleu <Intense>".to_string();
        p.brand = "Chanel".to_string();
        p.image = "img/bleu.jpg".to_string();
        if discounted {
            EnrichedProduct {
                product: p,
                effective_price: Vnd::new(180_000),
                discount: Some(AppliedDiscount {
                    original_price: Vnd::new(200_000),
                    percent_off: 10.0,
                }),
            }
        } else {
            EnrichedProduct::undiscounted(p)
        }
    }

    #[test]
    fn test_empty_grid_shows_message() {
        let html = render_product_grid(&[], "../");
        assert!(html.contains(EMPTY_STATE_MESSAGE));
        assert!(!html.contains("product-item"));
    }

    #[test]
    fn test_card_without_discount() {
        let html = render_product_card(&product(false), "../");
        assert!(html.contains("200.000đ"));
        assert!(!html.contains("old-price"));
        assert!(!html.contains("discount-badge"));
        assert!(html.contains(r#"src="../img/bleu.jpg""#));
        assert!(html.contains("ChiTietSanPham.html?id=7"));
        assert!(html.contains("Bleu &lt;Intense&gt;"));
    }

    #[test]
    fn test_card_with_discount() {
        let html = render_product_card(&product(true), "");
        assert!(html.contains("180.000đ"));
        assert!(html.contains(r#"<span class="old-price">200.000đ</span>"#));
        assert!(html.contains(r#"<div class="discount-badge">-10%</div>"#));
    }

    #[test]
    fn test_grid_keeps_order() {
        let mut second = product(false);
        second.product.id = ProductId::new("8");
        let html = render_product_grid(&[product(false), second], "");
        let first = html.find(r#"data-product-id="7""#).unwrap();
        let next = html.find(r#"data-product-id="8""#).unwrap();
        assert!(first < next);
    }
}
