//! Binding between storefront state and whatever displays it.

use crate::panel::FacetPanel;
use crate::render;
use shop_commerce::prelude::*;

/// Prompt shown when an anonymous shopper tries to add to the cart.
pub const LOGIN_PROMPT: &str =
    "Bạn cần đăng nhập để thêm sản phẩm vào giỏ hàng. Bạn có muốn đăng nhập ngay bây giờ?";

/// Receives every state change the storefront wants displayed.
pub trait StorefrontView {
    /// Replace the product grid.
    fn show_products(&mut self, products: &[EnrichedProduct]);

    /// Redraw the filter dropdowns.
    fn show_facets(&mut self, panel: &FacetPanel);

    /// Update the cart badge.
    fn show_cart_count(&mut self, count: u64);

    /// Transient notice to the shopper.
    fn notify(&mut self, message: &str);

    /// Ask whether to go log in. `true` accepts.
    fn confirm_login(&mut self, prompt: &str) -> bool;

    /// Leave for another page.
    fn navigate(&mut self, page: &str);

    /// The catalog could not be loaded.
    fn show_load_error(&mut self, _reason: &str) {}
}

/// View that keeps the latest HTML of each page region.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    image_prefix: String,
    accept_login: bool,
    pub products: String,
    pub facets: String,
    pub cart_badge: String,
    pub error: Option<String>,
    pub notices: Vec<String>,
    pub location: Option<String>,
}

impl HtmlPage {
    pub fn new(image_prefix: impl Into<String>) -> Self {
        Self {
            image_prefix: image_prefix.into(),
            ..Self::default()
        }
    }

    /// Answer login prompts with `accept`.
    pub fn accepting_login(mut self, accept: bool) -> Self {
        self.accept_login = accept;
        self
    }

    /// The whole page body.
    pub fn body(&self) -> String {
        let error = self.error.as_deref().unwrap_or_default();
        format!(
            "<header>{}</header>\n<main>\n{}\n{}\n{}\n</main>",
            self.cart_badge, self.facets, error, self.products
        )
    }
}

impl StorefrontView for HtmlPage {
    fn show_products(&mut self, products: &[EnrichedProduct]) {
        self.error = None;
        self.products = render::render_product_grid(products, &self.image_prefix);
    }

    fn show_facets(&mut self, panel: &FacetPanel) {
        self.facets = render::render_facet_panel(panel);
    }

    fn show_cart_count(&mut self, count: u64) {
        self.cart_badge = render::render_cart_badge(count);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm_login(&mut self, _prompt: &str) -> bool {
        self.accept_login
    }

    fn navigate(&mut self, page: &str) {
        self.location = Some(page.to_string());
    }

    fn show_load_error(&mut self, reason: &str) {
        self.error = Some(render::render_load_error(reason));
    }
}
