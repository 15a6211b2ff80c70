//! Terminal binding for the storefront.

use dialoguer::Confirm;
use shop_commerce::catalog::EnrichedProduct;
use shop_storefront::{FacetPanel, StorefrontView};

use crate::output::Output;

/// Prints notices and prompts; listings are printed by the commands.
pub struct ConsoleView {
    output: Output,
    assume_yes: bool,
}

impl ConsoleView {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            assume_yes: false,
        }
    }

    /// Accept the login prompt without asking.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl StorefrontView for ConsoleView {
    fn show_products(&mut self, products: &[EnrichedProduct]) {
        self.output
            .debug(&format!("{} product(s) in view", products.len()));
    }

    fn show_facets(&mut self, _panel: &FacetPanel) {}

    fn show_cart_count(&mut self, count: u64) {
        self.output.debug(&format!("cart: {} item(s)", count));
    }

    fn notify(&mut self, message: &str) {
        self.output.success(message);
    }

    fn confirm_login(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if self.output.is_json() {
            return false;
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn navigate(&mut self, page: &str) {
        self.output
            .info(&format!("Log in first ({}): run `shop login <NAME>`", page));
    }

    fn show_load_error(&mut self, reason: &str) {
        self.output.warn(&format!("Could not load the catalog: {}", reason));
    }
}
