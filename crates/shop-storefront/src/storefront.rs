//! Page state for the product listing.

use crate::cart_store::CartStore;
use crate::error::StorefrontError;
use crate::loader::CatalogLoader;
use crate::panel::FacetPanel;
use crate::view::{StorefrontView, LOGIN_PROMPT};
use chrono::{DateTime, Utc};
use shop_cache::{Cache, Session};
use shop_commerce::prelude::*;

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    /// The last attempt failed; the page stays empty until [`Storefront::retry`].
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontOptions {
    /// Prepended to product image paths stored in the cart.
    pub image_prefix: String,
    /// Where the login prompt sends the shopper.
    pub login_page: String,
}

impl Default for StorefrontOptions {
    fn default() -> Self {
        Self {
            image_prefix: "../".to_string(),
            login_page: "Login.html".to_string(),
        }
    }
}

/// What [`Storefront::add_to_cart`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart was written.
    Changed(AddOutcome),
    /// Nobody is logged in; `redirected` if the shopper chose to log in.
    LoginRequired { redirected: bool },
    /// The id is in neither the catalog nor the products document.
    ProductNotFound,
    /// Re-reading the products document failed.
    LookupFailed,
}

/// Owns the catalog, the current filtered view and the facet panel, and
/// pushes every change to its view.
pub struct Storefront<V> {
    loader: CatalogLoader,
    cache: Cache,
    view: V,
    options: StorefrontOptions,
    state: LoadState,
    all_products: Vec<EnrichedProduct>,
    current: Vec<EnrichedProduct>,
    panel: FacetPanel,
}

impl<V: StorefrontView> Storefront<V> {
    pub fn new(loader: CatalogLoader, cache: Cache, view: V) -> Self {
        Self {
            loader,
            cache,
            view,
            options: StorefrontOptions::default(),
            state: LoadState::NotLoaded,
            all_products: Vec::new(),
            current: Vec::new(),
            panel: FacetPanel::new(FacetIndex::build(&[])),
        }
    }

    pub fn with_options(mut self, options: StorefrontOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The full catalog, best sellers first.
    pub fn all_products(&self) -> &[EnrichedProduct] {
        &self.all_products
    }

    /// Products matching the current selection.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.current
    }

    pub fn panel(&self) -> &FacetPanel {
        &self.panel
    }

    pub fn selection(&self) -> &FacetSelection {
        self.panel.selection()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Load the catalog once.
    pub async fn load(&mut self) -> &LoadState {
        self.load_at(Utc::now()).await
    }

    /// Load the catalog with discounts evaluated at `now`. Does nothing if
    /// the catalog is already loaded.
    pub async fn load_at(&mut self, now: DateTime<Utc>) -> &LoadState {
        if self.state.is_loaded() {
            tracing::debug!("catalog already loaded");
            return &self.state;
        }
        self.fetch_catalog(now).await
    }

    /// Load again regardless of the current state.
    pub async fn retry(&mut self) -> &LoadState {
        self.retry_at(Utc::now()).await
    }

    pub async fn retry_at(&mut self, now: DateTime<Utc>) -> &LoadState {
        tracing::info!(previous = ?self.state, "retrying catalog load");
        self.fetch_catalog(now).await
    }

    async fn fetch_catalog(&mut self, now: DateTime<Utc>) -> &LoadState {
        match self.loader.load(now).await {
            Ok(catalog) => {
                self.panel = FacetPanel::new(FacetIndex::build(&catalog));
                self.current = catalog.clone();
                self.all_products = catalog;
                self.state = LoadState::Loaded;

                self.view.show_products(&self.current);
                self.view.show_facets(&self.panel);
                self.refresh_cart_count();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
                let reason = e.to_string();
                self.view.show_load_error(&reason);
                self.state = LoadState::Failed { reason };
            }
        }
        &self.state
    }

    /// Tick or untick a facet option. Returns whether it is now selected.
    pub fn toggle_facet(&mut self, kind: FacetKind, value: &str) -> bool {
        let selected = self.panel.selection_mut().toggle(kind, value);
        self.refilter();
        selected
    }

    /// Pick one of the fixed price ranges by position, or clear it.
    pub fn select_price_range(&mut self, index: Option<usize>) -> Result<(), CommerceError> {
        let range = index.map(PriceRange::by_index).transpose()?;
        self.panel.selection_mut().set_price_range(range);
        self.refilter();
        Ok(())
    }

    /// Replace the whole selection.
    pub fn set_selection(&mut self, selection: FacetSelection) {
        self.panel.set_selection(selection);
        self.refilter();
    }

    /// Recompute the view from the full catalog and redraw.
    pub fn refilter(&mut self) {
        self.current = self.panel.selection().apply(&self.all_products);
        tracing::debug!(
            matched = self.current.len(),
            total = self.all_products.len(),
            "filters applied"
        );
        self.view.show_products(&self.current);
        self.view.show_facets(&self.panel);
    }

    /// Type into a group's search box.
    pub fn search_facet(&mut self, kind: FacetKind, text: &str) {
        self.panel.set_search(kind, text);
        self.view.show_facets(&self.panel);
    }

    /// Flip a group's "show more" link. Returns whether it is now expanded.
    pub fn toggle_more(&mut self, kind: FacetKind) -> bool {
        let expanded = self.panel.toggle_expanded(kind);
        self.view.show_facets(&self.panel);
        expanded
    }

    /// Clear every filter and search box and show the full catalog.
    pub fn reset(&mut self) {
        self.panel.reset();
        self.current = self.all_products.clone();
        tracing::debug!(total = self.all_products.len(), "filters reset");
        self.view.show_products(&self.current);
        self.view.show_facets(&self.panel);
    }

    /// Add `quantity` of a product to the persisted cart.
    ///
    /// Anonymous shoppers are asked to log in and the cart is left alone.
    /// Products missing from the loaded catalog are looked up in the raw
    /// products document.
    pub async fn add_to_cart(
        &mut self,
        id: &ProductId,
        quantity: u32,
    ) -> Result<CartOutcome, StorefrontError> {
        if !Session::new(&self.cache).is_logged_in()? {
            let redirected = self.view.confirm_login(LOGIN_PROMPT);
            if redirected {
                self.view.navigate(&self.options.login_page);
            }
            tracing::info!(product = %id, redirected, "add to cart requires login");
            return Ok(CartOutcome::LoginRequired { redirected });
        }

        let product = match self.all_products.iter().find(|p| p.id() == id) {
            Some(found) => found.product.clone(),
            None => match self.loader.fetch_products().await {
                Ok(products) => match products.into_iter().find(|p| &p.id == id) {
                    Some(found) => found,
                    None => {
                        tracing::warn!(product = %id, "product not found");
                        return Ok(CartOutcome::ProductNotFound);
                    }
                },
                Err(e) => {
                    tracing::error!(product = %id, error = %e, "error adding to cart");
                    return Ok(CartOutcome::LookupFailed);
                }
            },
        };

        let prefix = self.options.image_prefix.as_str();
        let (outcome, count) = CartStore::new(&self.cache).update(|cart| {
            let outcome = cart.add(&product, quantity, prefix)?;
            Ok::<_, StorefrontError>((outcome, cart.item_count()))
        })?;

        tracing::info!(product = %id, quantity, ?outcome, "cart updated");
        self.view.notify(&outcome.message(&product.name));
        self.view.show_cart_count(count);
        Ok(CartOutcome::Changed(outcome))
    }

    /// The persisted cart.
    pub fn cart(&self) -> Result<CartList, StorefrontError> {
        Ok(CartStore::new(&self.cache).load()?)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<CartItem, StorefrontError> {
        let (removed, count) = CartStore::new(&self.cache).update(|cart| {
            let removed = cart.remove(id)?;
            Ok::<_, StorefrontError>((removed, cart.item_count()))
        })?;
        tracing::info!(product = %id, "removed from cart");
        self.view.show_cart_count(count);
        Ok(removed)
    }

    pub fn clear_cart(&mut self) -> Result<(), StorefrontError> {
        CartStore::new(&self.cache).save(&CartList::new())?;
        tracing::info!("cart cleared");
        self.view.show_cart_count(0);
        Ok(())
    }

    /// Push the persisted item count to the cart badge.
    pub fn refresh_cart_count(&mut self) {
        match CartStore::new(&self.cache).load() {
            Ok(cart) => self.view.show_cart_count(cart.item_count()),
            Err(e) => tracing::warn!(error = %e, "could not read cart"),
        }
    }
}

impl<V> std::fmt::Debug for Storefront<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("state", &self.state)
            .field("products", &self.all_products.len())
            .field("visible", &self.current.len())
            .field("selection", self.panel.selection())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HtmlPage;
    use shop_data::{FetchClient, MemorySource};

    const PRODUCTS: &str = r#"{"products": [
        {"id": 1, "maSanPham": "A", "tenSanPham": "Alpha", "tenThuongHieu": "Dior",
         "tenDanhMuc": "Nam", "gia": 100000, "hinhAnh": "img/a.jpg", "soLuongBan": 5,
         "thuocTinh": {"dungTich": "100ml", "huongThom": "Gỗ"}},
        {"id": 2, "maSanPham": "B", "tenSanPham": "Beta", "tenThuongHieu": "Chanel",
         "tenDanhMuc": "Nữ", "gia": 200000, "hinhAnh": "img/b.jpg", "soLuongBan": 10,
         "thuocTinh": {"dungTich": "50ml"}}
    ]}"#;

    const DISCOUNTS: &str = r#"{"discounts": [
        {"maSanPham": "B", "giaGoc": 200000, "phanTramGiam": 10, "ngayKetThuc": "2999-01-01"}
    ]}"#;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_document("products.json", PRODUCTS)
            .with_document("discounts.json", DISCOUNTS)
    }

    fn storefront(source: MemorySource) -> Storefront<HtmlPage> {
        let loader = CatalogLoader::new(FetchClient::new(source));
        Storefront::new(loader, Cache::in_memory(), HtmlPage::new("../"))
    }

    fn ids(products: &[EnrichedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.id().as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_publishes_catalog() {
        let mut store = storefront(source());
        assert!(store.load().await.is_loaded());
        assert_eq!(ids(store.all_products()), vec!["2", "1"]);
        assert_eq!(ids(store.products()), vec!["2", "1"]);
        assert!(store.view().products.contains("180.000đ"));
        assert!(store.view().cart_badge.contains(">0<"));
        assert_eq!(store.panel().index().brands.len(), 2);
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let source = std::sync::Arc::new(source());
        let loader = CatalogLoader::new(FetchClient::new(source.clone()));
        let mut store = Storefront::new(loader, Cache::in_memory(), HtmlPage::new(""));
        store.load().await;
        store.load().await;
        assert_eq!(source.fetch_count("products.json"), 1);
        store.retry().await;
        assert_eq!(source.fetch_count("products.json"), 2);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_page_empty() {
        let source = MemorySource::new()
            .with_document("products.json", PRODUCTS)
            .with_failure("discounts.json", 500);
        let mut store = storefront(source);
        let state = store.load().await.clone();
        assert!(matches!(state, LoadState::Failed { .. }));
        assert!(store.all_products().is_empty());
        assert!(store.view().products.is_empty());
        assert!(store.view().error.is_some());
    }

    #[tokio::test]
    async fn test_filters_and_reset() {
        let mut store = storefront(source());
        store.load().await;

        assert!(store.toggle_facet(FacetKind::Brand, "Dior"));
        assert_eq!(ids(store.products()), vec!["1"]);

        store.toggle_facet(FacetKind::Brand, "Chanel");
        assert_eq!(ids(store.products()), vec!["2", "1"]);

        store.toggle_facet(FacetKind::Scent, "Gỗ");
        assert_eq!(ids(store.products()), vec!["1"]);

        store.search_facet(FacetKind::Brand, "dio");
        assert!(store.toggle_more(FacetKind::Brand));

        store.reset();
        assert!(store.selection().is_empty());
        assert_eq!(store.panel().search_text(FacetKind::Brand), "");
        assert!(!store.panel().is_expanded(FacetKind::Brand));
        assert_eq!(ids(store.products()), vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_price_range_selection() {
        let mut store = storefront(source());
        store.load().await;

        store.select_price_range(Some(0)).unwrap();
        assert_eq!(ids(store.products()), vec!["2", "1"]);

        store.select_price_range(Some(1)).unwrap();
        assert!(store.products().is_empty());
        assert!(store.view().products.contains(crate::render::EMPTY_STATE_MESSAGE));

        assert!(store.select_price_range(Some(42)).is_err());
        store.select_price_range(None).unwrap();
        assert_eq!(store.products().len(), 2);
    }

    #[tokio::test]
    async fn test_add_to_cart_requires_login() {
        let mut store = storefront(source());
        store.load().await;

        let outcome = store.add_to_cart(&ProductId::new("1"), 1).await.unwrap();
        assert_eq!(outcome, CartOutcome::LoginRequired { redirected: false });
        assert!(store.cart().unwrap().is_empty());
        assert!(store.view().location.is_none());

        let mut store = Storefront {
            view: HtmlPage::new("").accepting_login(true),
            ..store
        };
        let outcome = store.add_to_cart(&ProductId::new("1"), 1).await.unwrap();
        assert_eq!(outcome, CartOutcome::LoginRequired { redirected: true });
        assert_eq!(store.view().location.as_deref(), Some("Login.html"));
        assert!(store.cart().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falsy_user_is_not_logged_in() {
        let mut store = storefront(source());
        store.load().await;
        store.cache().set("user", &false).unwrap();
        let outcome = store.add_to_cart(&ProductId::new("1"), 1).await.unwrap();
        assert!(matches!(outcome, CartOutcome::LoginRequired { .. }));
    }

    #[tokio::test]
    async fn test_add_to_cart_increments() {
        let mut store = storefront(source());
        store.load().await;
        Session::new(store.cache()).login(&"an").unwrap();

        let id = ProductId::new("2");
        assert_eq!(
            store.add_to_cart(&id, 1).await.unwrap(),
            CartOutcome::Changed(AddOutcome::Added)
        );
        assert_eq!(
            store.add_to_cart(&id, 2).await.unwrap(),
            CartOutcome::Changed(AddOutcome::QuantityUpdated { quantity: 3 })
        );

        let cart = store.cart().unwrap();
        assert_eq!(cart.len(), 1);
        let item = cart.get(&id).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, Vnd::new(200_000));
        assert_eq!(item.image, "../img/b.jpg");
        assert!(store.view().cart_badge.contains(">3<"));
        assert_eq!(
            store.view().notices,
            vec![
                "Đã thêm Beta vào giỏ hàng!".to_string(),
                "Đã cập nhật số lượng sản phẩm Beta trong giỏ hàng!".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_add_to_cart_falls_back_to_document() {
        let mut store = storefront(source());
        Session::new(store.cache()).login(&"an").unwrap();

        let outcome = store.add_to_cart(&ProductId::new("1"), 1).await.unwrap();
        assert_eq!(outcome, CartOutcome::Changed(AddOutcome::Added));

        let outcome = store.add_to_cart(&ProductId::new("99"), 1).await.unwrap();
        assert_eq!(outcome, CartOutcome::ProductNotFound);
        assert_eq!(store.cart().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_failure_leaves_cart() {
        let source = MemorySource::new().with_failure("products.json", 503);
        let mut store = storefront(source);
        Session::new(store.cache()).login(&"an").unwrap();

        let outcome = store.add_to_cart(&ProductId::new("1"), 1).await.unwrap();
        assert_eq!(outcome, CartOutcome::LookupFailed);
        assert!(store.cart().unwrap().is_empty());
        assert!(store.view().notices.is_empty());
    }

    #[tokio::test]
    async fn test_zero_quantity_rejected() {
        let mut store = storefront(source());
        store.load().await;
        Session::new(store.cache()).login(&"an").unwrap();
        let result = store.add_to_cart(&ProductId::new("1"), 0).await;
        assert!(matches!(
            result,
            Err(StorefrontError::Commerce(CommerceError::InvalidQuantity(0)))
        ));
        assert!(store.cart().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let mut store = storefront(source());
        store.load().await;
        Session::new(store.cache()).login(&"an").unwrap();
        store.add_to_cart(&ProductId::new("1"), 2).await.unwrap();
        store.add_to_cart(&ProductId::new("2"), 1).await.unwrap();

        let removed = store.remove_from_cart(&ProductId::new("1")).unwrap();
        assert_eq!(removed.quantity, 2);
        assert!(store.view().cart_badge.contains(">1<"));
        assert!(store.remove_from_cart(&ProductId::new("1")).is_err());

        store.clear_cart().unwrap();
        assert!(store.cart().unwrap().is_empty());
    }
}
