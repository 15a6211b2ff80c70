//! # Shop Storefront
//!
//! State behind the product listing page: loading the catalog, faceted
//! filtering, the facet panel controls, the cart and HTML rendering.
//!
//! The page is driven through [`Storefront`], which owns the catalog and
//! pushes every change to a [`StorefrontView`].
//!
//! ```rust,ignore
//! use shop_storefront::prelude::*;
//!
//! let loader = CatalogLoader::new(FetchClient::from_location("data")?);
//! let cache = Cache::open_file(".shop/state.json")?;
//! let mut store = Storefront::new(loader, cache, HtmlPage::new("../"));
//! store.load().await;
//! store.toggle_facet(FacetKind::Brand, "Dior");
//! println!("{}", store.view().body());
//! ```

mod cart_store;
mod error;
mod loader;
mod panel;
mod storefront;
mod view;

pub mod render;
pub mod widgets;

pub use cart_store::{CartStore, CART_KEY};
pub use error::StorefrontError;
pub use loader::{CatalogLoader, DISCOUNTS_DOCUMENT, PRODUCTS_DOCUMENT};
pub use panel::FacetPanel;
pub use storefront::{CartOutcome, LoadState, Storefront, StorefrontOptions};
pub use view::{HtmlPage, StorefrontView, LOGIN_PROMPT};

/// Common imports for front ends.
pub mod prelude {
    pub use crate::widgets::{Carousel, Countdown, Remaining};
    pub use crate::{
        CartOutcome, CatalogLoader, FacetPanel, HtmlPage, LoadState, Storefront,
        StorefrontError, StorefrontOptions, StorefrontView,
    };
    pub use shop_cache::{Cache, Session};
    pub use shop_commerce::prelude::*;
    pub use shop_data::FetchClient;
}
