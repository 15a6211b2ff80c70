//! Catalog and cart domain logic for the storefront.
//!
//! This crate holds everything that can be expressed without a page or a
//! network:
//!
//! - **Catalog**: products as published in the static catalog, discounts, and
//!   the merge that computes each product's effective price
//! - **Search**: the facet index, the fixed VND price ranges and the filter
//!   engine that applies a [`FacetSelection`](search::FacetSelection)
//! - **Cart**: the persisted cart list with append-or-increment semantics
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use shop_commerce::prelude::*;
//!
//! let products: Vec<Product> = serde_json::from_str(r#"[
//!     {"id": 1, "maSanPham": "A", "tenSanPham": "Nuoc hoa A", "tenThuongHieu": "Dior",
//!      "tenDanhMuc": "Nam", "gia": 100000, "hinhAnh": "img/a.jpg", "soLuongBan": 5}
//! ]"#).unwrap();
//!
//! let catalog = merge_discounts(&products, &[], Utc::now());
//! let facets = FacetIndex::build(&catalog);
//! assert_eq!(facets.brands.values()[0].count, 1);
//!
//! let view = FacetSelection::default().apply(&catalog);
//! assert_eq!(view.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Vnd;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Vnd;

    // Catalog
    pub use crate::catalog::{
        merge_discounts, sort_best_sellers, AppliedDiscount, Discount, EnrichedProduct, Product,
        ProductAttributes,
    };

    // Search
    pub use crate::search::{
        FacetGroup, FacetIndex, FacetKind, FacetSelection, FacetValue, PriceRange,
        PriceRangeOption,
    };

    // Cart
    pub use crate::cart::{AddOutcome, CartItem, CartList};
}
