//! Product catalog module.
//!
//! Contains the products as published, the discounts, and the merge that
//! turns them into the storefront's working list.

mod discount;
mod product;

pub use discount::{merge_discounts, AppliedDiscount, Discount};
pub use product::{sort_best_sellers, EnrichedProduct, Product, ProductAttributes};

use serde::{Deserialize, Serialize};

/// The products document: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsDocument {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// The discounts document: `{ "discounts": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscountsDocument {
    #[serde(default)]
    pub discounts: Vec<Discount>,
}
