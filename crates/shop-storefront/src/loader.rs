//! Catalog load orchestration.

use chrono::{DateTime, Utc};
use shop_commerce::catalog::{DiscountsDocument, ProductsDocument};
use shop_commerce::prelude::*;
use shop_data::{FetchClient, FetchError};

/// Default document names.
pub const PRODUCTS_DOCUMENT: &str = "products.json";
pub const DISCOUNTS_DOCUMENT: &str = "discounts.json";

/// Reads the product and discount documents and builds the working catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: FetchClient,
    products: String,
    discounts: String,
}

impl CatalogLoader {
    pub fn new(client: FetchClient) -> Self {
        Self {
            client,
            products: PRODUCTS_DOCUMENT.to_string(),
            discounts: DISCOUNTS_DOCUMENT.to_string(),
        }
    }

    /// Override the document names.
    pub fn with_documents(
        mut self,
        products: impl Into<String>,
        discounts: impl Into<String>,
    ) -> Self {
        self.products = products.into();
        self.discounts = discounts.into();
        self
    }

    /// Read both documents concurrently, merge discounts as of `now` and
    /// order best sellers first.
    ///
    /// Either read failing fails the whole load.
    pub async fn load(&self, now: DateTime<Utc>) -> Result<Vec<EnrichedProduct>, FetchError> {
        let (products, discounts) = futures::try_join!(
            self.client.get_json::<ProductsDocument>(&self.products),
            self.client.get_json::<DiscountsDocument>(&self.discounts),
        )?;

        let mut catalog = merge_discounts(&products.products, &discounts.discounts, now);
        sort_best_sellers(&mut catalog);

        tracing::info!(
            products = catalog.len(),
            discounts = discounts.discounts.len(),
            on_sale = catalog.iter().filter(|p| p.is_on_sale()).count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Re-read only the raw products document.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let document: ProductsDocument = self.client.get_json(&self.products).await?;
        Ok(document.products)
    }
}
