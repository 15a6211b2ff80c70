//! Storefront error types.

use shop_cache::CacheError;
use shop_commerce::CommerceError;
use shop_data::FetchError;
use thiserror::Error;

/// Errors surfaced by storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Reading the catalog documents failed.
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Reading or writing client state failed.
    #[error("Client storage failed: {0}")]
    Cache(#[from] CacheError),

    /// A catalog or cart rule was violated.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
