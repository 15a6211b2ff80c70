//! Static document fetching for the storefront catalog.
//!
//! The catalog lives in plain JSON documents (`products.json`,
//! `discounts.json`) served either from a directory or from a web server.
//! A [`DocumentSource`] reads raw bytes by name; [`FetchClient`] adds JSON
//! decoding and logging on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::FetchClient;
//!
//! let client = FetchClient::from_location("https://shop.example/data")?;
//! let doc: serde_json::Value = client.get_json("products.json").await?;
//! ```

mod error;
mod source;

pub use error::FetchError;
pub use source::{DocumentSource, FsSource, HttpSource, MemorySource};

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for reading JSON documents from a source.
///
/// Cheap to clone; clones share the underlying source.
#[derive(Clone)]
pub struct FetchClient {
    source: Arc<dyn DocumentSource>,
}

impl FetchClient {
    /// Create a client over a source.
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Pick a source from a location string: `http://` and `https://`
    /// locations are fetched over the network, anything else is a directory.
    pub fn from_location(location: &str) -> Result<Self, FetchError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::new(HttpSource::new(location)?))
        } else {
            Ok(Self::new(FsSource::new(location)))
        }
    }

    /// Read a document and decode it as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, FetchError> {
        let location = self.source.locate(name);
        tracing::debug!(%location, "fetching document");

        let bytes = self.source.fetch(name).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::ParseError {
            location,
            message: e.to_string(),
        })
    }

    /// Human-readable location of a document.
    pub fn locate(&self, name: &str) -> String {
        self.source.locate(name)
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("source", &self.source.locate(""))
            .finish()
    }
}
