//! Typed JSON key-value storage for the storefront's client state.
//!
//! Mirrors the browser's local storage: string values under string keys,
//! JSON-encoded by the caller-facing [`Cache`]. Two backends are provided,
//! an in-memory map and a single JSON file.
//!
//! # Example
//!
//! ```rust
//! use shop_cache::{Cache, Session};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Item {
//!     id: String,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::in_memory();
//!
//! cache.set("cart", &vec![Item { id: "1".into(), quantity: 2 }]).unwrap();
//! let cart: Option<Vec<Item>> = cache.get("cart").unwrap();
//! assert_eq!(cart.unwrap()[0].quantity, 2);
//!
//! let session = Session::new(&cache);
//! assert!(!session.is_logged_in().unwrap());
//! ```

mod error;
mod kv;
mod session;

pub use error::CacheError;
pub use kv::{Cache, FileStore, MemoryStore, Store};
pub use session::{is_truthy, Session, USER_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, Session, Store};
}
