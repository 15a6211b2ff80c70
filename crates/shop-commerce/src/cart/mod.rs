//! Shopping cart module.
//!
//! The cart is a flat list of items keyed by product id, persisted as a JSON
//! array.

mod cart;

pub use cart::{AddOutcome, CartItem, CartList};
