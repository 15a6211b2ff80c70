//! Commerce error types.

use thiserror::Error;

/// Errors from catalog and cart rules.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommerceError {
    /// No cart entry for this product id.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Quantities start at one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Not one of the fixed price ranges.
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(usize),
}
