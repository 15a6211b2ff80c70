//! Cart persisted in client storage.

use shop_cache::{Cache, CacheError};
use shop_commerce::cart::CartList;

/// Key holding the JSON cart array.
pub const CART_KEY: &str = "cart";

/// Reads and writes the cart list under [`CART_KEY`].
#[derive(Debug, Clone, Copy)]
pub struct CartStore<'a> {
    cache: &'a Cache,
}

impl<'a> CartStore<'a> {
    pub fn new(cache: &'a Cache) -> Self {
        Self { cache }
    }

    /// Load the cart; a missing or `null` entry is an empty cart.
    pub fn load(&self) -> Result<CartList, CacheError> {
        Ok(self.cache.get::<CartList>(CART_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, cart: &CartList) -> Result<(), CacheError> {
        self.cache.set(CART_KEY, cart)
    }

    /// Load, mutate and save in one step.
    pub fn update<T, E>(&self, f: impl FnOnce(&mut CartList) -> Result<T, E>) -> Result<T, E>
    where
        E: From<CacheError>,
    {
        let mut cart = self.load()?;
        let result = f(&mut cart)?;
        self.save(&cart)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::prelude::*;

    #[test]
    fn test_missing_cart_is_empty() {
        let cache = Cache::in_memory();
        assert!(CartStore::new(&cache).load().unwrap().is_empty());
    }

    #[test]
    fn test_update_persists() {
        let cache = Cache::in_memory();
        let store = CartStore::new(&cache);
        let product = Product::new("1", "A", Vnd::new(100_000));

        let outcome = store
            .update(|cart| cart.add(&product, 2, "").map_err(crate::StorefrontError::from))
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.load().unwrap().item_count(), 2);
    }

    #[test]
    fn test_failed_update_does_not_save() {
        let cache = Cache::in_memory();
        let store = CartStore::new(&cache);
        let product = Product::new("1", "A", Vnd::new(100_000));

        let result = store.update(|cart| {
            cart.add(&product, 0, "").map_err(crate::StorefrontError::from)
        });
        assert!(result.is_err());
        assert!(!cache.exists(CART_KEY).unwrap());
    }
}
