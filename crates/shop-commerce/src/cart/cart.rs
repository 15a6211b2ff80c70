//! Cart list and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Vnd;
use serde::{Deserialize, Serialize};

/// One line of the persisted cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Base catalog price at the time the item was first added.
    pub price: Vnd,
    pub image: String,
    pub quantity: u32,
    #[serde(default)]
    pub brand: String,
}

impl CartItem {
    /// Build a new entry from a catalog product.
    ///
    /// Always records the base price (`gia`), never a discounted one.
    pub fn from_product(product: &Product, quantity: u32, image_prefix: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: format!("{}{}", image_prefix, product.image),
            quantity,
            brand: product.brand.clone(),
        }
    }

    /// Line total, `None` on overflow.
    pub fn total(&self) -> Option<Vnd> {
        self.price.try_multiply(self.quantity)
    }
}

/// What [`CartList::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum AddOutcome {
    /// A new entry was appended.
    Added,
    /// An existing entry's quantity was raised to `quantity`.
    QuantityUpdated { quantity: u32 },
}

impl AddOutcome {
    /// Notification shown to the shopper.
    pub fn message(&self, product_name: &str) -> String {
        match self {
            AddOutcome::Added => format!("Đã thêm {} vào giỏ hàng!", product_name),
            AddOutcome::QuantityUpdated { .. } => format!(
                "Đã cập nhật số lượng sản phẩm {} trong giỏ hàng!",
                product_name
            ),
        }
    }
}

/// The persisted cart: at most one item per product id, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartList {
    items: Vec<CartItem>,
}

impl CartList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the product, or raise the quantity of its existing entry.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        image_prefix: &str,
    ) -> Result<AddOutcome, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(AddOutcome::QuantityUpdated {
                quantity: existing.quantity,
            });
        }

        self.items
            .push(CartItem::from_product(product, quantity, image_prefix));
        Ok(AddOutcome::Added)
    }

    /// Remove the entry for a product id.
    pub fn remove(&mut self, id: &ProductId) -> Result<CartItem, CommerceError> {
        let position = self
            .items
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals at base price.
    pub fn subtotal(&self) -> Result<Vnd, CommerceError> {
        self.items.iter().try_fold(Vnd::zero(), |acc, item| {
            let line = item.total().ok_or(CommerceError::Overflow)?;
            acc.amount()
                .checked_add(line.amount())
                .map(Vnd::new)
                .ok_or(CommerceError::Overflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        let mut p = Product::new(id, format!("SP{id}"), Vnd::new(price));
        p.name = format!("Product {id}");
        p.brand = "Dior".to_string();
        p.image = format!("img/{id}.jpg");
        p
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = CartList::new();
        let outcome = cart.add(&product("1", 100_000), 1, "../").unwrap();
        assert_eq!(outcome, AddOutcome::Added);

        let item = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(item.name, "Product 1");
        assert_eq!(item.price, Vnd::new(100_000));
        assert_eq!(item.image, "../img/1.jpg");
        assert_eq!(item.brand, "Dior");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_re_adding_increments_quantity() {
        let mut cart = CartList::new();
        let p = product("1", 100_000);
        cart.add(&p, 1, "").unwrap();
        let outcome = cart.add(&p, 2, "").unwrap();

        assert_eq!(outcome, AddOutcome::QuantityUpdated { quantity: 3 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = CartList::new();
        let result = cart.add(&product("1", 100_000), 0, "");
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = CartList::new();
        let p = product("1", 1);
        cart.add(&p, u32::MAX, "").unwrap();
        assert!(matches!(cart.add(&p, 1, ""), Err(CommerceError::Overflow)));
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_item_count_and_subtotal() {
        let mut cart = CartList::new();
        cart.add(&product("1", 100_000), 2, "").unwrap();
        cart.add(&product("2", 50_000), 3, "").unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal().unwrap(), Vnd::new(350_000));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartList::new();
        cart.add(&product("1", 100_000), 1, "").unwrap();
        cart.add(&product("2", 100_000), 1, "").unwrap();

        let removed = cart.remove(&ProductId::new("1")).unwrap();
        assert_eq!(removed.id.as_str(), "1");
        assert!(matches!(
            cart.remove(&ProductId::new("1")),
            Err(CommerceError::ItemNotInCart(_))
        ));

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_reads_cart_written_with_numeric_ids() {
        let json = r#"[{"id": 4, "name": "X", "price": 120000, "image": "../img/x.jpg", "quantity": 2, "brand": "Gucci"}]"#;
        let cart: CartList = serde_json::from_str(json).unwrap();
        assert_eq!(cart.get(&ProductId::new("4")).unwrap().quantity, 2);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(AddOutcome::Added.message("X"), "Đã thêm X vào giỏ hàng!");
        assert_eq!(
            AddOutcome::QuantityUpdated { quantity: 2 }.message("X"),
            "Đã cập nhật số lượng sản phẩm X trong giỏ hàng!"
        );
    }
}
