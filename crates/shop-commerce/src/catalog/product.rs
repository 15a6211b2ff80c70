//! Product types.

use crate::catalog::AppliedDiscount;
use crate::ids::{ProductCode, ProductId};
use crate::money::Vnd;
use serde::{Deserialize, Serialize};

/// Free-form product attributes (`thuocTinh`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductAttributes {
    /// Bottle volume (`dungTich`), e.g. "100ml".
    #[serde(rename = "dungTich", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Scent family (`huongThom`).
    #[serde(rename = "huongThom", default, skip_serializing_if = "Option::is_none")]
    pub scent: Option<String>,
}

/// A product as published in the catalog document.
///
/// Field names on the wire follow the catalog files; unknown fields are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Product code discounts are keyed by.
    #[serde(rename = "maSanPham")]
    pub code: ProductCode,
    /// Display name.
    #[serde(rename = "tenSanPham", default)]
    pub name: String,
    /// Brand name.
    #[serde(rename = "tenThuongHieu", default)]
    pub brand: String,
    /// Category name.
    #[serde(rename = "tenDanhMuc", default)]
    pub category: String,
    /// Base price.
    #[serde(rename = "gia")]
    pub price: Vnd,
    /// Image path relative to the site root.
    #[serde(rename = "hinhAnh", default)]
    pub image: String,
    /// Units sold, used for best-seller ordering.
    #[serde(rename = "soLuongBan", default)]
    pub units_sold: u64,
    /// Optional attributes.
    #[serde(rename = "thuocTinh", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ProductAttributes>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(id: impl Into<ProductId>, code: impl Into<ProductCode>, price: Vnd) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            price,
            image: String::new(),
            units_sold: 0,
            attributes: None,
        }
    }

    pub fn volume(&self) -> Option<&str> {
        self.attributes.as_ref().and_then(|a| a.volume.as_deref())
    }

    pub fn scent(&self) -> Option<&str> {
        self.attributes.as_ref().and_then(|a| a.scent.as_deref())
    }
}

/// A product with its effective price resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Price used for display and price-range filtering.
    #[serde(rename = "giaSauGiam")]
    pub effective_price: Vnd,
    /// Present only while a discount applies.
    #[serde(rename = "giamGia", default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<AppliedDiscount>,
}

impl EnrichedProduct {
    /// Wrap a product that has no active discount.
    pub fn undiscounted(product: Product) -> Self {
        let effective_price = product.price;
        Self {
            product,
            effective_price,
            discount: None,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Check if a discount currently applies.
    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some()
    }
}

/// Order by units sold, best sellers first.
///
/// The sort is stable: products with equal sales keep their catalog order.
pub fn sort_best_sellers(products: &mut [EnrichedProduct]) {
    products.sort_by(|a, b| b.product.units_sold.cmp(&a.product.units_sold));
}
