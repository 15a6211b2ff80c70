//! Facet index built from the unfiltered catalog.

use crate::catalog::EnrichedProduct;
use crate::search::{PriceRange, PriceRangeOption};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options shown per group before the "show more" toggle.
pub const DEFAULT_VISIBLE_OPTIONS: usize = 5;

/// A multi-select facet group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Brand,
    Category,
    Volume,
    Scent,
}

impl FacetKind {
    /// All groups in display order.
    pub const ALL: [FacetKind; 4] = [
        FacetKind::Brand,
        FacetKind::Category,
        FacetKind::Volume,
        FacetKind::Scent,
    ];

    /// Stable key used in markup and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            FacetKind::Brand => "brand",
            FacetKind::Category => "category",
            FacetKind::Volume => "volume",
            FacetKind::Scent => "scent",
        }
    }

    /// Group heading.
    pub fn title(&self) -> &'static str {
        match self {
            FacetKind::Brand => "Thương hiệu",
            FacetKind::Category => "Danh mục",
            FacetKind::Volume => "Dung tích",
            FacetKind::Scent => "Mùi hương",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "brand" => Some(FacetKind::Brand),
            "category" => Some(FacetKind::Category),
            "volume" => Some(FacetKind::Volume),
            "scent" => Some(FacetKind::Scent),
            _ => None,
        }
    }

    /// The product's value for this facet, if it has one.
    pub fn value_of<'a>(&self, product: &'a EnrichedProduct) -> Option<&'a str> {
        let product = &product.product;
        let value = match self {
            FacetKind::Brand => Some(product.brand.as_str()),
            FacetKind::Category => Some(product.category.as_str()),
            FacetKind::Volume => product.volume(),
            FacetKind::Scent => product.scent(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// A facet option with the number of catalog products carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

impl FacetValue {
    /// Text shown for the option, e.g. "Chanel (4)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.value, self.count)
    }
}

/// Distinct values of one facet, in first-seen catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub kind: FacetKind,
    values: Vec<FacetValue>,
}

impl FacetGroup {
    fn build(kind: FacetKind, products: &[EnrichedProduct]) -> Self {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for product in products {
            if let Some(value) = kind.value_of(product) {
                *counts.entry(value).or_insert(0) += 1;
            }
        }

        Self {
            kind,
            values: counts
                .into_iter()
                .map(|(value, count)| FacetValue {
                    value: value.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub fn values(&self) -> &[FacetValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A group with no values is not rendered at all.
    pub fn is_visible(&self) -> bool {
        !self.values.is_empty()
    }

    /// Whether the group needs a "show more" toggle.
    pub fn has_more(&self) -> bool {
        self.values.len() > DEFAULT_VISIBLE_OPTIONS
    }

    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.count)
    }
}

/// Every filter option the storefront can offer.
///
/// Always built from the full catalog so that choosing one option never hides
/// the others, and counts describe the catalog rather than the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetIndex {
    pub brands: FacetGroup,
    pub categories: FacetGroup,
    pub volumes: FacetGroup,
    pub scents: FacetGroup,
    pub price_ranges: Vec<PriceRangeOption>,
}

impl FacetIndex {
    pub fn build(products: &[EnrichedProduct]) -> Self {
        Self {
            brands: FacetGroup::build(FacetKind::Brand, products),
            categories: FacetGroup::build(FacetKind::Category, products),
            volumes: FacetGroup::build(FacetKind::Volume, products),
            scents: FacetGroup::build(FacetKind::Scent, products),
            price_ranges: PriceRange::available(products),
        }
    }

    pub fn group(&self, kind: FacetKind) -> &FacetGroup {
        match kind {
            FacetKind::Brand => &self.brands,
            FacetKind::Category => &self.categories,
            FacetKind::Volume => &self.volumes,
            FacetKind::Scent => &self.scents,
        }
    }

    /// Groups that should be rendered, in display order.
    pub fn visible_groups(&self) -> impl Iterator<Item = &FacetGroup> {
        FacetKind::ALL
            .into_iter()
            .map(move |kind| self.group(kind))
            .filter(|group| group.is_visible())
    }
}
