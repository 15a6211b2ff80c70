//! Fixed VND price ranges.

use crate::catalog::EnrichedProduct;
use crate::error::CommerceError;
use crate::money::Vnd;
use serde::{Deserialize, Serialize};

/// A half-open price range `[min, max)`; `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Vnd,
    pub max: Option<Vnd>,
}

/// The nine ranges offered by the storefront, ascending.
pub const PRICE_RANGES: [PriceRange; 9] = [
    PriceRange::bounded(0, 200_000),
    PriceRange::bounded(200_000, 300_000),
    PriceRange::bounded(300_000, 400_000),
    PriceRange::bounded(400_000, 500_000),
    PriceRange::bounded(500_000, 700_000),
    PriceRange::bounded(700_000, 1_000_000),
    PriceRange::bounded(1_000_000, 1_500_000),
    PriceRange::bounded(1_500_000, 2_000_000),
    PriceRange::at_least(2_000_000),
];

impl PriceRange {
    /// `[min, max)`.
    pub const fn bounded(min: i64, max: i64) -> Self {
        Self {
            min: Vnd::new(min),
            max: Some(Vnd::new(max)),
        }
    }

    /// `[min, ∞)`.
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Vnd::new(min),
            max: None,
        }
    }

    /// Look up one of the fixed ranges by position.
    pub fn by_index(index: usize) -> Result<Self, CommerceError> {
        PRICE_RANGES
            .get(index)
            .copied()
            .ok_or(CommerceError::UnknownPriceRange(index))
    }

    /// Position of this range among the fixed ranges, if it is one of them.
    pub fn index(&self) -> Option<usize> {
        PRICE_RANGES.iter().position(|r| r == self)
    }

    pub fn contains(&self, price: Vnd) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }

    /// Label shown next to the radio button.
    pub fn label(&self) -> String {
        match self.max {
            None => format!("Trên {}", self.min.label()),
            Some(max) if self.min == Vnd::zero() => format!("Dưới {}", max.label()),
            Some(max) => format!("{} - {}", self.min.label(), max.label()),
        }
    }

    /// Ranges that contain at least one product's effective price, with counts.
    pub fn available(products: &[EnrichedProduct]) -> Vec<PriceRangeOption> {
        PRICE_RANGES
            .iter()
            .enumerate()
            .filter_map(|(index, range)| {
                let count = products
                    .iter()
                    .filter(|p| range.contains(p.effective_price))
                    .count();
                (count > 0).then_some(PriceRangeOption {
                    index,
                    range: *range,
                    count,
                })
            })
            .collect()
    }
}

/// A price range offered as a filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeOption {
    /// Position among [`PRICE_RANGES`].
    pub index: usize,
    pub range: PriceRange,
    /// Products of the base list whose effective price falls in the range.
    pub count: usize,
}
