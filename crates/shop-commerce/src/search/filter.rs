//! Facet selection and the filter engine.

use crate::catalog::EnrichedProduct;
use crate::search::{FacetKind, PriceRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The options a shopper has ticked.
///
/// Values within a group are OR-ed, groups are AND-ed, and an empty group
/// places no constraint. At most one price range can be active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    #[serde(default)]
    pub brands: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub volumes: BTreeSet<String>,
    #[serde(default)]
    pub scents: BTreeSet<String>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection of one value.
    pub fn with(mut self, kind: FacetKind, value: impl Into<String>) -> Self {
        self.select(kind, value);
        self
    }

    /// Builder-style price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn values(&self, kind: FacetKind) -> &BTreeSet<String> {
        match kind {
            FacetKind::Brand => &self.brands,
            FacetKind::Category => &self.categories,
            FacetKind::Volume => &self.volumes,
            FacetKind::Scent => &self.scents,
        }
    }

    fn values_mut(&mut self, kind: FacetKind) -> &mut BTreeSet<String> {
        match kind {
            FacetKind::Brand => &mut self.brands,
            FacetKind::Category => &mut self.categories,
            FacetKind::Volume => &mut self.volumes,
            FacetKind::Scent => &mut self.scents,
        }
    }

    pub fn select(&mut self, kind: FacetKind, value: impl Into<String>) {
        self.values_mut(kind).insert(value.into());
    }

    pub fn deselect(&mut self, kind: FacetKind, value: &str) {
        self.values_mut(kind).remove(value);
    }

    /// Flip a checkbox. Returns whether the value is now selected.
    pub fn toggle(&mut self, kind: FacetKind, value: &str) -> bool {
        let values = self.values_mut(kind);
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    /// Choose a price range, replacing any previous one.
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    pub fn is_selected(&self, kind: FacetKind, value: &str) -> bool {
        self.values(kind).contains(value)
    }

    /// True when nothing constrains the view.
    pub fn is_empty(&self) -> bool {
        FacetKind::ALL.iter().all(|kind| self.values(*kind).is_empty())
            && self.price_range.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a product passes every active constraint.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        let groups_pass = FacetKind::ALL.iter().all(|kind| {
            let selected = self.values(*kind);
            selected.is_empty()
                || kind
                    .value_of(product)
                    .is_some_and(|value| selected.contains(value))
        });

        groups_pass
            && self
                .price_range
                .map_or(true, |range| range.contains(product.effective_price))
    }

    /// Products of `base` that pass, in base order.
    pub fn apply(&self, base: &[EnrichedProduct]) -> Vec<EnrichedProduct> {
        base.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
