//! Search module.
//!
//! Contains the facet index, the fixed price ranges and the filter engine.

mod facets;
mod filter;
mod price_range;

pub use facets::{FacetGroup, FacetIndex, FacetKind, FacetValue, DEFAULT_VISIBLE_OPTIONS};
pub use filter::FacetSelection;
pub use price_range::{PriceRange, PriceRangeOption, PRICE_RANGES};
