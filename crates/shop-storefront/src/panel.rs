//! Filter panel state: selections, option search boxes and "show more".

use shop_commerce::prelude::*;
use shop_commerce::search::DEFAULT_VISIBLE_OPTIONS;
use std::collections::BTreeMap;

/// Per-group control state that is not part of the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GroupControls {
    search: String,
    expanded: bool,
}

/// Everything the facet dropdowns display.
///
/// Options come from the facet index of the full catalog; the panel only
/// tracks what the shopper has ticked, typed or expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetPanel {
    index: FacetIndex,
    selection: FacetSelection,
    controls: BTreeMap<FacetKind, GroupControls>,
}

impl FacetPanel {
    pub fn new(index: FacetIndex) -> Self {
        Self {
            index,
            selection: FacetSelection::default(),
            controls: BTreeMap::new(),
        }
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut FacetSelection {
        &mut self.selection
    }

    pub fn set_selection(&mut self, selection: FacetSelection) {
        self.selection = selection;
    }

    /// Current text in a group's search box.
    pub fn search_text(&self, kind: FacetKind) -> &str {
        self.controls
            .get(&kind)
            .map(|c| c.search.as_str())
            .unwrap_or("")
    }

    pub fn set_search(&mut self, kind: FacetKind, text: impl Into<String>) {
        self.controls.entry(kind).or_default().search = text.into();
    }

    pub fn is_expanded(&self, kind: FacetKind) -> bool {
        self.controls.get(&kind).is_some_and(|c| c.expanded)
    }

    /// Flip the "show more" toggle. Returns the new state.
    pub fn toggle_expanded(&mut self, kind: FacetKind) -> bool {
        let controls = self.controls.entry(kind).or_default();
        controls.expanded = !controls.expanded;
        controls.expanded
    }

    /// Options currently shown for a group.
    ///
    /// A non-empty search shows every matching option; otherwise a collapsed
    /// group shows only the first few.
    pub fn visible_options(&self, kind: FacetKind) -> Vec<&FacetValue> {
        let values = self.index.group(kind).values();
        let term = self.search_text(kind).trim().to_lowercase();

        if !term.is_empty() {
            return values
                .iter()
                .filter(|v| v.label().to_lowercase().contains(&term))
                .collect();
        }

        let limit = if self.is_expanded(kind) {
            values.len()
        } else {
            DEFAULT_VISIBLE_OPTIONS
        };
        values.iter().take(limit).collect()
    }

    /// Whether the "show more" link is offered for a group.
    pub fn shows_more_link(&self, kind: FacetKind) -> bool {
        self.index.group(kind).has_more() && self.search_text(kind).trim().is_empty()
    }

    /// Clear selections and search boxes and collapse every group.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.controls.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(brands: &[&str]) -> Vec<EnrichedProduct> {
        brands
            .iter()
            .enumerate()
            .map(|(i, brand)| {
                let mut p = Product::new(i.to_string(), format!("SP{i}"), Vnd::new(100_000));
                p.brand = brand.to_string();
                p.category = "Nam".to_string();
                EnrichedProduct::undiscounted(p)
            })
            .collect()
    }

    fn panel() -> FacetPanel {
        let products = catalog(&["Dior", "Chanel", "Gucci", "Prada", "Versace", "Hermes", "Dolce"]);
        FacetPanel::new(FacetIndex::build(&products))
    }

    fn names(options: Vec<&FacetValue>) -> Vec<&str> {
        options.into_iter().map(|v| v.value.as_str()).collect()
    }

    #[test]
    fn test_collapsed_group_shows_five() {
        let panel = panel();
        assert_eq!(panel.visible_options(FacetKind::Brand).len(), 5);
        assert!(panel.shows_more_link(FacetKind::Brand));
        assert!(!panel.shows_more_link(FacetKind::Category));
    }

    #[test]
    fn test_expanded_group_shows_all() {
        let mut panel = panel();
        assert!(panel.toggle_expanded(FacetKind::Brand));
        assert_eq!(panel.visible_options(FacetKind::Brand).len(), 7);
        assert!(!panel.toggle_expanded(FacetKind::Brand));
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut panel = panel();
        panel.set_search(FacetKind::Brand, "D");
        assert_eq!(
            names(panel.visible_options(FacetKind::Brand)),
            vec!["Dior", "Prada", "Dolce"]
        );
        assert!(!panel.shows_more_link(FacetKind::Brand));
    }

    #[test]
    fn test_search_reaches_options_beyond_the_fold() {
        let mut panel = panel();
        panel.set_search(FacetKind::Brand, "herm");
        assert_eq!(names(panel.visible_options(FacetKind::Brand)), vec!["Hermes"]);
    }

    #[test]
    fn test_search_does_not_change_selection() {
        let mut panel = panel();
        panel.selection_mut().select(FacetKind::Brand, "Gucci");
        panel.set_search(FacetKind::Brand, "dior");
        assert!(panel.selection().is_selected(FacetKind::Brand, "Gucci"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut panel = panel();
        panel.selection_mut().select(FacetKind::Brand, "Dior");
        panel.set_search(FacetKind::Brand, "x");
        panel.toggle_expanded(FacetKind::Brand);

        panel.reset();

        assert!(panel.selection().is_empty());
        assert_eq!(panel.search_text(FacetKind::Brand), "");
        assert!(!panel.is_expanded(FacetKind::Brand));
        assert_eq!(panel.visible_options(FacetKind::Brand).len(), 5);
    }
}
