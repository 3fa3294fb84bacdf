/// Menu categories in display order; the first one starts active
pub const DEFAULT_CATEGORY_IDS: [&str; 5] = ["breakfast", "sandwiches", "salads", "bakery", "specials"];
/// Viewports narrower than this (px) pick categories from an overlay panel
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Active menu tab plus the small-screen category panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    categories: Vec<String>,
    active: String,
    viewport_width: u32,
    panel_open: bool,
}

impl CategorySelector {
    /// Selector over `categories`, starting on the first
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let active = categories.first().cloned().unwrap_or_default();
        Self { categories, active, viewport_width: 1024, panel_open: false }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width < MOBILE_BREAKPOINT_PX
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    /// Make `id` active. Unknown ids are ignored and return `false`.
    /// On small viewports a selection also closes the panel.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.categories.iter().any(|c| c == id) {
            return false;
        }
        self.active = id.to_string();
        if self.is_mobile() {
            self.panel_open = false;
        }
        true
    }
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_IDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_category() {
        assert_eq!(CategorySelector::default().active(), "breakfast");
    }

    #[test]
    fn selection_sets_active_directly() {
        let mut selector = CategorySelector::default();
        assert!(selector.select("bakery"));
        assert_eq!(selector.active(), "bakery");
        assert!(!selector.select("brunch"));
        assert_eq!(selector.active(), "bakery");
    }

    #[test]
    fn mobile_selection_closes_panel() {
        let mut selector = CategorySelector::default();
        selector.set_viewport_width(500);
        selector.open_panel();
        selector.select("salads");
        assert!(!selector.is_panel_open());
    }

    #[test]
    fn desktop_selection_leaves_panel_alone() {
        let mut selector = CategorySelector::default();
        selector.open_panel();
        selector.select("salads");
        assert!(selector.is_panel_open());
    }
}
