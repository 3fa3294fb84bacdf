/// Section shown as active before any scroll event
pub const INITIAL_SECTION: &str = "home";
/// A section counts as reached once its top is at or above this offset (px)
pub const ACTIVE_OFFSET_THRESHOLD: f64 = 100.0;
/// Scroll distance after which the header switches to its compact style (px)
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Position of one identified page section relative to the viewport top
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: &str, top: f64) -> Self {
        Self { id: id.to_string(), top }
    }
}

/// Tracks which section the navigation bar highlights
#[derive(Debug, Clone, PartialEq)]
pub struct NavHighlighter {
    active: String,
    scrolled: bool,
}

impl NavHighlighter {
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Handle a scroll event. `sections` must be in document order.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionOffset]) -> &str {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        self.recompute(sections)
    }

    /// Pick the last section in document order whose top is within the threshold.
    /// Starts from [`INITIAL_SECTION`] on every pass, not from the previous answer.
    pub fn recompute(&mut self, sections: &[SectionOffset]) -> &str {
        let mut current = INITIAL_SECTION;
        for section in sections.iter().filter(|s| !s.id.is_empty()) {
            if section.top <= ACTIVE_OFFSET_THRESHOLD {
                current = &section.id;
            }
        }
        self.active = current.to_string();
        &self.active
    }
}

impl Default for NavHighlighter {
    fn default() -> Self {
        Self { active: INITIAL_SECTION.to_string(), scrolled: false }
    }
}

/// Open/closed state of the small-screen navigation drawer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link closes the drawer
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(offsets: &[(&str, f64)]) -> Vec<SectionOffset> {
        offsets.iter().map(|(id, top)| SectionOffset::new(id, *top)).collect()
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(NavHighlighter::default().active(), "home");
    }

    #[test]
    fn only_sections_within_threshold_qualify() {
        let mut nav = NavHighlighter::default();
        let active = nav.recompute(&sections(&[("home", -50.0), ("menu", 120.0), ("about", 400.0)]));
        assert_eq!(active, "home");
    }

    #[test]
    fn last_qualifying_section_wins() {
        let mut nav = NavHighlighter::default();
        nav.recompute(&sections(&[("home", -900.0), ("menu", -300.0), ("about", 100.0), ("location", 101.0)]));
        assert_eq!(nav.active(), "about");
    }

    #[test]
    fn document_order_beats_proximity() {
        // out-of-order offsets still resolve to the later section
        let mut nav = NavHighlighter::default();
        nav.recompute(&sections(&[("menu", 90.0), ("about", -2000.0)]));
        assert_eq!(nav.active(), "about");
    }

    #[test]
    fn falls_back_to_home_when_nothing_is_reached() {
        let mut nav = NavHighlighter::default();
        nav.recompute(&sections(&[("menu", -10.0)]));
        nav.recompute(&sections(&[("menu", 500.0)]));
        assert_eq!(nav.active(), "home");
    }

    #[test]
    fn scroll_sets_compact_header() {
        let mut nav = NavHighlighter::default();
        nav.on_scroll(11.0, &[]);
        assert!(nav.is_scrolled());
        nav.on_scroll(10.0, &[]);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn mobile_nav_toggles_and_closes() {
        let mut nav = MobileNav::default();
        nav.toggle();
        assert!(nav.is_open());
        nav.close();
        assert!(!nav.is_open());
        nav.toggle();
        nav.toggle();
        assert!(!nav.is_open());
    }
}
