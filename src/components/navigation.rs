use log::debug;

use crate::interaction::{MobileNav, NavHighlighter};
use crate::utils::escape_html;

/// Site-wide page links shown in the header
pub const HEADER_LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/menu", "Menu"),
    ("/location", "Location"),
    ("/contact", "Contact"),
    ("/reviews", "Reviews"),
];

/// In-page anchors for the section navigation bar
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("location", "Location"),
    ("contact", "Contact"),
];

/// Component for the header links and the in-page section bar
pub struct NavigationComponent;

impl NavigationComponent {
    pub fn new() -> Self {
        Self
    }

    /// Header links; the one matching `current_path` is marked current
    pub fn header_links(&self, current_path: &str) -> String {
        let current = format!("/{}", current_path.trim_matches('/'));
        let mut html = String::from("<nav class=\"header-nav\"><ul>");
        for (href, label) in HEADER_LINKS {
            let class = if href == current { " class=\"current\"" } else { "" };
            html.push_str(&format!("<li{}><a href=\"{}\">{}</a></li>", class, href, label));
        }
        html.push_str("</ul></nav>");
        html
    }

    /// Section bar in the state the highlighter and drawer start in
    pub fn section_bar(&self) -> String {
        self.section_bar_with(&NavHighlighter::default(), &MobileNav::default())
    }

    pub fn section_bar_with(&self, highlighter: &NavHighlighter, drawer: &MobileNav) -> String {
        debug!("Building section bar, active section '{}'", highlighter.active());
        let header_class = if highlighter.is_scrolled() { "navbar scrolled" } else { "navbar" };
        let mut html = format!("<header class=\"{}\"><div class=\"container\">", header_class);
        html.push_str("<a href=\"#home\" class=\"navbar-logo\" aria-label=\"Cochi's Kitchen\"><img src=\"/images/cochis_kitchen_logo.svg\" alt=\"Cochi's Kitchen Logo\"></a>");
        html.push_str(&self.section_links("navbar-links", highlighter));
        html.push_str(&format!(
            "<button class=\"navbar-toggle\" aria-expanded=\"{}\" aria-label=\"{}\"></button>",
            drawer.is_open(),
            if drawer.is_open() { "Close menu" } else { "Open menu" }
        ));
        html.push_str("</div></header>");
        if drawer.is_open() {
            html.push_str("<div class=\"mobile-nav\">");
            html.push_str(&self.section_links("mobile-nav-links", highlighter));
            html.push_str("</div>");
        }
        html
    }

    fn section_links(&self, class: &str, highlighter: &NavHighlighter) -> String {
        let mut html = format!("<nav class=\"{}\">", class);
        for (id, label) in SECTION_LINKS {
            let active = if id == highlighter.active() { " active" } else { "" };
            html.push_str(&format!(
                "<a href=\"#{}\" class=\"nav-link{}\">{}</a>",
                id,
                active,
                escape_html(label)
            ));
        }
        html.push_str("</nav>");
        html
    }
}

impl Default for NavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}
