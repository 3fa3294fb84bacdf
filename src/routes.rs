/// A dedicated route bound to one fixed page document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoute {
    pub path: &'static str,
    pub storage_key: &'static str,
}

pub const HOME_ROUTE: FixedRoute = FixedRoute { path: "/", storage_key: "home.mdx" };

/// Dedicated page routes; anything else goes through the catch-all
pub const FIXED_ROUTES: [FixedRoute; 6] = [
    HOME_ROUTE,
    FixedRoute { path: "/about", storage_key: "about.mdx" },
    FixedRoute { path: "/menu", storage_key: "offerings.mdx" },
    FixedRoute { path: "/location", storage_key: "location.mdx" },
    FixedRoute { path: "/contact", storage_key: "contact.mdx" },
    FixedRoute { path: "/reviews", storage_key: "reviews.mdx" },
];

/// Relative path of the global settings singleton
pub const GLOBAL_SETTINGS_KEY: &str = "index.json";

/// The dedicated route serving `path`, if any
pub fn fixed_route(path: &str) -> Option<&'static FixedRoute> {
    FIXED_ROUTES.iter().find(|route| route.path == path)
}

/// Cache header letting an external cache serve a page for `revalidate_secs`
/// and refresh it in the background afterwards
pub fn cache_control(revalidate_secs: u64) -> String {
    format!("public, s-maxage={}, stale-while-revalidate", revalidate_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_route_reads_offerings() {
        assert_eq!(fixed_route("/menu").map(|r| r.storage_key), Some("offerings.mdx"));
        assert_eq!(fixed_route("/").map(|r| r.storage_key), Some("home.mdx"));
        assert!(fixed_route("/catering").is_none());
    }

    #[test]
    fn cache_header_carries_window() {
        assert_eq!(cache_control(300), "public, s-maxage=300, stale-while-revalidate");
    }
}
