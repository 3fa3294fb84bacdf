use serde::{Deserialize, Serialize};

use super::rich_text::RichText;

/// Named group of documents sharing a field schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Page,
    Global,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Page => "page",
            Collection::Global => "global",
        }
    }

    /// Directory under the content root holding this collection's files
    pub fn directory(&self) -> &'static str {
        match self {
            Collection::Page => "pages",
            Collection::Global => "global",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Collection::Page => "mdx",
            Collection::Global => "json",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage metadata derived from where a document lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub filename: String,
    pub basename: String,
    pub breadcrumbs: Vec<String>,
    pub path: String,
    pub relative_path: String,
    pub extension: String,
}

impl SystemInfo {
    /// Derive storage metadata from a collection-relative path such as `events/catering.mdx`
    pub fn from_relative_path(collection: Collection, relative_path: &str) -> Self {
        let basename = relative_path.rsplit('/').next().unwrap_or(relative_path).to_string();
        let (stem, extension) = match relative_path.rsplit_once('.') {
            Some((stem, ext)) if !ext.contains('/') => (stem, format!(".{}", ext)),
            _ => (relative_path, String::new()),
        };
        let breadcrumbs: Vec<String> = stem
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let filename = breadcrumbs.last().cloned().unwrap_or_default();

        Self {
            filename,
            basename,
            breadcrumbs,
            path: format!("content/{}/{}", collection.directory(), relative_path),
            relative_path: relative_path.to_string(),
            extension,
        }
    }
}

/// A document returned by the content client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Page(Page),
    Global(GlobalSettings),
}

impl Document {
    pub fn collection(&self) -> Collection {
        match self {
            Document::Page(_) => Collection::Page,
            Document::Global(_) => Collection::Global,
        }
    }

    pub fn sys(&self) -> &SystemInfo {
        match self {
            Document::Page(page) => &page.sys,
            Document::Global(global) => &global.sys,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Document::Page(page) => Some(page),
            Document::Global(_) => None,
        }
    }

    pub fn as_global(&self) -> Option<&GlobalSettings> {
        match self {
            Document::Global(global) => Some(global),
            Document::Page(_) => None,
        }
    }
}

/// A page document and its optional section field sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    #[serde(rename = "_sys")]
    pub sys: SystemInfo,
    pub title: Option<String>,
    pub seo_description: Option<String>,
    pub top_bar: Option<TopBarSection>,
    pub hero: Option<HeroSection>,
    pub about: Option<AboutSection>,
    pub menu: Option<MenuSection>,
    pub reviews: Option<ReviewsSection>,
    pub location: Option<LocationSection>,
    pub contact: Option<ContactSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopBarSection {
    pub call_to_action: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub images: Vec<String>,
    pub tagline: Option<String>,
    pub menu_button_text: Option<String>,
    pub find_us_button_text: Option<String>,
    pub cta_buttons: Vec<CtaButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub text: Option<String>,
    pub url: Option<String>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub content: Option<RichText>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub philosophy_title: Option<String>,
    pub philosophy_text: Option<String>,
    pub caption_name: Option<String>,
    pub caption_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuSection {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub categories: Vec<MenuCategory>,
    pub footer_text: Option<String>,
    pub specials_url: Option<String>,
    pub specials_link_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewsSection {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub yelp_url: Option<String>,
    pub yelp_link_text: Option<String>,
    pub facebook_url: Option<String>,
    pub facebook_link_text: Option<String>,
    pub call_to_action: Option<String>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    #[default]
    Yelp,
    Facebook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: Option<String>,
    pub rating: u8,
    pub source: ReviewSource,
    pub text: Option<String>,
    pub date: Option<String>,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self { name: None, rating: 5, source: ReviewSource::default(), text: None, date: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationSection {
    pub section_label: Option<String>,
    pub section_title: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub weekday_hours: Option<String>,
    pub weekend_hours: Option<String>,
    pub parking_info: Option<String>,
    pub contact_phone: Option<String>,
    pub map_embed_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub catering_title: Option<String>,
    pub catering_bullets: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Site-wide singleton settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    #[serde(rename = "_sys")]
    pub sys: SystemInfo,
    pub site_name: Option<String>,
    pub header_phone_number: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub footer_text: Option<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_info_for_nested_page() {
        let sys = SystemInfo::from_relative_path(Collection::Page, "events/catering.mdx");
        assert_eq!(sys.breadcrumbs, vec!["events", "catering"]);
        assert_eq!(sys.filename, "catering");
        assert_eq!(sys.basename, "catering.mdx");
        assert_eq!(sys.extension, ".mdx");
        assert_eq!(sys.path, "content/pages/events/catering.mdx");
    }

    #[test]
    fn sys_info_for_home() {
        let sys = SystemInfo::from_relative_path(Collection::Page, "home.mdx");
        assert_eq!(sys.breadcrumbs, vec!["home"]);
    }

    #[test]
    fn page_fields_are_camel_case_and_optional() {
        let page: Page = serde_json::from_value(serde_json::json!({
            "title": "Visit",
            "location": { "addressLine1": "435 Vineyard Blvd", "contactPhone": "(408) 555-0100" }
        }))
        .unwrap();
        let location = page.location.unwrap();
        assert_eq!(location.address_line1.as_deref(), Some("435 Vineyard Blvd"));
        assert!(location.address_line2.is_none());
        assert!(page.hero.is_none());
    }

    #[test]
    fn testimonial_rating_defaults_to_five() {
        let t: Testimonial = serde_json::from_value(serde_json::json!({ "name": "Sarah M." })).unwrap();
        assert_eq!(t.rating, 5);
        assert_eq!(t.source, ReviewSource::Yelp);
    }
}
