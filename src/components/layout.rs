use log::debug;

use super::navigation::NavigationComponent;
use super::page::PageComponent;
use crate::errors::SiteError;
use crate::services::{BoundPage, MarkdownService};
use crate::types::{GlobalSettings, ShellContext, SocialLink};
use crate::utils::{escape_attr, escape_html};

pub const DEFAULT_SITE_NAME: &str = "Default Site Name";
pub const DEFAULT_FOOTER_TEXT: &str = "Default Footer Text";
pub const SOCIAL_PLATFORMS: [&str; 6] = ["facebook", "twitter", "instagram", "linkedin", "github", "youtube"];

/// Header and footer chrome around one bound page.
///
/// Holds the request's global settings and hands them to the header and
/// footer directly; nothing below the shell looks them up on its own.
pub struct LayoutShell<'a> {
    settings: &'a GlobalSettings,
    page: &'a BoundPage,
}

impl<'a> LayoutShell<'a> {
    pub fn new(settings: &'a GlobalSettings, page: &'a BoundPage) -> Self {
        Self { settings, page }
    }

    pub fn site_name(&self) -> &str {
        self.settings
            .site_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_SITE_NAME)
    }

    /// Page title, else the site name
    pub fn title(&self) -> &str {
        self.page
            .page()
            .and_then(|page| page.title.as_deref())
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| self.site_name())
    }

    pub fn description(&self) -> &str {
        self.page
            .page()
            .and_then(|page| page.seo_description.as_deref())
            .unwrap_or("")
    }

    pub fn header(&self, current_path: &str) -> String {
        let mut html = String::from("<div class=\"site-header\"><div class=\"container\">");
        html.push_str(&format!(
            "<h4 class=\"site-name\"><a href=\"/\">{}</a></h4>",
            escape_html(self.site_name())
        ));
        html.push_str(&NavigationComponent::new().header_links(current_path));
        html.push_str("</div></div>");
        html
    }

    pub fn footer(&self) -> String {
        let mut html = String::from("<footer class=\"site-footer\"><div class=\"container\">");
        html.push_str(&format!("<a href=\"/\" class=\"site-name\">{}</a>", escape_html(self.site_name())));

        let links: Vec<(String, &str)> = self.settings.social_links.iter().filter_map(social_link).collect();
        if !links.is_empty() {
            html.push_str("<div class=\"social-links\">");
            for (platform, url) in links {
                html.push_str(&format!(
                    "<a href=\"{}\" class=\"social {}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\"></a>",
                    escape_attr(url),
                    platform,
                    platform
                ));
            }
            html.push_str("</div>");
        }

        if let Some(footer_text) = &self.settings.footer_text {
            let text = MarkdownService::first_paragraph_text(footer_text)
                .unwrap_or_else(|| DEFAULT_FOOTER_TEXT.to_string());
            html.push_str(&format!("<div class=\"footer-text\">{}</div>", escape_html(&text)));
        }
        html.push_str("</div></footer>");
        html
    }

    /// Everything the HTML shell needs for this request
    pub fn render(&self, current_path: &str, markdown: &MarkdownService) -> Result<ShellContext, SiteError> {
        debug!("Rendering layout for '{}'", current_path);
        let mut body = self.header(current_path);
        body.push_str("<main>");
        if let Some(page) = self.page.page() {
            body.push_str(&PageComponent::new(markdown).render(page));
        }
        body.push_str("</main>");
        body.push_str(&self.footer());

        Ok(ShellContext {
            title: self.title().to_string(),
            description: self.description().to_string(),
            body,
            query_json: self.page.query.to_json()?,
        })
    }
}

/// Lowercased platform and url for links to a known platform with both fields set
fn social_link(link: &SocialLink) -> Option<(String, &str)> {
    let platform = link.platform.as_deref().filter(|p| !p.is_empty())?.to_lowercase();
    let url = link.url.as_deref().filter(|u| !u.is_empty())?;
    SOCIAL_PLATFORMS.contains(&platform.as_str()).then_some((platform, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::QueryDescriptor;
    use crate::types::{Collection, Document, Page, RichText, RichTextNode, SystemInfo};

    fn bound(title: Option<&str>) -> BoundPage {
        let page = Page {
            sys: SystemInfo::from_relative_path(Collection::Page, "about.mdx"),
            title: title.map(str::to_string),
            ..Page::default()
        };
        BoundPage {
            document: Document::Page(page),
            query: QueryDescriptor::for_document(Collection::Page, "about.mdx"),
        }
    }

    #[test]
    fn defaults_when_settings_are_empty() {
        let settings = GlobalSettings::default();
        let page = bound(None);
        let shell = LayoutShell::new(&settings, &page);
        assert_eq!(shell.site_name(), "Default Site Name");
        assert_eq!(shell.title(), "Default Site Name");
        assert!(!shell.footer().contains("footer-text"));
        assert!(!shell.footer().contains("social-links"));
    }

    #[test]
    fn footer_text_uses_first_paragraph_or_default() {
        let tree = RichTextNode::element("root", vec![RichTextNode::element("p", vec![RichTextNode::text("Made in Morgan Hill")])]);
        let mut settings = GlobalSettings { footer_text: Some(RichText::Tree(tree)), ..GlobalSettings::default() };
        let page = bound(Some("About"));
        assert!(LayoutShell::new(&settings, &page).footer().contains("Made in Morgan Hill"));

        settings.footer_text = Some(RichText::Tree(RichTextNode::element("root", vec![RichTextNode::element("h1", vec![])])));
        assert!(LayoutShell::new(&settings, &page).footer().contains("Default Footer Text"));
    }

    #[test]
    fn only_known_complete_social_links_render() {
        let link = |platform: Option<&str>, url: Option<&str>| SocialLink {
            platform: platform.map(str::to_string),
            url: url.map(str::to_string),
        };
        let settings = GlobalSettings {
            social_links: vec![
                link(Some("Instagram"), Some("https://instagram.com/cochi")),
                link(Some("myspace"), Some("https://myspace.com/cochi")),
                link(Some("facebook"), None),
            ],
            ..GlobalSettings::default()
        };
        let page = bound(None);
        let footer = LayoutShell::new(&settings, &page).footer();
        assert_eq!(footer.matches("class=\"social ").count(), 1);
        assert!(footer.contains("social instagram"));
    }

    #[test]
    fn render_carries_title_and_query() {
        let settings = GlobalSettings { site_name: Some("Cochi's Kitchen".to_string()), ..GlobalSettings::default() };
        let page = bound(Some("About Us"));
        let context = LayoutShell::new(&settings, &page).render("about", &MarkdownService::new()).unwrap();
        assert_eq!(context.title, "About Us");
        assert!(context.body.contains("Cochi&#39;s Kitchen"));
        assert!(context.query_json.contains("about.mdx"));
    }
}
