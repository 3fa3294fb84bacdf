use super::section::{section_title, text_or, SectionContent};
use crate::services::MarkdownService;
use crate::types::AboutSection;
use crate::utils::{escape_attr, escape_html};

/// "Our Story" section: rich text, philosophy block and founders' photo
pub struct AboutComponent<'a> {
    markdown: &'a MarkdownService,
}

impl<'a> AboutComponent<'a> {
    pub fn new(markdown: &'a MarkdownService) -> Self {
        Self { markdown }
    }

    pub fn render(&self, content: SectionContent<'_, AboutSection>) -> String {
        content.render_with(|about| {
            let mut html = String::from("<section id=\"about\" class=\"section about\"><div class=\"container\">");
            html.push_str(&section_title(
                text_or(&about.section_label, "Our Story"),
                text_or(&about.title, "From Catering to Community Favorite"),
            ));
            html.push_str("<div class=\"about-grid\"><div class=\"about-story prose\">");
            if let Some(body) = &about.content {
                html.push_str(&self.markdown.render(body));
            }
            html.push_str("<div class=\"about-philosophy\">");
            html.push_str(&format!(
                "<h3>{}</h3>",
                escape_html(text_or(&about.philosophy_title, "Our Philosophy"))
            ));
            html.push_str(&format!(
                "<p>{}</p>",
                escape_html(text_or(
                    &about.philosophy_text,
                    "Placeholder text about commitment to quality and community."
                ))
            ));
            html.push_str("</div></div>");

            html.push_str("<figure class=\"about-image\">");
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_attr(text_or(&about.image, "/images/family.png")),
                escape_attr(text_or(&about.image_alt, "Manny and Gabby Vasquez"))
            ));
            html.push_str(&format!(
                "<figcaption><p class=\"caption-name\">{}</p><p class=\"caption-role\">{}</p></figcaption>",
                escape_html(text_or(&about.caption_name, "Manny & Gabby Vasquez")),
                escape_html(text_or(&about.caption_role, "Founders"))
            ));
            html.push_str("</figure></div></div></section>");
            html
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichText;

    #[test]
    fn empty_about_uses_every_fallback() {
        let markdown = MarkdownService::new();
        let html = AboutComponent::new(&markdown).render(SectionContent::Present(&AboutSection::default()));
        assert!(html.contains("Our Story"));
        assert!(html.contains("From Catering to Community Favorite"));
        assert!(html.contains("src=\"/images/family.png\""));
        assert!(html.contains("Manny &amp; Gabby Vasquez"));
        assert!(html.contains("Founders"));
    }

    #[test]
    fn renders_story_markdown() {
        let markdown = MarkdownService::new();
        let about = AboutSection {
            content: Some(RichText::Markdown("We started as a **catering** company.".to_string())),
            title: Some("Our Roots".to_string()),
            ..AboutSection::default()
        };
        let html = AboutComponent::new(&markdown).render(SectionContent::Present(&about));
        assert!(html.contains("<strong>catering</strong>"));
        assert!(html.contains("<h2>Our Roots</h2>"));
    }
}
