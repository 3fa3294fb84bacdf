use log::debug;

use super::section::{non_empty, text_or, SectionContent};
use crate::interaction::{Slideshow, SLIDE_INTERVAL};
use crate::types::HeroSection;
use crate::utils::{escape_attr, escape_html};

pub const DEFAULT_HERO_IMAGES: [&str; 6] = [
    "/images/hero/hero-01.png",
    "/images/hero/hero-02.png",
    "/images/hero/hero-03.png",
    "/images/hero/hero-04.png",
    "/images/hero/hero-05.png",
    "/images/hero/hero-06.png",
];

const HIGHLIGHT_PHRASE: &str = "in Morgan Hill";

/// Full-height landing section with the background slideshow
pub struct HeroComponent;

impl HeroComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, HeroSection>) -> String {
        content.render_with(|hero| {
            let images: Vec<&str> = if hero.images.iter().any(|i| !i.trim().is_empty()) {
                hero.images.iter().map(String::as_str).filter(|i| !i.trim().is_empty()).collect()
            } else {
                DEFAULT_HERO_IMAGES.to_vec()
            };
            let slideshow = Slideshow::new(images.len());
            debug!("Rendering hero with {} slides", slideshow.len());

            let mut html = format!(
                "<section id=\"home\" class=\"hero\" data-slide-interval=\"{}\">",
                SLIDE_INTERVAL.as_millis()
            );
            for (index, image) in images.iter().enumerate() {
                let state = if index == slideshow.current() { "active" } else { "inactive" };
                html.push_str(&format!(
                    "<div class=\"hero-slide {}\" style=\"background-image:url('{}')\" aria-hidden=\"true\"></div>",
                    state,
                    escape_attr(image)
                ));
            }
            html.push_str("<div class=\"hero-overlay\" aria-hidden=\"true\"></div>");
            html.push_str("<div class=\"hero-content container\">");
            html.push_str("<h1><img src=\"/images/cochis_kitchen_logomark.svg\" alt=\"Cochi's Kitchen logomark\">Cochi's Kitchen</h1>");
            if let Some(tagline) = non_empty(&hero.tagline) {
                html.push_str(&format!("<h2 class=\"hero-tagline\">{}</h2>", highlight_tagline(tagline)));
            }
            html.push_str("<div class=\"hero-actions\">");
            html.push_str(&format!(
                "<a href=\"#menu\" class=\"btn-primary\">{}</a>",
                escape_html(text_or(&hero.menu_button_text, "View Menu"))
            ));
            html.push_str(&format!(
                "<a href=\"#location\" class=\"btn-secondary\">{}</a>",
                escape_html(text_or(&hero.find_us_button_text, "Find Us"))
            ));
            for button in &hero.cta_buttons {
                let Some(text) = non_empty(&button.text) else { continue };
                html.push_str(&format!(
                    "<a href=\"{}\" class=\"btn-{}\">{}</a>",
                    escape_attr(text_or(&button.url, "#")),
                    escape_attr(text_or(&button.variant, "primary")),
                    escape_html(text)
                ));
            }
            html.push_str("</div></div>");
            html.push_str("<a href=\"#menu\" class=\"hero-scroll\" aria-label=\"Scroll down\"></a>");
            html.push_str("</section>");
            html
        })
    }
}

impl Default for HeroComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything before the phrase, then "in" plus the highlighted town name
fn highlight_tagline(tagline: &str) -> String {
    match tagline.split_once(HIGHLIGHT_PHRASE) {
        Some((before, _)) => format!(
            "{}in <span class=\"highlight\">Morgan Hill</span>",
            escape_html(before)
        ),
        None => escape_html(tagline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_slides_and_labels() {
        let html = HeroComponent::new().render(SectionContent::Present(&HeroSection::default()));
        assert_eq!(html.matches("hero-slide").count(), 6);
        assert_eq!(html.matches("hero-slide active").count(), 1);
        assert!(html.contains(">View Menu<"));
        assert!(html.contains(">Find Us<"));
        assert!(!html.contains("hero-tagline"));
    }

    #[test]
    fn highlights_town_in_tagline() {
        let hero = HeroSection {
            tagline: Some("Scratch kitchen & bakery in Morgan Hill".to_string()),
            images: vec!["/images/a.png".to_string()],
            ..HeroSection::default()
        };
        let html = HeroComponent::new().render(SectionContent::Present(&hero));
        assert!(html.contains("Scratch kitchen &amp; bakery in <span class=\"highlight\">Morgan Hill</span>"));
        assert_eq!(html.matches("hero-slide").count(), 1);
    }

    #[test]
    fn cta_buttons_without_text_are_skipped() {
        let hero = HeroSection {
            cta_buttons: vec![
                crate::types::CtaButton { text: Some("Order".to_string()), url: Some("/order".to_string()), variant: None },
                crate::types::CtaButton::default(),
            ],
            ..HeroSection::default()
        };
        let html = HeroComponent::new().render(SectionContent::Present(&hero));
        assert!(html.contains("<a href=\"/order\" class=\"btn-primary\">Order</a>"));
        assert_eq!(html.matches("btn-primary").count(), 2);
    }
}
