use log::debug;

use super::section::{non_empty, SectionContent};
use crate::types::TopBarSection;
use crate::utils::{escape_attr, escape_html, tel_link};

/// Fixed promotional banner above the header
pub struct TopBarComponent;

impl TopBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, TopBarSection>) -> String {
        content.render_with(|top_bar| {
            debug!("Rendering top bar");
            let mut html = String::from("<div class=\"top-bar\"><div class=\"container\"><p>");
            if let Some(cta) = non_empty(&top_bar.call_to_action) {
                html.push_str(&format!("<span class=\"top-bar-cta\">{}</span>", escape_html(cta)));
            }
            if let Some(phone) = non_empty(&top_bar.phone_number) {
                html.push_str(&format!(
                    "<a class=\"top-bar-phone\" href=\"{}\">{}</a>",
                    escape_attr(&tel_link(phone)),
                    escape_html(phone)
                ));
            }
            html.push_str("</p></div></div>");
            html
        })
    }
}

impl Default for TopBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
