use super::section::{non_empty, section_title, text_or, SectionContent};
use crate::interaction::{ContactForm, InquiryType};
use crate::types::ContactSection;
use crate::utils::{escape_attr, escape_html, tel_link};

pub const DEFAULT_CATERING_BULLETS: [&str; 5] = [
    "Custom menu planning",
    "Delivery and setup",
    "Serving staff available",
    "Special dietary accommodations",
    "From corporate lunches to private parties",
];

const EVENT_TYPES: [(&str, &str); 5] = [
    ("", "Select Event Type"),
    ("corporate", "Corporate"),
    ("wedding", "Wedding"),
    ("private", "Private Party"),
    ("other", "Other"),
];

/// Catering pitch and the contact form
pub struct ContactComponent;

impl ContactComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, ContactSection>) -> String {
        content.render_with(|contact| {
            let form = ContactForm::new();

            let mut html = String::from("<section id=\"contact\" class=\"section contact\"><div class=\"container\">");
            html.push_str(&section_title(
                text_or(&contact.section_label, "Get In Touch"),
                text_or(&contact.title, "Contact & Catering"),
            ));
            html.push_str("<div class=\"contact-grid\"><div class=\"contact-info\">");
            html.push_str("<h3>Contact Us</h3>");
            html.push_str("<p>Have a question or want to discuss catering? Send us a message!</p>");
            if let Some(email) = non_empty(&contact.email) {
                html.push_str(&format!(
                    "<p><a href=\"mailto:{}\">{}</a></p>",
                    escape_attr(email),
                    escape_html(email)
                ));
            }
            if let Some(phone) = non_empty(&contact.phone) {
                html.push_str(&format!(
                    "<p><a href=\"{}\">{}</a></p>",
                    escape_attr(&tel_link(phone)),
                    escape_html(phone)
                ));
            }

            html.push_str(&format!(
                "<h3>{}</h3>",
                escape_html(text_or(&contact.catering_title, "Catering Services"))
            ));
            html.push_str("<p>Let us bring Cochi's Kitchen to your next event. We cater events of all sizes with fresh, delicious food.</p>");
            html.push_str("<ul class=\"catering-list\">");
            let bullets: Vec<&str> = if contact.catering_bullets.iter().any(|b| !b.trim().is_empty()) {
                contact.catering_bullets.iter().map(String::as_str).filter(|b| !b.trim().is_empty()).collect()
            } else {
                DEFAULT_CATERING_BULLETS.to_vec()
            };
            for bullet in bullets {
                html.push_str(&format!("<li>{}</li>", escape_html(bullet)));
            }
            html.push_str("</ul>");
            html.push_str("<div class=\"client-quote\"><h4>What Our Clients Say</h4>");
            html.push_str("<blockquote>Cochi's Kitchen catered our company lunch, and it was a huge hit! Everything was fresh and delicious.</blockquote>");
            html.push_str("<p>- Local Business Owner</p></div>");
            html.push_str("</div>");

            html.push_str(&render_form(&form));
            html.push_str("</div></div></section>");
            html
        })
    }
}

impl Default for ContactComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn input(id: &str, label: &str, kind: &str, value: &str, required: bool) -> String {
    format!(
        "<div class=\"field\"><label for=\"{id}\">{label}{star}</label><input id=\"{id}\" name=\"{id}\" type=\"{kind}\" value=\"{value}\"{req}></div>",
        id = id,
        label = label,
        star = if required { " *" } else { "" },
        kind = kind,
        value = escape_attr(value),
        req = if required { " required" } else { "" },
    )
}

/// Form markup reflecting the given form state
pub fn render_form(form: &ContactForm) -> String {
    let fields = &form.fields;
    let mut html = String::from("<div class=\"contact-form\"><h3>Send Us a Message</h3>");
    html.push_str(&format!(
        "<form method=\"post\" data-submitting=\"{}\">",
        form.is_submitting()
    ));
    html.push_str(&input("name", "Name", "text", &fields.name, true));
    html.push_str(&input("email", "Email", "email", &fields.email, true));
    html.push_str(&input("phone", "Phone", "tel", &fields.phone, true));

    html.push_str("<div class=\"field\"><label for=\"inquiryType\">Inquiry Type *</label><select id=\"inquiryType\" name=\"inquiryType\" required>");
    for (kind, label) in [(InquiryType::General, "General Inquiry"), (InquiryType::Catering, "Catering")] {
        let selected = if fields.inquiry_type == kind { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{}\"{}>{}</option>", kind.as_str(), selected, label));
    }
    html.push_str("</select></div>");

    let hidden = if fields.shows_event_details() { "" } else { " hidden" };
    html.push_str(&format!("<div class=\"event-details\"{}>", hidden));
    html.push_str(&input("eventDate", "Event Date", "date", &fields.event_date, false));
    html.push_str(&input("guestCount", "Number of Guests", "number", &fields.guest_count, false));
    html.push_str("<div class=\"field\"><label for=\"eventType\">Event Type</label><select id=\"eventType\" name=\"eventType\">");
    for (value, label) in EVENT_TYPES {
        let selected = if fields.event_type == value { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{}\"{}>{}</option>", value, selected, label));
    }
    html.push_str("</select></div></div>");

    html.push_str(&format!(
        "<div class=\"field\"><label for=\"message\">Message *</label><textarea id=\"message\" name=\"message\" rows=\"4\" required>{}</textarea></div>",
        escape_html(&fields.message)
    ));
    html.push_str(&format!(
        "<button type=\"submit\"{}>{}</button>",
        if form.submit_enabled() { "" } else { " disabled" },
        form.submit_label()
    ));
    html.push_str("</form></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_copy_and_bullets() {
        let html = ContactComponent::new().render(SectionContent::Present(&ContactSection::default()));
        assert!(html.contains("Contact &amp; Catering"));
        assert!(html.contains("Get In Touch"));
        for bullet in DEFAULT_CATERING_BULLETS {
            assert!(html.contains(&format!("<li>{}</li>", bullet)));
        }
        assert!(html.contains("<button type=\"submit\">Send Message</button>"));
        assert!(html.contains("<div class=\"event-details\" hidden>"));
    }

    #[test]
    fn submitting_form_disables_button() {
        let mut form = ContactForm::new();
        form.fields.name = "Dana".to_string();
        form.fields.email = "dana@example.com".to_string();
        form.fields.phone = "408".to_string();
        form.fields.message = "Hi".to_string();
        form.fields.inquiry_type = InquiryType::Catering;
        form.submit().unwrap();
        let html = render_form(&form);
        assert!(html.contains("<button type=\"submit\" disabled>Sending...</button>"));
        assert!(html.contains("<div class=\"event-details\">"));
        assert!(html.contains("<option value=\"catering\" selected>"));
    }

    #[test]
    fn document_bullets_replace_defaults() {
        let contact = ContactSection {
            catering_bullets: vec!["Taco bar".to_string(), String::new()],
            ..ContactSection::default()
        };
        let html = ContactComponent::new().render(SectionContent::Present(&contact));
        assert!(html.contains("<li>Taco bar</li>"));
        assert!(!html.contains("Delivery and setup"));
        assert_eq!(html.matches("<li>").count(), 1);
    }
}
