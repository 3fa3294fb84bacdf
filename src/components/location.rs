use super::section::{non_empty, section_title, text_or, SectionContent};
use crate::types::LocationSection;
use crate::utils::{escape_attr, escape_html, us_tel_link};

const DEFAULT_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3181.230580759061!2d-121.65390382406847!3d37.13207247227737!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8091e2d2b4c1eff9%3A0x95eac397f51525b0!2s435%20Vineyard%20Blvd%2C%20Morgan%20Hill%2C%20CA%2095037!5e0!3m2!1sen!2sus!4v1716511064321!5m2!1sen!2sus";

/// Map, address, hours, parking and phone cards
pub struct LocationComponent;

impl LocationComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, LocationSection>) -> String {
        content.render_with(|location| {
            let line1 = text_or(&location.address_line1, "");
            let line2 = text_or(&location.address_line2, "");

            let mut html = String::from("<section id=\"location\" class=\"section location\"><div class=\"container\">");
            html.push_str(&section_title(
                text_or(&location.section_label, "Visit Us"),
                text_or(&location.section_title, "Our Location & Hours"),
            ));
            html.push_str("<div class=\"location-grid\"><div class=\"location-map\">");
            html.push_str(&format!(
                "<iframe title=\"Cochi's Kitchen Location\" src=\"{}\" loading=\"lazy\" allowfullscreen referrerpolicy=\"no-referrer-when-downgrade\"></iframe>",
                escape_attr(text_or(&location.map_embed_url, DEFAULT_MAP_EMBED))
            ));
            html.push_str("</div><div class=\"location-cards\">");

            html.push_str("<div class=\"location-card\"><h3>Address</h3>");
            html.push_str(&format!("<p>{}</p><p>{}</p>", escape_html(line1), escape_html(line2)));
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Get Directions &rarr;</a></div>",
                escape_attr(&directions_url(line1, line2))
            ));

            html.push_str("<div class=\"location-card\"><h3>Hours</h3>");
            html.push_str(&format!(
                "<div class=\"hours-row\"><span>Wednesday-Sunday:</span><span>{}</span></div>",
                escape_html(hours_value(&location.weekday_hours))
            ));
            html.push_str(&format!(
                "<div class=\"hours-row\"><span>Monday-Tuesday:</span><span>{}</span></div></div>",
                escape_html(hours_value(&location.weekend_hours))
            ));

            html.push_str(&format!(
                "<div class=\"location-card\"><h3>Parking</h3><p>{}</p></div>",
                escape_html(text_or(&location.parking_info, ""))
            ));

            html.push_str("<div class=\"location-card\"><h3>Contact</h3>");
            if let Some(phone) = non_empty(&location.contact_phone) {
                html.push_str(&format!(
                    "<p><a href=\"{}\">{}</a></p>",
                    escape_attr(&us_tel_link(phone)),
                    escape_html(phone)
                ));
            }
            html.push_str("</div></div></div></div></section>");
            html
        })
    }
}

impl Default for LocationComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Text between the first and second `:` of a "Days: hours" line
pub fn hours_value(line: &Option<String>) -> &str {
    non_empty(line)
        .and_then(|line| line.split(':').nth(1))
        .map(str::trim)
        .unwrap_or("")
}

fn directions_url(line1: &str, line2: &str) -> String {
    let query: String = format!("{}, {}", line1, line2)
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => (b as char).to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect();
    format!("https://maps.google.com/?q={}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> LocationSection {
        LocationSection {
            address_line1: Some("435 Vineyard Blvd".to_string()),
            address_line2: Some("Morgan Hill, CA 95037".to_string()),
            weekday_hours: Some("Wednesday-Sunday: 8am - 2pm".to_string()),
            weekend_hours: Some("Monday-Tuesday: Closed".to_string()),
            contact_phone: Some("Call (408) 555-0100".to_string()),
            ..LocationSection::default()
        }
    }

    #[test]
    fn hours_keep_only_the_part_after_the_first_colon() {
        assert_eq!(hours_value(&Some("Wednesday-Sunday: 8am - 2pm".to_string())), "8am - 2pm");
        // times with minutes get cut at their own colon
        assert_eq!(hours_value(&Some("Daily: 8:00am - 2:00pm".to_string())), "8");
        assert_eq!(hours_value(&Some("Closed".to_string())), "");
        assert_eq!(hours_value(&None), "");
    }

    #[test]
    fn renders_cards_with_phone_link() {
        let html = LocationComponent::new().render(SectionContent::Present(&location()));
        assert!(html.contains("href=\"tel:+14085550100\""));
        assert!(html.contains("<span>Closed</span>"));
        assert!(html.contains("Our Location &amp; Hours"));
        assert!(html.contains("q=435%20Vineyard%20Blvd%2C%20Morgan%20Hill%2C%20CA%2095037"));
    }

    #[test]
    fn absent_location_renders_nothing() {
        assert!(LocationComponent::new().render(SectionContent::Absent).is_empty());
    }
}
