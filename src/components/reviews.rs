use super::section::{non_empty, section_title, text_or, SectionContent};
use crate::types::{ReviewSource, ReviewsSection, Testimonial};
use crate::utils::{escape_attr, escape_html};

const YELP_URL: &str = "https://www.yelp.com/biz/cochis-kitchen-morgan-hill";
const FACEBOOK_URL: &str = "https://www.facebook.com/cochiskitchen/";
const MAX_STARS: u8 = 5;

/// Testimonial cards plus links out to the review sites
pub struct ReviewsComponent;

impl ReviewsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, ReviewsSection>) -> String {
        content.render_with(|reviews| {
            let samples;
            let testimonials: &[Testimonial] = if reviews.testimonials.is_empty() {
                samples = sample_testimonials();
                &samples
            } else {
                &reviews.testimonials
            };

            let mut html = String::from("<section id=\"testimonials\" class=\"section reviews\"><div class=\"container\">");
            html.push_str(&section_title(
                text_or(&reviews.section_label, "What People Say"),
                text_or(&reviews.title, "Customer Reviews"),
            ));
            html.push_str("<div class=\"review-grid\">");
            for testimonial in testimonials {
                html.push_str(&review_card(testimonial));
            }
            html.push_str("</div><div class=\"review-links\">");
            if let Some(cta) = non_empty(&reviews.call_to_action) {
                html.push_str(&format!("<p>{}</p>", escape_html(cta)));
            }
            html.push_str(&format!(
                "<a class=\"review-link yelp\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_attr(text_or(&reviews.yelp_url, YELP_URL)),
                escape_html(text_or(&reviews.yelp_link_text, "Read more reviews on Yelp"))
            ));
            html.push_str(&format!(
                "<a class=\"review-link facebook\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_attr(text_or(&reviews.facebook_url, FACEBOOK_URL)),
                escape_html(text_or(&reviews.facebook_link_text, "See us on Facebook"))
            ));
            html.push_str("</div></div></section>");
            html
        })
    }
}

impl Default for ReviewsComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS);
    let mut html = format!("<span class=\"stars\" aria-label=\"{} out of {} stars\">", filled, MAX_STARS);
    for i in 0..MAX_STARS {
        html.push_str(if i < filled { "<i class=\"star filled\"></i>" } else { "<i class=\"star\"></i>" });
    }
    html.push_str("</span>");
    html
}

fn review_card(testimonial: &Testimonial) -> String {
    let source = match testimonial.source {
        ReviewSource::Yelp => "yelp",
        ReviewSource::Facebook => "facebook",
    };
    let mut html = String::from("<article class=\"review-card\"><header>");
    html.push_str(&format!("<h3>{}</h3>", escape_html(text_or(&testimonial.name, "Anonymous"))));
    if let Some(date) = non_empty(&testimonial.date) {
        html.push_str(&format!("<p class=\"review-date\">{}</p>", escape_html(date)));
    }
    html.push_str(&stars(testimonial.rating));
    html.push_str(&format!("<span class=\"review-source {}\"></span>", source));
    html.push_str("</header>");
    html.push_str(&format!("<p>{}</p>", escape_html(text_or(&testimonial.text, ""))));
    html.push_str("</article>");
    html
}

fn testimonial(name: &str, source: ReviewSource, text: &str, date: &str) -> Testimonial {
    Testimonial {
        name: Some(name.to_string()),
        rating: 5,
        source,
        text: Some(text.to_string()),
        date: Some(date.to_string()),
    }
}

/// Reviews shown when the document lists none
pub fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial("Sarah M.", ReviewSource::Yelp, "The Guido sandwich is absolutely incredible! Perfectly balanced flavors and high-quality ingredients. Their fresh-baked scones are also to die for. I've been coming here every weekend since they opened.", "March 2023"),
        testimonial("Michael L.", ReviewSource::Facebook, "Nashville hot chicken sandwich is the best I've had outside of Tennessee. The meat is perfectly cooked and juicy, and the heat level is just right. Their house-made pickles add the perfect crunch!", "February 2023"),
        testimonial("Jennifer R.", ReviewSource::Yelp, "Stopped in for breakfast and had their breakfast burrito - absolutely phenomenal! Fresh ingredients, perfectly cooked eggs, and the potatoes had an amazing seasoning. Will definitely be back!", "April 2023"),
        testimonial("David K.", ReviewSource::Facebook, "They catered our company event and everyone was blown away by the quality and presentation. The tri-tip was cooked to perfection and their house-made sauces were incredible. Highly recommend for any catering needs!", "January 2023"),
    ]
}
