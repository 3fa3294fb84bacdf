use crate::utils::escape_html;

/// A section's field set as seen by its component
#[derive(Debug)]
pub enum SectionContent<'a, T> {
    Present(&'a T),
    Absent,
}

impl<'a, T> SectionContent<'a, T> {
    pub fn from_option(fields: Option<&'a T>) -> Self {
        match fields {
            Some(fields) => SectionContent::Present(fields),
            None => SectionContent::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SectionContent::Present(_))
    }

    /// The one rendering rule shared by every section: absent renders nothing
    pub fn render_with<F>(&self, render: F) -> String
    where
        F: FnOnce(&'a T) -> String,
    {
        match *self {
            SectionContent::Present(fields) => render(fields),
            SectionContent::Absent => String::new(),
        }
    }
}

impl<T> Clone for SectionContent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SectionContent<'_, T> {}

impl<'a, T> From<&'a Option<T>> for SectionContent<'a, T> {
    fn from(fields: &'a Option<T>) -> Self {
        Self::from_option(fields.as_ref())
    }
}

/// Field value, or `fallback` when missing or empty
pub fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

/// Non-empty field value, if any
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

/// Section heading: small label above a display title
pub fn section_title(label: &str, title: &str) -> String {
    let mut html = String::from("<div class=\"section-title\">");
    html.push_str(&format!("<p class=\"section-label\">{}</p>", escape_html(label)));
    html.push_str(&format!("<h2>{}</h2>", escape_html(title)));
    html.push_str("<div class=\"section-divider\"></div>");
    html.push_str("</div>");
    html
}
