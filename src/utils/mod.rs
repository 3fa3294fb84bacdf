use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static US_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})").expect("phone pattern is valid")
});

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Normalize request path
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Keep only ASCII digits
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// `tel:` link from free-form phone text, e.g. "Call (408) 555-0100"
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", digits_only(phone))
}

/// `tel:+1` link built from the first US-style number found in `text`
pub fn us_tel_link(text: &str) -> String {
    let number = US_PHONE.find(text).map(|m| m.as_str()).unwrap_or("");
    format!("tel:+1{}", digits_only(number))
}

/// Determine content type for a static file
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "webmanifest" => "application/manifest+json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "application/xml",
        _ => "application/octet-stream",
    }
}
