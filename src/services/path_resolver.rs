/// File extensions that mark a request as a static asset rather than a page
pub const STATIC_FILE_EXTENSIONS: &[&str] = &[
    "ico", "png", "jpg", "jpeg", "svg", "gif", "css", "js", "txt", "xml", "webmanifest",
];

/// Extension appended to a request path to form a page's storage key
pub const DOCUMENT_EXTENSION: &str = "mdx";

/// How a catch-all request path should be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Looks like a file request; answer not-found without consulting the content client
    StaticAsset,
    Document { storage_key: String },
}

/// Classify a request path given as URL segments.
///
/// The candidate extension is whatever follows the last `.` of the joined
/// path, compared case-insensitively. A path without any `.` is always a
/// document.
pub fn resolve<S: AsRef<str>>(segments: &[S]) -> Resolution {
    let joined = segments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");

    let is_static = joined
        .rsplit_once('.')
        .map(|(_, ext)| STATIC_FILE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false);

    if is_static {
        Resolution::StaticAsset
    } else {
        Resolution::Document { storage_key: format!("{}.{}", joined, DOCUMENT_EXTENSION) }
    }
}

/// Split a raw wildcard path into URL segments, dropping empty ones
pub fn segments_of(path: &str) -> Vec<String> {
    path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
}
