use std::io;
use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use thiserror::Error;

/// Error types for the site server
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Not found")]
    NotFound,
    #[error("Invalid path")]
    InvalidPath,
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Template error: {0}")]
    Template(String),
}

impl SiteError {
    pub fn parse(path: impl Into<String>, message: impl ToString) -> Self {
        SiteError::Parse { path: path.into(), message: message.to_string() }
    }
}

const NOT_FOUND_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>404 - Not Found</title>
    <link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
    <div class="error-page">
        <div class="error-container">
            <div class="error-icon">404</div>
            <h1 class="error-title">Page Not Found</h1>
            <p class="error-message">The requested page could not be found.</p>
            <div class="error-actions">
                <a href="/" class="error-btn primary">Go Home</a>
                <a href="/menu" class="error-btn secondary">See the Menu</a>
            </div>
        </div>
    </div>
</body>
</html>"#;

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            SiteError::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            SiteError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
            other => {
                log::error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
