use axum::{
    body::Body,
    extract::{Path as AxumPath, State},
    http::{header, HeaderValue, Response},
    response::{Html, IntoResponse},
};
use log::{debug, info, warn};

use crate::components::{LayoutShell, TemplateComponent};
use crate::errors::SiteError;
use crate::routes::{cache_control, FixedRoute, GLOBAL_SETTINGS_KEY, HOME_ROUTE};
use crate::services::path_resolver::segments_of;
use crate::services::{resolve, MarkdownService, PageBinder, Resolution};
use crate::types::{AppState, Collection, GlobalSettings};
use crate::utils::{content_type_for, normalize_path};

/// Handle root path requests
pub async fn handle_root(State(state): State<AppState>) -> Result<impl IntoResponse, SiteError> {
    info!("Root request received");
    render_document(&state, HOME_ROUTE.storage_key, "").await
}

/// Handle one of the dedicated page routes
pub async fn handle_fixed(state: AppState, route: FixedRoute) -> Result<impl IntoResponse, SiteError> {
    info!("Page request received: '{}'", route.path);
    render_document(&state, route.storage_key, route.path).await
}

/// Handle catch-all path requests
pub async fn handle_path(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, SiteError> {
    info!("Path request received: '{}'", path);

    let segments = segments_of(&path);
    if segments.is_empty() {
        return Err(SiteError::NotFound);
    }
    match resolve(&segments) {
        Resolution::StaticAsset => {
            debug!("'{}' looks like a static file, not querying content", path);
            Err(SiteError::NotFound)
        }
        Resolution::Document { storage_key } => {
            debug!("'{}' resolved to document '{}'", path, storage_key);
            render_document(&state, &storage_key, &path).await
        }
    }
}

/// Serve a file from the static directory
pub async fn handle_static(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, SiteError> {
    serve_static_file(&state, &normalize_path(&path)).await
}

/// Serve an image from `<static_dir>/images`
pub async fn handle_image(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, SiteError> {
    serve_static_file(&state, &format!("images/{}", normalize_path(&path))).await
}

async fn serve_static_file(state: &AppState, relative: &str) -> Result<Response<Body>, SiteError> {
    if relative.split('/').any(|part| part == ".." || part.contains('\\')) {
        return Err(SiteError::InvalidPath);
    }
    let requested = state.static_dir.join(relative);
    let bytes = match tokio::fs::read(&requested).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(SiteError::NotFound),
        Err(e) if requested.is_dir() => {
            debug!("Static path {:?} is a directory: {}", requested, e);
            return Err(SiteError::NotFound);
        }
        Err(e) => return Err(e.into()),
    };

    let mut resp = Response::new(Body::from(bytes));
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&requested)),
    );
    Ok(resp)
}

/// Global settings for this request; absent or unreadable settings fall back to defaults
async fn load_settings(state: &AppState) -> GlobalSettings {
    match state.client.global(GLOBAL_SETTINGS_KEY).await {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            warn!("Global settings '{}' not found, using defaults", GLOBAL_SETTINGS_KEY);
            GlobalSettings::default()
        }
        Err(e) => {
            warn!("Failed to load global settings: {}", e);
            GlobalSettings::default()
        }
    }
}

/// Bind a page document and render it inside the layout shell
async fn render_document(state: &AppState, storage_key: &str, current_path: &str) -> Result<Response<Body>, SiteError> {
    let start_time = std::time::Instant::now();
    let binder = PageBinder::new(state.client.clone());
    let page = binder.bind(Collection::Page, storage_key).await?.into_result()?;
    let settings = load_settings(state).await;

    let markdown = MarkdownService::new();
    let context = LayoutShell::new(&settings, &page).render(current_path, &markdown)?;
    let html = TemplateComponent::new(&state.static_dir).render_shell(&context).await;

    let mut resp = Html(html).into_response();
    let cache = HeaderValue::from_str(&cache_control(state.revalidate_secs))
        .map_err(|e| SiteError::Template(e.to_string()))?;
    resp.headers_mut().insert(header::CACHE_CONTROL, cache);

    info!("Rendered '{}' in {}ms", storage_key, start_time.elapsed().as_millis());
    Ok(resp)
}
