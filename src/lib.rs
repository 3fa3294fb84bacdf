//! Cochi - server-rendered restaurant site backed by a headless content store
//!
//! Request paths are resolved to content documents, bound into a page and
//! rendered through the section components inside the layout shell.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod interaction;
pub mod logger;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

use axum::{extract::State, routing::get, Router};

// Re-export commonly used items
pub use config::Config;
pub use errors::SiteError;
pub use types::{AppState, Collection, Document, GlobalSettings, Page};
pub use services::{
    enumerate_all, ContentClient, FileContentClient, MemoryContentClient, PageBinder, StaticParams,
};
pub use components::{LayoutShell, TemplateComponent};

/// Build the site router: fixed page routes, static files, then the catch-all
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::handle_root))
        .route("/static/*path", get(handlers::handle_static))
        .route("/images/*path", get(handlers::handle_image));

    for route in routes::FIXED_ROUTES.into_iter().filter(|r| r.path != routes::HOME_ROUTE.path) {
        router = router.route(
            route.path,
            get(move |State(state): State<AppState>| handlers::handle_fixed(state, route)),
        );
    }

    router.route("/*path", get(handlers::handle_path)).with_state(state)
}
