use std::path::PathBuf;
use std::sync::Arc;

use crate::services::ContentClient;

pub mod connection;
pub mod document;
pub mod rich_text;

pub use connection::{Connection, Edge, PageInfo};
pub use document::{
    AboutSection, Collection, ContactSection, CtaButton, Document, GlobalSettings, HeroSection,
    LocationSection, MenuCategory, MenuItem, MenuSection, Page, ReviewSource, ReviewsSection,
    SocialLink, SystemInfo, Testimonial, TopBarSection,
};
pub use rich_text::{RichText, RichTextNode};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ContentClient>,
    pub static_dir: Arc<PathBuf>,
    pub revalidate_secs: u64,
}

/// Content for the HTML page shell
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub title: String,
    pub description: String,
    pub body: String,
    pub query_json: String,
}
