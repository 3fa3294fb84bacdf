pub mod content_client;
pub mod file_client;
pub mod markdown_service;
pub mod memory_client;
pub mod page_binder;
pub mod path_resolver;
pub mod static_params;

pub use content_client::ContentClient;
pub use file_client::FileContentClient;
pub use markdown_service::MarkdownService;
pub use memory_client::MemoryContentClient;
pub use page_binder::{Binding, BoundPage, PageBinder, QueryDescriptor};
pub use path_resolver::{resolve, Resolution};
pub use static_params::{enumerate_all, ConnectionPager, StaticParams};
