use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use log::debug;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::errors::SiteError;
use crate::services::ContentClient;
use crate::types::{Collection, Connection, Document, GlobalSettings, Page, SystemInfo};

/// Content client over an in-process document map
pub struct MemoryContentClient {
    documents: BTreeMap<(Collection, String), Document>,
    page_size: usize,
    queries: AtomicUsize,
}

impl MemoryContentClient {
    pub fn new(page_size: usize) -> Self {
        Self { documents: BTreeMap::new(), page_size: page_size.max(1), queries: AtomicUsize::new(0) }
    }

    /// Store a page; its `_sys` metadata is derived from `relative_path`
    pub fn insert_page(&mut self, relative_path: &str, mut page: Page) {
        page.sys = SystemInfo::from_relative_path(Collection::Page, relative_path);
        self.documents.insert((Collection::Page, relative_path.to_string()), Document::Page(page));
    }

    pub fn insert_global(&mut self, relative_path: &str, mut global: GlobalSettings) {
        global.sys = SystemInfo::from_relative_path(Collection::Global, relative_path);
        self.documents.insert((Collection::Global, relative_path.to_string()), Document::Global(global));
    }

    pub fn with_page(mut self, relative_path: &str, page: Page) -> Self {
        self.insert_page(relative_path, page);
        self
    }

    pub fn with_global(mut self, relative_path: &str, global: GlobalSettings) -> Self {
        self.insert_global(relative_path, global);
        self
    }

    /// Number of queries answered so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Default for MemoryContentClient {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[async_trait]
impl ContentClient for MemoryContentClient {
    async fn query_document(
        &self,
        collection: Collection,
        relative_path: &str,
    ) -> Result<Option<Document>, SiteError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        debug!("Memory query {} '{}'", collection, relative_path);
        Ok(self.documents.get(&(collection, relative_path.to_string())).cloned())
    }

    async fn query_connection(
        &self,
        collection: Collection,
        after: Option<&str>,
    ) -> Result<Connection<Document>, SiteError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let items: Vec<(String, Document)> = self
            .documents
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|((_, path), doc)| (path.clone(), doc.clone()))
            .collect();
        Ok(Connection::slice(&items, after, self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn documents_are_keyed_by_collection_and_path() {
        let client = MemoryContentClient::default()
            .with_page("about.mdx", Page { title: Some("About".into()), ..Page::default() })
            .with_global("index.json", GlobalSettings::default());

        let page = client.page("about.mdx").await.unwrap().unwrap();
        assert_eq!(page.title.as_deref(), Some("About"));
        assert_eq!(page.sys.breadcrumbs, vec!["about"]);
        assert!(client.page("index.json").await.unwrap().is_none());
        assert!(client.global("index.json").await.unwrap().is_some());
        assert_eq!(client.query_count(), 3);
    }

    #[tokio::test]
    async fn connection_lists_only_the_requested_collection() {
        let client = MemoryContentClient::new(1)
            .with_page("a.mdx", Page::default())
            .with_global("index.json", GlobalSettings::default());

        let conn = client.query_connection(Collection::Page, None).await.unwrap();
        assert_eq!(conn.edges.map(|e| e.len()), Some(1));
        assert!(!conn.page_info.has_next_page);
    }
}
