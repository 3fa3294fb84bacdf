use async_trait::async_trait;

use crate::errors::SiteError;
use crate::types::{Collection, Connection, Document, GlobalSettings, Page};

/// Query interface to the content backend.
///
/// A document exists exactly when `query_document` returns `Some`.
#[async_trait]
pub trait ContentClient: Send + Sync + 'static {
    /// Fetch one document by collection and collection-relative path
    async fn query_document(
        &self,
        collection: Collection,
        relative_path: &str,
    ) -> Result<Option<Document>, SiteError>;

    /// Fetch one page of the collection, starting after `after`
    async fn query_connection(
        &self,
        collection: Collection,
        after: Option<&str>,
    ) -> Result<Connection<Document>, SiteError>;

    async fn page(&self, relative_path: &str) -> Result<Option<Page>, SiteError> {
        let doc = self.query_document(Collection::Page, relative_path).await?;
        Ok(doc.and_then(|d| match d {
            Document::Page(page) => Some(page),
            Document::Global(_) => None,
        }))
    }

    async fn global(&self, relative_path: &str) -> Result<Option<GlobalSettings>, SiteError> {
        let doc = self.query_document(Collection::Global, relative_path).await?;
        Ok(doc.and_then(|d| match d {
            Document::Global(global) => Some(global),
            Document::Page(_) => None,
        }))
    }
}
