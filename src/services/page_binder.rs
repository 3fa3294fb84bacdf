use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::errors::SiteError;
use crate::services::ContentClient;
use crate::types::{Collection, Document, Page};

/// Variables the document query was issued with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables {
    pub relative_path: String,
}

/// Everything a live-editing layer needs to re-issue the same query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDescriptor {
    pub collection: Collection,
    pub query: String,
    pub variables: QueryVariables,
}

impl QueryDescriptor {
    pub fn for_document(collection: Collection, relative_path: &str) -> Self {
        let name = collection.name();
        let fragment = match collection {
            Collection::Page => "PageParts",
            Collection::Global => "GlobalParts",
        };
        Self {
            collection,
            query: format!(
                "query {name}($relativePath: String!) {{ {name}(relativePath: $relativePath) {{ ...{fragment} }} }}"
            ),
            variables: QueryVariables { relative_path: relative_path.to_string() },
        }
    }

    pub fn to_json(&self) -> Result<String, SiteError> {
        serde_json::to_string(self).map_err(|e| SiteError::Template(e.to_string()))
    }
}

/// A fetched document ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPage {
    pub document: Document,
    pub query: QueryDescriptor,
}

impl BoundPage {
    pub fn page(&self) -> Option<&Page> {
        self.document.as_page()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Bound(BoundPage),
    NotFound,
}

impl Binding {
    /// Turn absence into [`SiteError::NotFound`] for the HTTP layer
    pub fn into_result(self) -> Result<BoundPage, SiteError> {
        match self {
            Binding::Bound(page) => Ok(page),
            Binding::NotFound => Err(SiteError::NotFound),
        }
    }
}

/// Fetches one document and binds it for rendering. Holds no cache and no
/// mutable state, so clones may bind concurrently.
#[derive(Clone)]
pub struct PageBinder {
    client: Arc<dyn ContentClient>,
}

impl PageBinder {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self { client }
    }

    pub async fn bind(&self, collection: Collection, storage_key: &str) -> Result<Binding, SiteError> {
        debug!("Binding {} document '{}'", collection, storage_key);
        match self.client.query_document(collection, storage_key).await? {
            Some(document) => Ok(Binding::Bound(BoundPage {
                document,
                query: QueryDescriptor::for_document(collection, storage_key),
            })),
            None => {
                warn!("No {} document for '{}'", collection, storage_key);
                Ok(Binding::NotFound)
            }
        }
    }
}
