use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::errors::SiteError;
use crate::services::ContentClient;
use crate::types::{Collection, Document};

/// Breadcrumb segment of the home page, which is served by the root route
pub const HOME_SEGMENT: &str = "home";

/// One path the catch-all route can serve
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticParams {
    pub url_segments: Vec<String>,
}

impl StaticParams {
    pub fn url(&self) -> String {
        format!("/{}", self.url_segments.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PagerState {
    Start,
    After(Option<String>),
    Done,
}

/// Lazy, restartable walk over a collection's connection pages.
///
/// Each call to [`ConnectionPager::next_page`] performs at most one query,
/// using the previous page's end cursor. Traversal ends when a page reports
/// no next page, or immediately when a page arrives without an edge list,
/// even if that page claims more pages follow.
pub struct ConnectionPager {
    client: Arc<dyn ContentClient>,
    collection: Collection,
    state: PagerState,
}

impl ConnectionPager {
    pub fn new(client: Arc<dyn ContentClient>, collection: Collection) -> Self {
        Self { client, collection, state: PagerState::Start }
    }

    /// Fetch the next page of documents; `None` once traversal is over.
    /// Missing edges and nodes are dropped from the returned page.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Document>>, SiteError> {
        let after = match &self.state {
            PagerState::Done => return Ok(None),
            PagerState::Start => None,
            PagerState::After(cursor) => cursor.clone(),
        };

        let connection = self.client.query_connection(self.collection, after.as_deref()).await?;
        let Some(edges) = connection.edges else {
            debug!("Connection page without edges, ending traversal");
            self.state = PagerState::Done;
            return Ok(None);
        };

        self.state = if connection.page_info.has_next_page {
            PagerState::After(connection.page_info.end_cursor)
        } else {
            PagerState::Done
        };

        Ok(Some(edges.into_iter().flatten().filter_map(|edge| edge.node).collect()))
    }

    /// Start over from the first page
    pub fn restart(&mut self) {
        self.state = PagerState::Start;
    }
}

/// Whether a breadcrumb trail is reachable through the catch-all route
fn is_routable(breadcrumbs: &[String]) -> bool {
    !breadcrumbs.is_empty() && !breadcrumbs.iter().all(|s| s == HOME_SEGMENT)
}

/// Enumerate every page path served by the catch-all route
pub async fn enumerate_all(client: Arc<dyn ContentClient>) -> Result<Vec<StaticParams>, SiteError> {
    let mut pager = ConnectionPager::new(client, Collection::Page);
    let mut params = Vec::new();
    let mut pages = 0usize;

    while let Some(documents) = pager.next_page().await? {
        pages += 1;
        params.extend(
            documents
                .iter()
                .map(|doc| doc.sys().breadcrumbs.clone())
                .filter(|crumbs| is_routable(crumbs))
                .map(|url_segments| StaticParams { url_segments }),
        );
    }

    info!("Enumerated {} static paths over {} connection pages", params.len(), pages);
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::services::MemoryContentClient;
    use crate::types::{Connection, Edge, Page, PageInfo, SystemInfo};

    fn site_with(n: usize, page_size: usize) -> Arc<dyn ContentClient> {
        let mut client = MemoryContentClient::new(page_size);
        for i in 0..n {
            client.insert_page(&format!("page-{:02}.mdx", i), Page::default());
        }
        client.insert_page("home.mdx", Page::default());
        Arc::new(client)
    }

    #[tokio::test]
    async fn page_split_does_not_change_the_result() {
        let single: BTreeSet<_> = enumerate_all(site_with(50, 100)).await.unwrap().into_iter().collect();
        for page_size in [1, 7, 10, 49, 50] {
            let split: BTreeSet<_> = enumerate_all(site_with(50, page_size)).await.unwrap().into_iter().collect();
            assert_eq!(split, single, "page size {}", page_size);
        }
        assert_eq!(single.len(), 50);
    }

    #[tokio::test]
    async fn home_is_excluded_and_menu_included() {
        let client = MemoryContentClient::new(10)
            .with_page("home.mdx", Page::default())
            .with_page("menu.mdx", Page::default())
            .with_page("home/home.mdx", Page::default())
            .with_page("home/specials.mdx", Page::default());
        let params = enumerate_all(Arc::new(client)).await.unwrap();
        let urls: Vec<String> = params.iter().map(StaticParams::url).collect();
        assert_eq!(urls, vec!["/home/specials", "/menu"]);
    }

    #[tokio::test]
    async fn enumeration_is_repeatable() {
        let client = site_with(12, 5);
        let first = enumerate_all(client.clone()).await.unwrap();
        let second = enumerate_all(client).await.unwrap();
        assert_eq!(first, second);
    }

    /// Serves scripted pages in order, regardless of cursor
    struct ScriptedClient {
        pages: Vec<Connection<Document>>,
        calls: AtomicUsize,
    }

    fn doc(path: &str) -> Option<Edge<Document>> {
        let page = Page { sys: SystemInfo::from_relative_path(Collection::Page, path), ..Page::default() };
        Some(Edge { cursor: path.to_string(), node: Some(Document::Page(page)) })
    }

    fn conn(edges: Option<Vec<Option<Edge<Document>>>>, has_next_page: bool, cursor: &str) -> Connection<Document> {
        Connection { edges, page_info: PageInfo { has_next_page, end_cursor: Some(cursor.to_string()) } }
    }

    #[async_trait]
    impl ContentClient for ScriptedClient {
        async fn query_document(&self, _: Collection, _: &str) -> Result<Option<Document>, SiteError> {
            Ok(None)
        }

        async fn query_connection(&self, _: Collection, _: Option<&str>) -> Result<Connection<Document>, SiteError> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages[i].clone())
        }
    }

    #[tokio::test]
    async fn missing_edges_stop_traversal_even_with_more_pages() {
        let client = Arc::new(ScriptedClient {
            pages: vec![
                conn(Some(vec![doc("a.mdx")]), true, "a.mdx"),
                conn(None, true, "a.mdx"),
                conn(Some(vec![doc("never.mdx")]), false, "never.mdx"),
            ],
            calls: AtomicUsize::new(0),
        });
        let params = enumerate_all(client.clone()).await.unwrap();
        assert_eq!(params, vec![StaticParams { url_segments: vec!["a".into()] }]);
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn missing_first_page_edges_yield_nothing() {
        let client = Arc::new(ScriptedClient {
            pages: vec![conn(None, true, "")],
            calls: AtomicUsize::new(0),
        });
        assert!(enumerate_all(client).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn null_edges_and_nodes_are_skipped() {
        let client = Arc::new(ScriptedClient {
            pages: vec![conn(
                Some(vec![None, Some(Edge { cursor: "x".into(), node: None }), doc("b.mdx")]),
                false,
                "b.mdx",
            )],
            calls: AtomicUsize::new(0),
        });
        let params = enumerate_all(client).await.unwrap();
        assert_eq!(params.len(), 1);
    }

    #[tokio::test]
    async fn pager_restarts_from_the_first_page() {
        let mut pager = ConnectionPager::new(site_with(3, 2), Collection::Page);
        let first = pager.next_page().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);
        pager.restart();
        let again = pager.next_page().await.unwrap().unwrap();
        assert_eq!(first, again);
        assert!(pager.next_page().await.unwrap().is_some());
        assert!(pager.next_page().await.unwrap().is_none());
    }
}
