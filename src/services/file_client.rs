use std::fs;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::errors::SiteError;
use crate::services::ContentClient;
use crate::types::{Collection, Connection, Document, Edge, GlobalSettings, Page, RichText, SystemInfo};

/// Content client reading documents from a local content directory.
///
/// Layout: `<base>/pages/**/*.mdx` (YAML front matter, markdown body) and
/// `<base>/global/*.json`.
#[derive(Clone)]
pub struct FileContentClient {
    base_dir: PathBuf,
    page_size: usize,
}

impl FileContentClient {
    pub fn new(base_dir: PathBuf, page_size: usize) -> Self {
        debug!("Creating FileContentClient with base directory: {:?}", base_dir);
        Self { base_dir, page_size: page_size.max(1) }
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.base_dir.join(collection.directory())
    }

    /// Resolve a collection-relative path, refusing anything that could leave the collection directory
    fn locate(&self, collection: Collection, relative_path: &str) -> Option<PathBuf> {
        if relative_path.is_empty() || relative_path.contains('\\') {
            return None;
        }
        let rel = Path::new(relative_path);
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.collection_dir(collection).join(rel))
    }

    async fn read_document(
        &self,
        collection: Collection,
        relative_path: &str,
    ) -> Result<Option<Document>, SiteError> {
        let Some(full_path) = self.locate(collection, relative_path) else {
            warn!("Rejected content path: '{}'", relative_path);
            return Ok(None);
        };

        let raw = match tokio::fs::read_to_string(&full_path).await {
            Ok(raw) => raw,
            Err(e) if matches!(e.kind(), std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory) => {
                debug!("Document does not exist: {:?}", full_path);
                return Ok(None);
            }
            Err(e) => {
                error!("Failed to read document {:?}: {}", full_path, e);
                return Err(SiteError::Io(e));
            }
        };

        let document = match collection {
            Collection::Page => Document::Page(parse_page(relative_path, &raw)?),
            Collection::Global => Document::Global(parse_global(relative_path, &raw)?),
        };
        debug!("Read {} document '{}', {} bytes", collection, relative_path, raw.len());
        Ok(Some(document))
    }

    /// All collection-relative paths with the collection's extension, sorted
    fn list_relative_paths(&self, collection: Collection) -> Result<Vec<String>, SiteError> {
        let root = self.collection_dir(collection);
        let mut paths = Vec::new();
        if !root.is_dir() {
            warn!("Collection directory does not exist: {:?}", root);
            return Ok(paths);
        }
        collect_files(&root, "", collection.extension(), &mut paths)?;
        paths.sort();
        info!("Listed {} {} documents", paths.len(), collection);
        Ok(paths)
    }
}

fn collect_files(dir: &Path, prefix: &str, extension: &str, out: &mut Vec<String>) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let rel = if prefix.is_empty() { name.clone() } else { format!("{}/{}", prefix, name) };
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&entry.path(), &rel, extension, out)?;
        } else if Path::new(&name).extension().and_then(|e| e.to_str()) == Some(extension) {
            out.push(rel);
        }
    }
    Ok(())
}

/// Split a leading `---` delimited front matter block from the body
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix("---\n").or_else(|| raw.strip_prefix("---\r\n")) else {
        return (None, raw);
    };
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, raw)
}

/// Parse an MDX page. The markdown body becomes the about section's content.
pub fn parse_page(relative_path: &str, raw: &str) -> Result<Page, SiteError> {
    let (front, body) = split_front_matter(raw);
    let mut page: Page = match front {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|e| SiteError::parse(relative_path, e))?
        }
        _ => Page::default(),
    };
    page.sys = SystemInfo::from_relative_path(Collection::Page, relative_path);

    let body = body.trim();
    if !body.is_empty() {
        if let Some(about) = page.about.as_mut() {
            if about.content.is_none() {
                about.content = Some(RichText::Markdown(body.to_string()));
            }
        }
    }
    Ok(page)
}

pub fn parse_global(relative_path: &str, raw: &str) -> Result<GlobalSettings, SiteError> {
    let mut global: GlobalSettings =
        serde_json::from_str(raw).map_err(|e| SiteError::parse(relative_path, e))?;
    global.sys = SystemInfo::from_relative_path(Collection::Global, relative_path);
    Ok(global)
}

#[async_trait]
impl ContentClient for FileContentClient {
    async fn query_document(
        &self,
        collection: Collection,
        relative_path: &str,
    ) -> Result<Option<Document>, SiteError> {
        self.read_document(collection, relative_path).await
    }

    async fn query_connection(
        &self,
        collection: Collection,
        after: Option<&str>,
    ) -> Result<Connection<Document>, SiteError> {
        let keyed: Vec<(String, String)> = self
            .list_relative_paths(collection)?
            .into_iter()
            .map(|p| (p.clone(), p))
            .collect();
        let listing = Connection::slice(&keyed, after, self.page_size);

        let mut edges = Vec::new();
        for edge in listing.edges.into_iter().flatten().flatten() {
            let node = match self.read_document(collection, &edge.cursor).await {
                Ok(node) => node,
                Err(e @ SiteError::Parse { .. }) => {
                    warn!("Skipping unreadable document '{}': {}", edge.cursor, e);
                    None
                }
                Err(e) => return Err(e),
            };
            edges.push(Some(Edge { cursor: edge.cursor, node }));
        }
        Ok(Connection { edges: Some(edges), page_info: listing.page_info })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "pages/about.mdx",
            "---\ntitle: About Us\nabout:\n  sectionLabel: Our Story\n---\n\nWe started as a **catering** company.\n",
        );
        write(dir.path(), "pages/home.mdx", "---\ntitle: Home\n---\n");
        write(dir.path(), "pages/events/catering.mdx", "---\ntitle: Catering\n---\n");
        write(dir.path(), "pages/notes.txt", "ignored");
        write(dir.path(), "global/index.json", r#"{ "siteName": "Cochi's Kitchen", "socialLinks": [{ "platform": "Instagram", "url": "https://instagram.com/cochis" }] }"#);
        dir
    }

    #[test]
    fn front_matter_split() {
        let (front, body) = split_front_matter("---\ntitle: x\n---\nbody\n");
        assert_eq!(front, Some("title: x\n"));
        assert_eq!(body, "body\n");
        assert_eq!(split_front_matter("no front matter"), (None, "no front matter"));
    }

    #[test]
    fn body_binds_to_about_content() {
        let page = parse_page("about.mdx", "---\nabout:\n  title: Hi\n---\nHello\n").unwrap();
        assert_eq!(page.about.unwrap().content, Some(RichText::Markdown("Hello".into())));
        let page = parse_page("plain.mdx", "---\ntitle: Plain\n---\nHello\n").unwrap();
        assert!(page.about.is_none());
    }

    #[test]
    fn malformed_front_matter_is_a_parse_error() {
        let err = parse_page("bad.mdx", "---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[tokio::test]
    async fn reads_pages_and_globals() {
        let dir = fixture();
        let client = FileContentClient::new(dir.path().to_path_buf(), 10);

        let about = client.page("about.mdx").await.unwrap().unwrap();
        assert_eq!(about.title.as_deref(), Some("About Us"));
        assert!(matches!(about.about.and_then(|a| a.content), Some(RichText::Markdown(_))));

        let global = client.global("index.json").await.unwrap().unwrap();
        assert_eq!(global.site_name.as_deref(), Some("Cochi's Kitchen"));
        assert_eq!(global.social_links.len(), 1);
    }

    #[tokio::test]
    async fn missing_and_escaping_paths_are_absent() {
        let dir = fixture();
        let client = FileContentClient::new(dir.path().to_path_buf(), 10);
        assert!(client.page("contact.mdx").await.unwrap().is_none());
        assert!(client.page("../global/index.json").await.unwrap().is_none());
        assert!(client.page("/etc/passwd").await.unwrap().is_none());
        assert!(client.page("events").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn connection_pages_through_sorted_documents() {
        let dir = fixture();
        let client = FileContentClient::new(dir.path().to_path_buf(), 2);

        let first = client.query_connection(Collection::Page, None).await.unwrap();
        let cursors: Vec<String> = first.edges.unwrap().into_iter().flatten().map(|e| e.cursor).collect();
        assert_eq!(cursors, vec!["about.mdx", "events/catering.mdx"]);
        assert!(first.page_info.has_next_page);

        let second = client
            .query_connection(Collection::Page, first.page_info.end_cursor.as_deref())
            .await
            .unwrap();
        let edges = second.edges.unwrap();
        assert_eq!(edges.len(), 1);
        let node = edges[0].as_ref().and_then(|e| e.node.as_ref()).unwrap();
        assert_eq!(node.sys().breadcrumbs, vec!["home"]);
        assert!(!second.page_info.has_next_page);
    }

    #[tokio::test]
    async fn malformed_document_keeps_its_edge_without_a_node() {
        let dir = fixture();
        write(dir.path(), "pages/broken.mdx", "---\ntitle: [unclosed\n---\n");
        let client = FileContentClient::new(dir.path().to_path_buf(), 10);

        let conn = client.query_connection(Collection::Page, None).await.unwrap();
        let edges: Vec<_> = conn.edges.unwrap().into_iter().flatten().collect();
        assert_eq!(edges.len(), 4);
        let broken = edges.iter().find(|e| e.cursor == "broken.mdx").unwrap();
        assert!(broken.node.is_none());
        assert!(edges.iter().filter(|e| e.cursor != "broken.mdx").all(|e| e.node.is_some()));
    }

    #[tokio::test]
    async fn enumeration_survives_a_malformed_document() {
        let dir = fixture();
        write(dir.path(), "pages/broken.mdx", "---\ntitle: [unclosed\n---\n");
        let client: std::sync::Arc<dyn ContentClient> =
            std::sync::Arc::new(FileContentClient::new(dir.path().to_path_buf(), 2));

        let urls: Vec<String> = crate::services::enumerate_all(client)
            .await
            .unwrap()
            .iter()
            .map(|params| params.url())
            .collect();
        assert_eq!(urls, vec!["/about", "/events/catering"]);
    }
}
