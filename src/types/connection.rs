use serde::Serialize;

/// Cursor-paginated list of documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Option<Vec<Option<Edge<T>>>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: Option<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl<T: Clone> Connection<T> {
    /// Slice one page out of `items`, which must be sorted by cursor.
    ///
    /// The page starts at the first item whose cursor sorts after `after`
    /// and holds at most `page_size` edges (never fewer than one slot).
    pub fn slice(items: &[(String, T)], after: Option<&str>, page_size: usize) -> Self {
        let start = match after {
            Some(cursor) => items.partition_point(|(key, _)| key.as_str() <= cursor),
            None => 0,
        };
        let end = (start + page_size.max(1)).min(items.len());
        let page = &items[start..end];

        let edges = page
            .iter()
            .map(|(cursor, node)| Some(Edge { cursor: cursor.clone(), node: Some(node.clone()) }))
            .collect();

        Connection {
            edges: Some(edges),
            page_info: PageInfo {
                has_next_page: end < items.len(),
                end_cursor: page.last().map(|(cursor, _)| cursor.clone()),
            },
        }
    }
}
