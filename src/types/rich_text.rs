use serde::{Deserialize, Serialize};

/// Rich text as stored by the content backend: either an MDX/markdown body
/// or a parsed node tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Markdown(String),
    Tree(RichTextNode),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RichTextNode>,
}

impl RichTextNode {
    pub fn text(text: &str) -> Self {
        Self { kind: "text".to_string(), text: Some(text.to_string()), ..Self::default() }
    }

    pub fn element(kind: &str, children: Vec<RichTextNode>) -> Self {
        Self { kind: kind.to_string(), children, ..Self::default() }
    }
}
