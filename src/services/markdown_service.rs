use pulldown_cmark::{html, Options, Parser};

use crate::types::{RichText, RichTextNode};
use crate::utils::{escape_attr, escape_html};

/// Renders rich text fields to HTML
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }

    pub fn render(&self, text: &RichText) -> String {
        match text {
            RichText::Markdown(source) => self.render_markdown(source),
            RichText::Tree(root) => {
                let mut out = String::new();
                render_node(root, &mut out);
                out
            }
        }
    }

    pub fn render_markdown(&self, source: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, Parser::new_ext(source, self.options));
        out
    }

    /// Text of the first paragraph when it opens with a plain text node
    pub fn first_paragraph_text(text: &RichText) -> Option<String> {
        match text {
            RichText::Tree(root) => {
                let paragraph = root.children.first().filter(|n| n.kind == "p")?;
                let leaf = paragraph.children.first().filter(|n| n.kind == "text")?;
                leaf.text.clone()
            }
            RichText::Markdown(source) => source
                .split("\n\n")
                .map(str::trim)
                .find(|block| !block.is_empty())
                .map(str::to_string),
        }
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

fn render_children(node: &RichTextNode, out: &mut String) {
    for child in &node.children {
        render_node(child, out);
    }
}

fn wrap(tag: &str, node: &RichTextNode, out: &mut String) {
    out.push_str(&format!("<{}>", tag));
    render_children(node, out);
    out.push_str(&format!("</{}>", tag));
}

fn render_node(node: &RichTextNode, out: &mut String) {
    match node.kind.as_str() {
        "root" => render_children(node, out),
        "text" => {
            let mut text = escape_html(node.text.as_deref().unwrap_or(""));
            if node.italic {
                text = format!("<em>{}</em>", text);
            }
            if node.bold {
                text = format!("<strong>{}</strong>", text);
            }
            out.push_str(&text);
        }
        "a" => {
            out.push_str(&format!("<a href=\"{}\">", escape_attr(node.url.as_deref().unwrap_or("#"))));
            render_children(node, out);
            out.push_str("</a>");
        }
        "break" => out.push_str("<br>"),
        "lic" => render_children(node, out),
        tag @ ("p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "ul" | "ol" | "li" | "blockquote") => {
            wrap(tag, node, out)
        }
        _ => render_children(node, out),
    }
}
