use std::path::{Path, PathBuf};

use log::debug;

use crate::types::ShellContext;
use crate::utils::escape_attr;

/// Component for wrapping rendered bodies in the HTML document shell
pub struct TemplateComponent {
    static_dir: PathBuf,
}

impl TemplateComponent {
    pub fn new(static_dir: &Path) -> Self {
        Self { static_dir: static_dir.to_path_buf() }
    }

    fn base_template_path(&self) -> PathBuf {
        self.static_dir.join("html").join("base.html")
    }

    /// Load `html/base.html` from the static directory and fill it in,
    /// or fall back to the inline shell when it is missing
    pub async fn render_shell(&self, context: &ShellContext) -> String {
        let path = self.base_template_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(base) => fill_template(&base, context),
            Err(e) => {
                debug!("No shell template at {:?} ({}), using inline shell", path, e);
                fill_template(INLINE_SHELL, context)
            }
        }
    }
}

const INLINE_SHELL: &str = "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{{TITLE}}</title><meta name=\"description\" content=\"{{DESCRIPTION}}\"><link rel=\"stylesheet\" href=\"/static/css/site.css\"></head><body>{{BODY}}<script type=\"application/json\" id=\"page-query\">{{QUERY}}</script></body></html>";

const PLACEHOLDERS: [&str; 4] = ["{{TITLE}}", "{{DESCRIPTION}}", "{{QUERY}}", "{{BODY}}"];

/// Fill the shell placeholders in one pass over `base`; inserted values are never rescanned
fn fill_template(base: &str, context: &ShellContext) -> String {
    let mut html = String::with_capacity(base.len() + context.body.len());
    let mut rest = base;
    while let Some((start, token)) = next_placeholder(rest) {
        html.push_str(&rest[..start]);
        match token {
            "{{TITLE}}" => html.push_str(&escape_attr(&context.title)),
            "{{DESCRIPTION}}" => html.push_str(&escape_attr(&context.description)),
            "{{QUERY}}" => html.push_str(&context.query_json.replace("</", "<\\/")),
            _ => html.push_str(&context.body),
        }
        rest = &rest[start + token.len()..];
    }
    html.push_str(rest);
    html
}

fn next_placeholder(text: &str) -> Option<(usize, &'static str)> {
    PLACEHOLDERS
        .iter()
        .filter_map(|token| text.find(token).map(|start| (start, *token)))
        .min_by_key(|(start, _)| *start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ShellContext {
        ShellContext {
            title: "Menu & More".to_string(),
            description: "Sandwiches".to_string(),
            body: "<main>{{TITLE}}</main>".to_string(),
            query_json: "{\"q\":\"</script>\"}".to_string(),
        }
    }

    #[tokio::test]
    async fn falls_back_to_inline_shell() {
        let dir = tempfile::tempdir().unwrap();
        let html = TemplateComponent::new(dir.path()).render_shell(&context()).await;
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Menu &amp; More</title>"));
        assert!(html.contains("<\\/script>"));
    }

    #[tokio::test]
    async fn uses_base_template_from_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("html")).unwrap();
        std::fs::write(dir.path().join("html/base.html"), "<t>{{TITLE}}</t><b>{{BODY}}</b>").unwrap();
        let html = TemplateComponent::new(dir.path()).render_shell(&context()).await;
        assert_eq!(html, "<t>Menu &amp; More</t><b><main>{{TITLE}}</main></b>");
    }

    #[test]
    fn inserted_values_are_not_expanded_again() {
        let context = ShellContext {
            title: "Menu {{BODY}}".to_string(),
            description: "{{QUERY}}".to_string(),
            body: "<main>X</main>".to_string(),
            query_json: "{}".to_string(),
        };
        let html = fill_template(INLINE_SHELL, &context);
        assert!(html.contains("<title>Menu {{BODY}}</title>"));
        assert!(html.contains("content=\"{{QUERY}}\""));
        assert_eq!(html.matches("<main>X</main>").count(), 1);
    }
}
