//! Page rendering seam.
//!
//! Controllers describe a page as a template name, a title and a JSON context; a
//! `PageRenderer` turns that into HTML. The bundled `EmbeddedDataRenderer` emits a
//! small HTML shell with the context embedded as JSON, for client-side templates
//! served from the static directory to pick up.

use serde_json::Value;

use crate::server::error::internal::InternalError;

/// A page to render.
#[derive(Debug, Clone)]
pub struct Page {
    /// Template name, e.g. `cars/detail`.
    pub template: &'static str,
    pub title: String,
    /// Data handed to the template.
    pub context: Value,
}

impl Page {
    pub fn new(template: &'static str, title: impl Into<String>, context: Value) -> Self {
        Self {
            template,
            title: title.into(),
            context,
        }
    }
}

pub trait PageRenderer: Send + Sync {
    /// Renders a page to an HTML document.
    fn render(&self, page: &Page) -> Result<String, InternalError>;
}

/// Renders an HTML shell carrying the page context as embedded JSON.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedDataRenderer;

impl PageRenderer for EmbeddedDataRenderer {
    fn render(&self, page: &Page) -> Result<String, InternalError> {
        let data = serde_json::to_string(&page.context).map_err(|e| InternalError::Render {
            template: page.template.to_string(),
            reason: e.to_string(),
        })?;

        // A literal `</script>` inside the JSON would end the script element early
        let data = data.replace("</", "<\\/");

        Ok(format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<title>{title}</title>\n",
                "<link rel=\"stylesheet\" href=\"/static/app.css\">\n",
                "</head>\n",
                "<body data-template=\"{template}\">\n",
                "<main id=\"app\"></main>\n",
                "<script id=\"page-data\" type=\"application/json\">{data}</script>\n",
                "<script src=\"/static/app.js\"></script>\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape_html(&page.title),
            template = escape_html(page.template),
            data = data,
        ))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
