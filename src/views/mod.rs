//! Vistas HTML
//!
//! Render en servidor de las páginas del catálogo. Todo valor que viene
//! del snapshot pasa por `escape` antes de llegar al HTML.

pub mod admin;
pub mod travel;

pub use admin::render_admin;
pub use travel::render_travel;

/// Escapar texto para contenido y atributos HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Esqueleto común de todas las páginas
pub(crate) fn layout(title: &str, body: &str, scripts: &[&str]) -> String {
    let scripts: String = scripts
        .iter()
        .map(|src| format!("    <script src=\"{}\"></script>\n", escape(src)))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"es\">\n\
<head>\n\
    <meta charset=\"utf-8\">\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
    <title>{title}</title>\n\
    <link rel=\"stylesheet\" href=\"/css/styles.css\">\n\
</head>\n\
<body>\n\
{body}\n\
{scripts}</body>\n\
</html>\n",
        title = escape(title),
        body = body,
        scripts = scripts,
    )
}
