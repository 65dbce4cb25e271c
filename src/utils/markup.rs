//! Default markup renderer.
//!
//! Produces the fragments the browser surface inserts: a detail table for
//! file columns, a listing table for directory columns, and the breadcrumb
//! trail. Row links carry the target path in a `data-path` attribute for
//! the embedder's click handlers. All interpolated values are HTML-escaped.

use crate::core::navigator::Renderer;
use crate::models::{Column, ColumnContent, Crumb, Entry, FileRecord};

/// Renderer emitting the default HTML fragments.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_column(&self, column: &Column) -> String {
        match column.content() {
            ColumnContent::Directory(items) => render_directory(column.id(), items),
            ColumnContent::File(record) => render_file(record),
        }
    }

    fn render_breadcrumb(&self, crumbs: &[Crumb]) -> String {
        let mut html = String::new();
        for (idx, crumb) in crumbs.iter().enumerate() {
            if idx > 0 {
                html.push_str(" / ");
            }
            match &crumb.target {
                Some(target) => html.push_str(&format!(
                    "<a href=\"#\" data-path=\"{}\">{}</a>",
                    escape(target),
                    escape(&crumb.label)
                )),
                None => html.push_str(&format!("<strong>{}</strong>", escape(&crumb.label))),
            }
        }
        html
    }
}

fn render_directory(path: &str, items: &[Entry]) -> String {
    let mut html = format!(
        "<div id=\"{}\" class=\"directory_wrapper\"><table cellspacing=\"0\">\
         <thead><tr><th>Filetype</th><th>Size</th></tr></thead><tbody>",
        escape(path)
    );
    for entry in items {
        if entry.is_directory() {
            html.push_str(&format!(
                "<tr class=\"directory\"><td><a href=\"#\" data-path=\"{}\">{}</a></td>\
                 <td>&nbsp;</td></tr>",
                escape(&entry.path),
                escape(&entry.name)
            ));
        } else {
            html.push_str(&format!(
                "<tr class=\"file\"><td><a href=\"#\" data-path=\"{}\">{}</a></td>\
                 <td>{}</td></tr>",
                escape(&entry.path),
                escape(&entry.name),
                format_size(entry.size)
            ));
        }
    }
    html.push_str("</tbody></table></div>");
    html
}

fn render_file(record: &FileRecord) -> String {
    let mut html = format!(
        "<div id=\"{}\" class=\"file_wrapper\"><table cellspacing=\"0\">\
         <thead><tr><th colspan=\"2\">{}</th></tr></thead><tbody>",
        escape(&record.path),
        escape(&record.name)
    );
    if record.size.is_some() {
        html.push_str(&format!(
            "<tr><th>Size</th><td>{}</td></tr>",
            format_size(record.size)
        ));
    }
    if let Some(permissions) = &record.permissions {
        html.push_str(&format!(
            "<tr><th>Permissions</th><td>{}</td></tr>",
            escape(permissions)
        ));
    }
    if let Some(filetype) = &record.filetype {
        html.push_str(&format!(
            "<tr><th>Filetype</th><td>{}</td></tr>",
            escape(filetype)
        ));
    }
    html.push_str(&format!(
        "<tr><td colspan=\"2\"><a href=\"{}\">Open file</a></td></tr></tbody></table></div>",
        escape(&record.path)
    ));
    html
}

/// Format a file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Escape text for use in HTML text and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::breadcrumb;

    fn entry(name: &str, path: &str, size: Option<u64>) -> Entry {
        Entry {
            name: name.to_string(),
            path: path.to_string(),
            size,
        }
    }

    #[test]
    fn test_directory_rows_carry_data_path() {
        let column = Column::directory(
            "/a",
            vec![entry("b/", "/a/b", None), entry("c.txt", "/a/c.txt", Some(1500))],
        );
        let html = HtmlRenderer.render_column(&column);
        assert!(html.starts_with("<div id=\"/a\" class=\"directory_wrapper\">"));
        assert!(html.contains("<tr class=\"directory\"><td><a href=\"#\" data-path=\"/a/b\">b/</a>"));
        assert!(html.contains("<tr class=\"file\"><td><a href=\"#\" data-path=\"/a/c.txt\">c.txt</a>"));
        assert!(html.contains("<td>1.5K</td>"));
    }

    #[test]
    fn test_file_column_renders_optional_rows() {
        let record = FileRecord {
            path: "/a/c.txt".to_string(),
            name: "c.txt".to_string(),
            size: Some(42),
            permissions: Some("-rw-r--r--".to_string()),
            filetype: None,
        };
        let html = HtmlRenderer.render_column(&Column::file(record));
        assert!(html.starts_with("<div id=\"/a/c.txt\" class=\"file_wrapper\">"));
        assert!(html.contains("<tr><th>Size</th><td>42B</td></tr>"));
        assert!(html.contains("<tr><th>Permissions</th><td>-rw-r--r--</td></tr>"));
        assert!(!html.contains("Filetype</th>"));
        assert!(html.contains("<a href=\"/a/c.txt\">Open file</a>"));
    }

    #[test]
    fn test_breadcrumb_markup() {
        let html = HtmlRenderer.render_breadcrumb(&breadcrumb::build("/a/b"));
        assert_eq!(
            html,
            "<a href=\"#\" data-path=\"/\">[root]</a> / \
             <a href=\"#\" data-path=\"/a\">a</a> / <strong>b</strong>"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let column = Column::directory(
            "/a",
            vec![entry("<script>.txt", "/a/\"quoted\"", None)],
        );
        let html = HtmlRenderer.render_column(&column);
        assert!(html.contains("&lt;script&gt;.txt"));
        assert!(html.contains("data-path=\"/a/&quot;quoted&quot;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }
}
