//! Directory listing module
//!
//! Renders an HTML index for directories without an index file.

use std::path::Path;
use tokio::fs;

/// Render a directory listing page, or `None` if the directory is unreadable
pub async fn render_directory(dir_path: &Path, request_path: &str) -> Option<String> {
    let mut read_dir = fs::read_dir(dir_path).await.ok()?;

    let mut entries = Vec::new();
    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        // Directories get a trailing slash so their links stay browsable
        if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    Some(render_html(request_path, &entries))
}

/// Build the listing HTML: a title naming the request path and one relative
/// link per entry
fn render_html(request_path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(request_path));

    let mut items = String::new();
    for name in entries {
        let escaped = escape_html(name);
        items.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
    }

    format!(
        "<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n{items}</ul>\n<hr>\n</body>\n</html>\n"
    )
}

/// Escape special characters for HTML text and attribute values
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
