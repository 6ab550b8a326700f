//! Static file serving module
//!
//! Resolves request paths against the configured root directory and builds
//! file, directory listing, and error responses.

use crate::config::ServerContext;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the root directory
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Serve this file's bytes
    File(PathBuf),
    /// Render a listing of this directory
    Listing(PathBuf),
    /// Directory requested without a trailing slash
    Redirect(String),
    /// Resolved path escapes the root directory
    Forbidden,
    /// No file or directory under the root matches the request
    NotFound,
}

/// Serve a request from the configured root directory
pub async fn serve(ctx: &RequestContext<'_>, state: &ServerContext) -> Response<Full<Bytes>> {
    let cfg = &state.config;
    match resolve(&cfg.root_dir, &cfg.index_files, ctx.path) {
        Resolved::File(file_path) => match fs::read(&file_path).await {
            Ok(content) => {
                let content_type = state.extensions.content_type_for(&file_path);
                response::build_file_response(content, content_type, ctx.is_head)
            }
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {}",
                    file_path.display(),
                    e
                ));
                http::build_404_response()
            }
        },
        Resolved::Listing(dir_path) => match listing::render_directory(&dir_path, ctx.path).await {
            Some(html) => response::build_html_response(html, ctx.is_head),
            None => http::build_404_response(),
        },
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::Forbidden => http::build_403_response(),
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Resolve a request path to a file or directory under the root.
///
/// The requested path is joined under the root with `..` segments stripped,
/// then the canonicalized result must still lie within the canonicalized
/// root. Directory requests resolve to the first present index file, fall
/// back to a listing, and redirect first when the trailing slash is missing
/// so relative links in the listing resolve correctly.
pub fn resolve(root_dir: &str, index_files: &[String], request_path: &str) -> Resolved {
    // Remove leading slashes and strip traversal segments
    let clean_path = request_path.trim_start_matches('/').replace("..", "");

    let root_canonical = match Path::new(root_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{root_dir}': {e}"
            ));
            return Resolved::NotFound;
        }
    };

    let mut file_path = Path::new(root_dir).join(&clean_path);

    if file_path.is_dir() {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }

        let mut has_index = false;
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                has_index = true;
                break;
            }
        }

        if !has_index {
            return match file_path.canonicalize() {
                Ok(dir) if dir.starts_with(&root_canonical) => Resolved::Listing(dir),
                Ok(dir) => {
                    log_traversal_blocked(request_path, &dir);
                    Resolved::Forbidden
                }
                Err(_) => Resolved::NotFound,
            };
        }
    }

    // Missing files are common (404), no need to log at warning level
    let Ok(file_canonical) = file_path.canonicalize() else {
        return Resolved::NotFound;
    };
    if !file_canonical.starts_with(&root_canonical) {
        log_traversal_blocked(request_path, &file_canonical);
        return Resolved::Forbidden;
    }
    if !file_canonical.is_file() {
        return Resolved::NotFound;
    }

    Resolved::File(file_canonical)
}

fn log_traversal_blocked(request_path: &str, resolved: &Path) {
    logger::log_warning(&format!(
        "Path traversal attempt blocked: {} -> {}",
        request_path,
        resolved.display()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn index_files() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    fn fixture_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("index.html"), b"<h1>hello</h1>").unwrap();
        std_fs::write(dir.path().join("app.wgsl"), b"@compute fn main() {}").unwrap();
        std_fs::create_dir(dir.path().join("assets")).unwrap();
        std_fs::write(dir.path().join("assets").join("style.css"), b"body {}").unwrap();
        dir
    }

    #[test]
    fn test_resolves_plain_file() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        match resolve(root_str, &index_files(), "/app.wgsl") {
            Resolved::File(p) => assert!(p.ends_with("app.wgsl")),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_root_resolves_to_index_file() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        match resolve(root_str, &index_files(), "/") {
            Resolved::File(p) => assert!(p.ends_with("index.html")),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_directory_without_index_lists() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        match resolve(root_str, &index_files(), "/assets/") {
            Resolved::Listing(p) => assert!(p.ends_with("assets")),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_directory_without_trailing_slash_redirects() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        assert_eq!(
            resolve(root_str, &index_files(), "/assets"),
            Resolved::Redirect("/assets/".to_string())
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        assert_eq!(
            resolve(root_str, &index_files(), "/missing.txt"),
            Resolved::NotFound
        );
    }

    #[test]
    fn test_traversal_never_resolves_outside_root() {
        let root = fixture_root();
        let root_str = root.path().to_str().unwrap();
        let resolved = resolve(root_str, &index_files(), "/../../etc/passwd");
        match resolved {
            Resolved::Forbidden | Resolved::NotFound => {}
            other => panic!("traversal must not resolve, got: {other:?}"),
        }
    }

    #[test]
    fn test_missing_root_is_not_found() {
        assert_eq!(
            resolve("no-such-root-dir", &index_files(), "/index.html"),
            Resolved::NotFound
        );
    }
}
