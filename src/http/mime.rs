//! MIME type mapping module
//!
//! Maps file extensions to the Content-Type sent with served files.

use std::collections::HashMap;
use std::path::Path;

/// Content-Type for paths with no extension or an unmapped one
const FALLBACK_TYPE: &str = "application/octet-stream";

/// Immutable extension-to-MIME-type table, built once at startup.
///
/// Keys carry the leading dot and are matched exactly, case as given; the
/// empty string is the wildcard entry for unmapped extensions.
pub struct ExtensionMap {
    types: HashMap<&'static str, &'static str>,
}

impl Default for ExtensionMap {
    fn default() -> Self {
        let mut types = HashMap::new();
        types.insert(".manifest", "text/cache-manifest");
        types.insert(".wgsl", "text/wgsl");
        types.insert(".html", "text/html");
        types.insert(".png", "image/png");
        types.insert(".jpg", "image/jpg");
        types.insert(".svg", "image/svg+xml");
        types.insert(".css", "text/css");
        types.insert(".js", "application/x-javascript");
        types.insert(".ico", "image/vnd.microsoft.icon");
        types.insert("", FALLBACK_TYPE); // Default
        Self { types }
    }
}

impl ExtensionMap {
    /// Look up a dot-prefixed extension, falling back to the wildcard entry
    pub fn lookup(&self, extension: &str) -> &'static str {
        self.types.get(extension).copied().unwrap_or(FALLBACK_TYPE)
    }

    /// Content-Type for a resolved file path.
    ///
    /// The extension is the suffix delimited by the last `.` of the file
    /// name; dotless names look up the wildcard entry.
    pub fn content_type_for(&self, path: &Path) -> &'static str {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.lookup(&format!(".{ext}")),
            None => self.lookup(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_extensions() {
        let map = ExtensionMap::default();
        assert_eq!(map.lookup(".manifest"), "text/cache-manifest");
        assert_eq!(map.lookup(".wgsl"), "text/wgsl");
        assert_eq!(map.lookup(".html"), "text/html");
        assert_eq!(map.lookup(".png"), "image/png");
        assert_eq!(map.lookup(".jpg"), "image/jpg");
        assert_eq!(map.lookup(".svg"), "image/svg+xml");
        assert_eq!(map.lookup(".css"), "text/css");
        assert_eq!(map.lookup(".js"), "application/x-javascript");
        assert_eq!(map.lookup(".ico"), "image/vnd.microsoft.icon");
    }

    #[test]
    fn test_unmapped_extension_falls_back() {
        let map = ExtensionMap::default();
        assert_eq!(map.lookup(".xyz"), "application/octet-stream");
        assert_eq!(map.lookup(""), "application/octet-stream");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = ExtensionMap::default();
        assert_eq!(map.lookup(".HTML"), "application/octet-stream");
        assert_eq!(map.lookup(".Wgsl"), "application/octet-stream");
    }

    #[test]
    fn test_content_type_for_path() {
        let map = ExtensionMap::default();
        assert_eq!(map.content_type_for(Path::new("public/app.wgsl")), "text/wgsl");
        assert_eq!(map.content_type_for(Path::new("index.html")), "text/html");
        // Only the last dot-delimited suffix counts
        assert_eq!(
            map.content_type_for(Path::new("bundle.tar.gz")),
            "application/octet-stream"
        );
        // No extension at all
        assert_eq!(
            map.content_type_for(Path::new("README")),
            "application/octet-stream"
        );
        assert_eq!(
            map.content_type_for(Path::new(".gitignore")),
            "application/octet-stream"
        );
    }
}
