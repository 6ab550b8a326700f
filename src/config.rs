// Configuration module
// Port, root directory, and index file names are fixed at build time; the
// request path receives them through ServerContext rather than globals.

use std::net::SocketAddr;

use crate::http::mime::ExtensionMap;

/// Listening port for the file server
pub const PORT: u16 = 5030;

/// Directory below which all served files must resolve, relative to the
/// working directory at startup
pub const ROOT_DIR: &str = "public";

/// Index file names tried, in order, when a directory is requested
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Server configuration, immutable after process start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub root_dir: String,
    pub index_files: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: PORT,
            root_dir: ROOT_DIR.to_string(),
            index_files: INDEX_FILES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ServerConfig {
    /// Address to bind: all interfaces on the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Per-process state shared read-only across request handlers
pub struct ServerContext {
    pub config: ServerConfig,
    pub extensions: ExtensionMap,
}

impl ServerContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            extensions: ExtensionMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 5030);
        assert_eq!(cfg.root_dir, "public");
        assert_eq!(cfg.index_files, vec!["index.html", "index.htm"]);
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:5030");
    }
}
