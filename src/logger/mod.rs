//! Logger module
//!
//! Startup and error lines plus one access log line per request. Access
//! lines go to stdout, errors and warnings to stderr.

pub mod access;

pub use access::AccessLogEntry;

use crate::config::ServerConfig;
use std::net::SocketAddr;

/// Announce the serving address at startup
pub fn log_server_start(addr: &SocketAddr, config: &ServerConfig) {
    println!(
        "Serving HTTP on http://{addr}/ from directory '{}'",
        config.root_dir
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Write the per-request access log line
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}
