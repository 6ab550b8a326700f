//! Access log format module
//!
//! One Common Log Format (CLF) line per request:
//! `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`

use chrono::Local;

/// Access log entry containing the request/response information for one line
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/app.wgsl".to_string(),
        );
        entry.http_version = "1.1".to_string();
        entry.status = 200;
        entry.body_bytes = 1234;
        entry
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format_common();
        assert!(log.contains("192.168.1.1"));
        assert!(log.contains("\"GET /app.wgsl HTTP/1.1\""));
        assert!(log.contains("200 1234"));
    }

    #[test]
    fn test_format_common_with_query() {
        let mut entry = create_test_entry();
        entry.query = Some("v=2".to_string());
        let log = entry.format_common();
        assert!(log.contains("\"GET /app.wgsl?v=2 HTTP/1.1\""));
    }

    #[test]
    fn test_format_common_not_found() {
        let mut entry = create_test_entry();
        entry.path = "/missing.txt".to_string();
        entry.status = 404;
        entry.body_bytes = 13;
        let log = entry.format_common();
        assert!(log.contains("\"GET /missing.txt HTTP/1.1\" 404 13"));
    }
}
