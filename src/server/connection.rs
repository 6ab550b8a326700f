// Connection handling module
// Accepts TCP connections and serves each one on its own task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerContext;
use crate::handler;
use crate::logger;

/// Accept connections until the process is terminated.
///
/// Accept errors are logged and never end the loop; per-request failures are
/// answered with HTTP error responses inside the handler.
pub async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<ServerContext>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo` and drives the HTTP/1 connection with
/// the request handler. Serve errors are logged; they never propagate to the
/// accept loop.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<ServerContext>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state_clone = Arc::clone(&state);
                async move { handler::handle_request(req, peer_addr, state_clone).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
