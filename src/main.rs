use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::ServerConfig::default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();

    // A bind failure (port taken, insufficient privilege) is fatal
    let listener = match server::bind_reusable_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_error(&format!("Failed to bind {addr}: {e}"));
            std::process::exit(1);
        }
    };

    let state = Arc::new(config::ServerContext::new(cfg));
    logger::log_server_start(&addr, &state.config);

    server::run_accept_loop(listener, state).await
}
