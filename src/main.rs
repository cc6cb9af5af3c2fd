mod config;
mod error;
mod handlers;
mod http;
mod pages;
mod server;
mod store;

use crate::server::Server;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match config::parse_config("config.yaml") {
        Ok(c) => c,
        Err(e) => {
            error!("fatal config error: {e}");
            std::process::exit(1);
        }
    };

    let mut server = Server::new(cfg);

    if let Err(e) = server.bind() {
        error!("fatal: {e}");
        std::process::exit(1);
    }

    server.run();
}
