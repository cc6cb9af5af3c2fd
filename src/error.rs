use std::io;

/// Startup failures. Anything that goes wrong after the listener is up is
/// handled per-connection and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid listen address {0}")]
    Address(String),

    #[error("socket error: {0}")]
    Io(#[from] io::Error),
}
