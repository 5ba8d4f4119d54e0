//! Shared error type across envprobe crates.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Process exit status used for every fatal error.
pub const EXIT_FAILURE: u8 = 1;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type used by core and server.
///
/// Every variant is fatal: the binary logs it and exits.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}

impl ProbeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProbeError::Config(_)
            | ProbeError::UnsupportedVersion
            | ProbeError::Bind { .. }
            | ProbeError::Serve(_) => EXIT_FAILURE,
        }
    }
}
