//! envprobe server
//!
//! Listens on `[::]:80` and answers every request with
//! `BUILD_VALUE=.., TEMPLATE_VALUE=.., SECRET_VALUE=.., HELM_VALUE=..`.
//! Exits non-zero if the config is invalid or the port cannot be bound.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use envprobe_core::error::Result;
use envprobe_server::{app_state::AppState, config, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "envprobe-server failed");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    server::run(AppState::new(cfg)).await
}
