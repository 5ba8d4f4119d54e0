//! Listener bootstrap.
//!
//! `bind` and `serve` are split so tests can bind an ephemeral port and read the
//! assigned address before serving.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use envprobe_core::error::{ProbeError, Result};

use crate::{app_state::AppState, router};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ProbeError::Bind { addr, source })
}

/// Serve until the accept loop fails. Never returns `Ok` in practice.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router::build_router(state);
    axum::serve(listener, app).await.map_err(ProbeError::Serve)
}

pub async fn run(state: AppState) -> Result<()> {
    let listen = state.cfg().server.listen_addr()?;
    let listener = bind(listen).await?;

    let local = listener.local_addr().map_err(ProbeError::Serve)?;
    tracing::info!(%local, "envprobe-server listening");

    serve(listener, state).await
}
