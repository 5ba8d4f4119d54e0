//! Axum router wiring.
//!
//! `/` and every unmatched path, for any method, go to the probe handler.

use axum::{routing::any, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(transport::http::probe))
        .fallback(transport::http::probe)
        .with_state(state)
}
