//! Probe handler.
//!
//! Answers every request with `200 OK` and the rendered probe line. The request
//! itself is never read beyond what is logged.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
};

use envprobe_core::probe::ProbeValues;

use crate::app_state::AppState;

/// Variables are read per request, so a changed environment shows up without a restart.
pub async fn probe(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> (StatusCode, String) {
    tracing::debug!(%method, path = %uri.path(), "probe request");
    (StatusCode::OK, ProbeValues::capture(state.env()).render())
}
