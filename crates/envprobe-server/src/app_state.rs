//! Shared application state for the envprobe server.
//!
//! Read-only after construction. Clones share one allocation.

use std::sync::Arc;

use envprobe_core::env::{EnvSource, ProcessEnv};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    env: Arc<dyn EnvSource>,
}

impl AppState {
    /// State backed by the real process environment.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_source(cfg, Arc::new(ProcessEnv))
    }

    pub fn with_source(cfg: ServerConfig, env: Arc<dyn EnvSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, env }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn env(&self) -> &dyn EnvSource {
        self.inner.env.as_ref()
    }
}
