//! Environment lookup seam.
//!
//! The server reads variables through [`EnvSource`] so handlers can be driven by a
//! fixed map in tests instead of the real process environment.

use std::collections::BTreeMap;

/// Read-only key/value lookup.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
///
/// Non-Unicode values are converted lossily rather than treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
