//! Server config loader (strict parsing).
//!
//! The config file is optional. Without one the server listens on `[::]:80`.

pub mod schema;

use std::fs;
use std::io;
use std::path::Path;

use envprobe_core::error::{ProbeError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENVPROBE_CONFIG";

/// Config file looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "envprobe.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| ProbeError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig =
        serde_yaml::from_str(s).map_err(|e| ProbeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config for this process.
///
/// An explicit `ENVPROBE_CONFIG` must be readable. The default path may be absent,
/// in which case built-in defaults apply.
pub fn load_from_env() -> Result<ServerConfig> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_from_file(path);
    }

    match fs::read_to_string(DEFAULT_CONFIG_PATH) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(ProbeError::Config(format!(
            "read {DEFAULT_CONFIG_PATH} failed: {e}"
        ))),
    }
}
