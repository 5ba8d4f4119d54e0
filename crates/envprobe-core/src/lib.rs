//! envprobe core: the probe table, environment lookup, and error types.
//!
//! This crate defines what the probe reports and how it is rendered. It carries
//! no transport or runtime dependencies so the body format can be reused and
//! tested without a server.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `ProbeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod env;
pub mod error;
pub mod probe;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ProbeError, Result};
pub use probe::{ProbeValues, ProbeVar, PROBE_VARS};
