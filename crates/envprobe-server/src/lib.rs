//! envprobe server library entry.
//!
//! Wires config, state, router, and the probe handler into a runnable server. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod server;
pub mod transport;
