//! Top-level facade crate for envprobe.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use envprobe_core::*;
}

pub mod server {
    pub use envprobe_server::*;
}
