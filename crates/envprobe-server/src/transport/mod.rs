//! HTTP transport layer.
//!
//! - `http`: the catch-all probe handler

pub mod http;
