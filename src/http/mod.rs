//! HTTP server plumbing.
//!
//! Listener startup, graceful shutdown on SIGINT/SIGTERM, and the static
//! file service used as the router fallback.

pub mod static_files;

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
