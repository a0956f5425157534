//! Server core functionality
//!
//! Contains the accept loop and per-connection session handling for the
//! admin listener.

pub mod core;

pub use core::Server;
