pub mod cluster;
pub mod config;
pub mod error;
pub mod files;
pub mod guard;
pub mod handler;
pub mod protocol;
pub mod registry;
pub mod server;

pub use handler::{AdminFileHandler, FileRequest};
pub use server::Server;
