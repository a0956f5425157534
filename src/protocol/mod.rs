//! Admin line protocol
//!
//! Parses admin commands, dispatches them to the file handler, and formats
//! responses. This thin layer stands in for the host server framework's
//! routing and serialization.

pub mod handlers;
pub mod parser;
pub mod responses;

pub use handlers::{CommandResult, CommandStatus, handle_command};
pub use parser::{Command, parse_command};
