//! Command handlers for the admin file server
//!
//! Translates parsed commands into file requests, runs them through the
//! guarded handler, and renders the outcome as protocol responses.

use log::info;

use crate::error::FileAccessError;
use crate::error::handlers::{error_to_public_message, error_to_status_code};
use crate::files::results::FileContent;
use crate::handler::{AdminFileHandler, FileRequest};
use crate::protocol::parser::Command;
use crate::protocol::responses::{BAD_REQUEST, OK, format_response};

/// Outcome classification for one handled command
#[derive(Debug)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Result of executing a command, including the rendered response
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Dispatch a parsed command to its handler.
pub fn handle_command(handler: &AdminFileHandler, command: &Command) -> CommandResult {
    match command {
        Command::Show(file) => handle_cmd_show(handler, file.as_deref()),
        Command::Push { file, contents } => handle_cmd_push(handler, file, contents),
        Command::Quit => handle_cmd_quit(),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

/// Handles SHOW: read mode, or a root listing when no file is named.
fn handle_cmd_show(handler: &AdminFileHandler, file: Option<&str>) -> CommandResult {
    let request = FileRequest {
        file: file.map(str::to_string),
        contents: None,
    };
    render(handler.handle(&request))
}

/// Handles PUSH: write mode, echoing the payload back on success.
fn handle_cmd_push(handler: &AdminFileHandler, file: &str, contents: &str) -> CommandResult {
    let request = FileRequest {
        file: Some(file.to_string()),
        contents: Some(contents.to_string()),
    };
    render(handler.handle(&request))
}

fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::CloseConnection,
        message: Some(format_response(OK, "Goodbye")),
    }
}

fn handle_cmd_unknown(raw: &str) -> CommandResult {
    info!("Rejected unknown command: {:?}", raw);
    CommandResult {
        status: CommandStatus::Failure("Unknown command".into()),
        message: Some(format_response(BAD_REQUEST, "Unknown command")),
    }
}

/// Render a handler outcome: status line carrying the content type, then the
/// body, then a blank line as terminator.
fn render(result: Result<FileContent, FileAccessError>) -> CommandResult {
    match result {
        Ok(content) => {
            let body = String::from_utf8_lossy(&content.body);
            CommandResult {
                status: CommandStatus::Success,
                message: Some(format!(
                    "{}{}\r\n",
                    format_response(OK, content.content_type),
                    body
                )),
            }
        }
        Err(err) => {
            let reason = error_to_public_message(&err);
            CommandResult {
                status: CommandStatus::Failure(reason.clone()),
                message: Some(format_response(error_to_status_code(&err), &reason)),
            }
        }
    }
}
