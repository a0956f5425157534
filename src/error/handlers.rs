//! Error handlers
//!
//! Maps file access errors to protocol status codes.

use crate::error::types::FileAccessError;
use crate::protocol::responses::{BAD_REQUEST, FORBIDDEN, INTERNAL_ERROR};

/// Convert a file access error to its response status code.
///
/// Forbidden-class rejections map to 403, diagnostic rejections reached
/// after existence checks map to 400, and raw I/O failures map to 500.
pub fn error_to_status_code(err: &FileAccessError) -> u16 {
    match err {
        FileAccessError::HiddenFile(_)
        | FileAccessError::InvalidPath(_)
        | FileAccessError::OutsideRoot(_)
        | FileAccessError::NoConfigRoot => FORBIDDEN,
        FileAccessError::NotFound { .. } | FileAccessError::NotReadable { .. } => BAD_REQUEST,
        FileAccessError::Io(_) => INTERNAL_ERROR,
    }
}

/// Message safe to send to a remote caller.
///
/// Guard rejections keep their diagnostic text. Raw I/O failures are
/// reduced to a generic line; the detail stays in the server logs only.
pub fn error_to_public_message(err: &FileAccessError) -> String {
    match err {
        FileAccessError::Io(_) => "Internal error".to_string(),
        other => other.to_string(),
    }
}
