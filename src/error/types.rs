//! Error types
//!
//! Defines domain-specific error types for each module of the admin file server.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Guarded file access errors.
///
/// Forbidden-class variants carry only the caller-supplied relative path,
/// so a rejection never confirms internal filesystem layout. BadRequest-class
/// variants are reached only after existence is confirmed and include the
/// resolved absolute path to aid the operator on this trusted channel.
#[derive(Debug)]
pub enum FileAccessError {
    /// Target is on the administrator-configured hidden list.
    HiddenFile(String),
    /// Path contains a traversal marker (`..`).
    InvalidPath(String),
    /// Path canonicalizes outside the config root (e.g. through a symlink).
    OutsideRoot(String),
    /// No config root could be resolved to a safe location.
    NoConfigRoot,
    /// Target does not exist under the config root.
    NotFound { name: String, path: PathBuf },
    /// Target exists but is unreadable or filesystem-hidden.
    NotReadable { name: String, path: PathBuf },
    /// I/O failure during read or write.
    Io(io::Error),
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAccessError::HiddenFile(p) => write!(f, "Cannot access: {}", p),
            FileAccessError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            FileAccessError::OutsideRoot(p) => {
                write!(f, "Path escapes configuration directory: {}", p)
            }
            FileAccessError::NoConfigRoot => {
                write!(f, "Cannot access configuration directory")
            }
            FileAccessError::NotFound { name, path } => {
                write!(f, "Cannot find: {} [{}]", name, path.display())
            }
            FileAccessError::NotReadable { name, path } => {
                write!(f, "Cannot show: {} [{}]", name, path.display())
            }
            FileAccessError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FileAccessError {}

impl From<io::Error> for FileAccessError {
    fn from(error: io::Error) -> Self {
        FileAccessError::Io(error)
    }
}

/// Cluster property bag errors
#[derive(Debug)]
pub enum PropsError {
    InvalidArgument(String),
    Json(serde_json::Error),
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropsError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PropsError::Json(e) => write!(f, "Malformed property document: {}", e),
        }
    }
}

impl std::error::Error for PropsError {}

impl From<serde_json::Error> for PropsError {
    fn from(error: serde_json::Error) -> Self {
        PropsError::Json(error)
    }
}

/// Startup-level error for the server binary
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}
