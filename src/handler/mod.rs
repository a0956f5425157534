//! Guarded file-access handler
//!
//! The administrative endpoint mediating between remote requests and
//! configuration files on the local filesystem. One handler instance is
//! shared across concurrent requests; all of its state is read-only after
//! construction.

use crate::config::ServerConfig;
use crate::error::FileAccessError;
use crate::files::operations::{list_directory, read_file, write_file};
use crate::files::results::FileContent;
use crate::guard::resolver::ConfigRootResolver;
use crate::guard::validation::resolve_admin_file;
use crate::registry::HiddenFileRegistry;

/// One admin file request.
///
/// Both fields come straight from the caller and are untrusted until the
/// path guard has run. An absent `file` targets the config root itself;
/// a present `contents` switches the request into write mode.
#[derive(Debug, Default, Clone)]
pub struct FileRequest {
    pub file: Option<String>,
    pub contents: Option<String>,
}

/// Handler for the guarded file-access endpoint.
pub struct AdminFileHandler {
    registry: HiddenFileRegistry,
    resolver: ConfigRootResolver,
}

impl AdminFileHandler {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            registry: HiddenFileRegistry::new(&config.hidden),
            resolver: ConfigRootResolver::new(
                config.config_dir_path(),
                config.packaged_dir_path(),
            ),
        }
    }

    /// Handle one request: resolve the root, run the guard, then read or
    /// write. All guard checks complete before any mutating action.
    pub fn handle(&self, request: &FileRequest) -> Result<FileContent, FileAccessError> {
        let root = self.resolver.config_root()?;
        let path = resolve_admin_file(root, &self.registry, request.file.as_deref())?;

        match &request.contents {
            Some(contents) => write_file(&path, contents),
            None if path.is_dir() => Ok(FileContent::listing(list_directory(&path)?)),
            None => read_file(&path),
        }
    }

    /// The hidden-file registry, for collaborators such as the companion
    /// lookup utility.
    pub fn hidden_files(&self) -> &HiddenFileRegistry {
        &self.registry
    }
}
