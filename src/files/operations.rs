//! File operations
//!
//! Reads and writes run only on paths already approved by the path guard.

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::FileAccessError;
use crate::files::results::FileContent;

/// Overwrite `path` with `contents` and echo the payload back as the
/// confirmation body.
///
/// Destructive and unconditional: the previous bytes are truncated away with
/// no backup and no atomic rename. Every guard check has already passed by
/// the time this runs, so a rejection can never leave a partial write behind.
pub fn write_file(path: &Path, contents: &str) -> Result<FileContent, FileAccessError> {
    fs::write(path, contents.as_bytes()).map_err(|e| {
        error!("Failed to write {}: {}", path.display(), e);
        FileAccessError::Io(e)
    })?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(FileContent::text(contents.as_bytes().to_vec()))
}

/// Return the file's current bytes as the response body.
pub fn read_file(path: &Path) -> Result<FileContent, FileAccessError> {
    let body = fs::read(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        FileAccessError::Io(e)
    })?;

    info!("Served {} ({} bytes)", path.display(), body.len());
    Ok(FileContent::raw(body))
}

/// List the entries of an approved directory, directories marked with a
/// trailing slash, sorted by name.
pub fn list_directory(path: &Path) -> Result<Vec<String>, FileAccessError> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path).map_err(FileAccessError::Io)? {
        let entry = entry.map_err(FileAccessError::Io)?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().map_err(FileAccessError::Io)?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }

    entries.sort();
    info!("Listed {} - {} entries", path.display(), entries.len());
    Ok(entries)
}
