//! Path validation
//!
//! Validates caller-supplied relative paths before any filesystem access.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FileAccessError;
use crate::registry::HiddenFileRegistry;

/// Validate `requested` against the hidden set and traversal markers, then
/// resolve it under `config_root`.
///
/// `config_root` must already be canonical (the resolver guarantees this).
/// An absent request resolves to the config root itself. Both string-level
/// gates run before any filesystem check, so a rejection never depends on
/// what exists on disk.
pub fn resolve_admin_file(
    config_root: &Path,
    registry: &HiddenFileRegistry,
    requested: Option<&str>,
) -> Result<PathBuf, FileAccessError> {
    let candidate = match requested {
        None => config_root.to_path_buf(),
        Some(raw) => {
            // Platform separators must not bypass hidden-name matching
            let normalized = raw.replace('\\', "/");

            if registry.contains(&normalized) {
                return Err(FileAccessError::HiddenFile(normalized));
            }
            // Substring check, deliberately blunt: it also rejects
            // legitimate filenames containing ".."
            if normalized.contains("..") {
                return Err(FileAccessError::InvalidPath(normalized));
            }

            config_root.join(normalized)
        }
    };

    ensure_servable(config_root, requested, candidate)
}

/// Filesystem-level checks on a candidate that already passed both
/// string-level gates.
fn ensure_servable(
    config_root: &Path,
    requested: Option<&str>,
    candidate: PathBuf,
) -> Result<PathBuf, FileAccessError> {
    if !candidate.exists() {
        return Err(FileAccessError::NotFound {
            name: display_name(&candidate),
            path: candidate,
        });
    }
    // The fs-hidden gate applies only to caller-requested paths; the root
    // itself was already vetted by the resolver, whatever its directory name
    if !is_readable(&candidate) || (requested.is_some() && is_fs_hidden(&candidate)) {
        return Err(FileAccessError::NotReadable {
            name: display_name(&candidate),
            path: candidate,
        });
    }

    // Defense in depth: a symlink can escape the root without any ".."
    let canonical = candidate
        .canonicalize()
        .map_err(|_| FileAccessError::NotReadable {
            name: display_name(&candidate),
            path: candidate.clone(),
        })?;
    if !canonical.starts_with(config_root) {
        return Err(FileAccessError::OutsideRoot(
            requested.unwrap_or_default().to_string(),
        ));
    }

    Ok(candidate)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

/// Filesystem-level hidden attribute; dotfile convention on Unix.
fn is_fs_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
