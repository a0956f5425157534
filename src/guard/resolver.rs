//! Config-root resolution
//!
//! Locates the directory that bounds all guarded file access.

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::FileAccessError;

/// Resolves and caches the config root for the life of the handler.
///
/// The configured directory wins when it exists on disk; otherwise the
/// packaged fallback (the installed copy of the default configuration) is
/// tried. If neither resolves the handler refuses to serve rather than
/// guess at a boundary. Resolution runs at most once; both success and
/// failure are cached.
#[derive(Debug)]
pub struct ConfigRootResolver {
    config_dir: PathBuf,
    packaged_dir: Option<PathBuf>,
    resolved: OnceLock<Option<PathBuf>>,
}

impl ConfigRootResolver {
    pub fn new(config_dir: PathBuf, packaged_dir: Option<PathBuf>) -> Self {
        Self {
            config_dir,
            packaged_dir,
            resolved: OnceLock::new(),
        }
    }

    /// The canonical directory bounding all served paths.
    ///
    /// Fails with a forbidden-class error when no safe root can be
    /// determined.
    pub fn config_root(&self) -> Result<&Path, FileAccessError> {
        let cached = self.resolved.get_or_init(|| {
            if let Some(root) = canonical_dir(&self.config_dir) {
                info!("Config root resolved to {}", root.display());
                return Some(root);
            }
            if let Some(packaged) = &self.packaged_dir {
                if let Some(root) = canonical_dir(packaged) {
                    info!(
                        "Config directory {} absent, using packaged copy {}",
                        self.config_dir.display(),
                        root.display()
                    );
                    return Some(root);
                }
            }
            warn!(
                "Cannot resolve config directory {} and no packaged copy is available",
                self.config_dir.display()
            );
            None
        });

        cached.as_deref().ok_or(FileAccessError::NoConfigRoot)
    }
}

/// Canonicalize a directory path, requiring that it exists and is a directory.
fn canonical_dir(path: &Path) -> Option<PathBuf> {
    path.canonicalize().ok().filter(|p| p.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_configured_directory_wins() {
        let dir = tempdir().unwrap();
        let fallback = tempdir().unwrap();

        let resolver = ConfigRootResolver::new(
            dir.path().to_path_buf(),
            Some(fallback.path().to_path_buf()),
        );
        let root = resolver.config_root().unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_packaged_fallback_used_when_config_dir_absent() {
        let fallback = tempdir().unwrap();

        let resolver = ConfigRootResolver::new(
            PathBuf::from("/nonexistent/conf"),
            Some(fallback.path().to_path_buf()),
        );
        let root = resolver.config_root().unwrap();
        assert_eq!(root, fallback.path().canonicalize().unwrap());
    }

    #[test]
    fn test_unresolvable_root_is_forbidden() {
        let resolver = ConfigRootResolver::new(PathBuf::from("/nonexistent/conf"), None);
        let err = resolver.config_root().unwrap_err();
        assert!(matches!(err, FileAccessError::NoConfigRoot));
    }

    #[test]
    fn test_resolution_is_cached() {
        let dir = tempdir().unwrap();
        let resolver = ConfigRootResolver::new(dir.path().to_path_buf(), None);

        let first = resolver.config_root().unwrap().to_path_buf();
        // Removing the directory after the first call must not change the
        // cached result
        drop(dir);
        let second = resolver.config_root().unwrap();
        assert_eq!(first, second);
    }
}
