//! Companion lookup for non-administrative callers
//!
//! Lets embedding views fetch a config file without going through the full
//! request surface. The registry is passed in explicitly rather than reached
//! through shared global state.

use std::fs;
use std::io;
use std::path::Path;

use crate::registry::HiddenFileRegistry;

/// Fetch a config file's contents for display in non-admin contexts.
///
/// A hidden path yields `Ok(None)` so callers can render an empty section
/// without treating it as a failure. Genuine I/O errors are propagated
/// instead of being conflated with intentional hiding.
pub fn file_contents(
    registry: &HiddenFileRegistry,
    config_root: &Path,
    path: &str,
) -> io::Result<Option<String>> {
    if registry.contains(path) {
        return Ok(None);
    }
    fs::read_to_string(config_root.join(path)).map(Some)
}
