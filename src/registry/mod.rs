//! Hidden-file registry
//!
//! Holds the set of filenames the administrative surface refuses to serve.

pub mod lookup;

pub use lookup::file_contents;

use std::collections::HashSet;

/// Set of case-normalized filenames denied to the admin file surface.
///
/// Populated once at startup from configuration and immutable afterwards,
/// so it can be shared across concurrent requests without locking.
/// Membership is case-insensitive and exact-match on the slash-normalized
/// relative path, never a glob or prefix match.
#[derive(Debug, Default, Clone)]
pub struct HiddenFileRegistry {
    names: HashSet<String>,
}

impl HiddenFileRegistry {
    /// Build the registry from configured filenames, uppercasing each entry.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test on a slash-normalized relative path.
    pub fn contains(&self, path: &str) -> bool {
        self.names.contains(&path.to_uppercase())
    }

    /// Read-only view of the normalized names, for diagnostics.
    pub fn names(&self) -> &HashSet<String> {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
