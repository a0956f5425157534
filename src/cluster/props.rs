//! Cluster node properties
//!
//! An immutable string-to-string property bag describing a node or shard.
//! Snapshots are stored in the coordination service as flat JSON objects;
//! an "update" is always the construction of a new instance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::PropsError;

/// Immutable key/value snapshot of cluster or shard metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterProps {
    props: HashMap<String, String>,
}

impl ClusterProps {
    /// Construct from a full replacement map.
    pub fn from_map(props: HashMap<String, String>) -> Self {
        Self { props }
    }

    /// Construct from a flat `key, value, key, value, ...` list.
    ///
    /// Fails before storing anything when the argument count is odd.
    pub fn from_key_vals<S: AsRef<str>>(key_vals: &[S]) -> Result<Self, PropsError> {
        if key_vals.len() % 2 != 0 {
            return Err(PropsError::InvalidArgument(
                "arguments should be key,value pairs".into(),
            ));
        }

        let props = key_vals
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect();
        Ok(Self { props })
    }

    /// Load a snapshot from the flat JSON object stored in the coordination
    /// service.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PropsError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize as a flat JSON object for storage in the coordination
    /// service.
    pub fn to_json(&self) -> Result<Vec<u8>, PropsError> {
        Ok(serde_json::to_vec(&self.props)?)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// All properties as a map.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.props
    }
}

impl fmt::Display for ClusterProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.props {
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
