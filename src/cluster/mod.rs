//! Cluster metadata types
//!
//! Immutable snapshots of cluster and shard state exchanged through the
//! coordination service.

pub mod props;

pub use props::ClusterProps;
