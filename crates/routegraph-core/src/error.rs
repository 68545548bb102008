//! Error types for routegraph-core.
//!
//! Lookups and queries report "not found" through `Option` and removal
//! through `bool`; `Error` is reserved for mutations that reject their
//! input outright.

use thiserror::Error;

/// Graph mutation error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A node with this identifier is already registered in the graph.
    #[error("Node already exists: {0}")]
    NodeExists(String),

    /// Edge weights must be finite and non-negative; the relaxation step
    /// assumes a visited node's distance is final.
    #[error("Invalid edge weight: {weight}")]
    InvalidWeight {
        /// The rejected weight value.
        weight: f64,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
