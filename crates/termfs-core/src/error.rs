//! Error types for the navigator.
//!
//! - [`ResolveError`] - path resolution failures, surfaced as output lines
//! - [`LoadError`] - snapshot loading failures, recovered with a fallback tree

use std::path::PathBuf;

use thiserror::Error;

/// Path resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A segment did not name an existing directory child.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
}

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The snapshot document is not valid JSON or has the wrong shape.
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
