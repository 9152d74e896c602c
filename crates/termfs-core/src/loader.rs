//! Snapshot loading.
//!
//! The tree is read once before the interpreter starts. Callers that cannot
//! load it continue with [`VirtualFs::fallback`], see [`load_or_fallback`].

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::filesystem::VirtualFs;
use crate::models::Snapshot;

/// Parse a JSON snapshot document.
pub fn parse_snapshot(json: &str) -> Result<VirtualFs, LoadError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    debug!(
        path = %snapshot.path,
        entries = snapshot.files.len(),
        "parsed snapshot"
    );
    Ok(VirtualFs::from_snapshot(&snapshot))
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<VirtualFs, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&json)
}

/// Load a snapshot file, degrading to the fallback tree on failure.
pub fn load_or_fallback(path: impl AsRef<Path>) -> VirtualFs {
    match load_snapshot(path) {
        Ok(fs) => fs,
        Err(err) => {
            warn!(error = %err, "failed to load snapshot, using fallback tree");
            VirtualFs::fallback()
        }
    }
}
