use tracing::debug;

use crate::config::{FALLBACK_ENTRY_NAME, FALLBACK_ENTRY_SIZE, ROOT_PATH};
use crate::error::ResolveError;
use crate::models::{FileMetadata, FsEntry, NodeKind, Snapshot, SnapshotEntry};

/// Read-only virtual filesystem built from a snapshot.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Nested directory: `"/docs/sub"`
/// - Normalized paths have a leading slash, no trailing slash and no empty
///   or `.` segments
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: FsEntry,
}

impl VirtualFs {
    /// Wrap an already built root directory.
    pub fn new(root: FsEntry) -> Self {
        Self { root }
    }

    /// Create filesystem from a snapshot document.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let children = snapshot.files.iter().map(Self::build_entry).collect();
        Self {
            root: FsEntry::directory("", children),
        }
    }

    fn build_entry(entry: &SnapshotEntry) -> FsEntry {
        let meta = FileMetadata::new(entry.size.clone(), entry.modified.clone());
        match entry.node_kind() {
            NodeKind::Directory => FsEntry::Directory {
                name: entry.name.clone(),
                children: entry
                    .files
                    .iter()
                    .flatten()
                    .map(Self::build_entry)
                    .collect(),
                meta,
            },
            NodeKind::File => {
                if entry.files.as_ref().is_some_and(|files| !files.is_empty()) {
                    debug!(name = %entry.name, "ignoring children of file entry");
                }
                FsEntry::file(entry.name.clone(), meta)
            }
        }
    }

    /// Single-entry tree used when the snapshot fails to load.
    pub fn fallback() -> Self {
        let entry = FsEntry::file(
            FALLBACK_ENTRY_NAME,
            FileMetadata::new(FALLBACK_ENTRY_SIZE, ""),
        );
        Self {
            root: FsEntry::directory("", vec![entry]),
        }
    }

    pub fn root(&self) -> &FsEntry {
        &self.root
    }

    /// Resolve a directory expression starting at `current`.
    ///
    /// Absolute expressions (leading `/`) start at the root instead. Empty
    /// and `.` segments are skipped. Every remaining segment must name a
    /// directory child; the first one that does not is reported.
    pub fn resolve_dir<'a>(
        &'a self,
        expr: &str,
        current: &'a FsEntry,
    ) -> Result<&'a FsEntry, ResolveError> {
        let start = if expr.starts_with('/') {
            &self.root
        } else {
            current
        };

        Self::segments(expr).try_fold(start, |dir, segment| match dir.find_child(segment) {
            Some(child) if child.is_directory() => Ok(child),
            _ => Err(ResolveError::DirectoryNotFound(segment.to_string())),
        })
    }

    /// Resolve an expression against the root.
    pub fn get_dir(&self, path: &str) -> Result<&FsEntry, ResolveError> {
        self.resolve_dir(path, &self.root)
    }

    fn segments(expr: &str) -> impl Iterator<Item = &str> {
        expr.split('/').filter(|s| !s.is_empty() && *s != ".")
    }

    /// Normalize a path expression into absolute form.
    ///
    /// Relative expressions are treated as relative to the root.
    pub fn normalize_path(expr: &str) -> String {
        let parts: Vec<&str> = Self::segments(expr).collect();
        format!("/{}", parts.join("/"))
    }

    /// Join a normalized directory path and a relative expression.
    pub fn join_path(current: &str, expr: &str) -> String {
        if current == ROOT_PATH {
            format!("/{}", expr)
        } else {
            format!("{}/{}", current, expr)
        }
    }

    /// Get the parent directory of a path.
    ///
    /// Returns `"/"` for the root and for single-level paths.
    pub fn parent_path(path: &str) -> String {
        let mut parts: Vec<&str> = Self::segments(path).collect();
        parts.pop();
        format!("/{}", parts.join("/"))
    }
}
