use serde::Deserialize;

use crate::config::{PARENT_ENTRY_NAME, ROOT_PATH};

// =============================================================================
// File Metadata
// =============================================================================

/// Display metadata for an entry.
///
/// Both fields are opaque strings taken from the snapshot. Directories carry
/// them too, but nothing reads them as structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// Human readable size (e.g. "4.2 KB", "-")
    pub size: String,
    /// Human readable modification date
    pub modified: String,
}

impl FileMetadata {
    pub fn new(size: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            modified: modified.into(),
        }
    }
}

/// Kind of a filesystem node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

// =============================================================================
// Tree Nodes
// =============================================================================

/// Represents an entry in the virtual filesystem.
///
/// Children keep snapshot order, which is also display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    Directory {
        name: String,
        children: Vec<FsEntry>,
        meta: FileMetadata,
    },
    File {
        name: String,
        meta: FileMetadata,
    },
}

impl FsEntry {
    /// Create a directory with the given children.
    pub fn directory(name: impl Into<String>, children: Vec<FsEntry>) -> Self {
        FsEntry::Directory {
            name: name.into(),
            children,
            meta: FileMetadata::default(),
        }
    }

    /// Create a file with display metadata.
    pub fn file(name: impl Into<String>, meta: FileMetadata) -> Self {
        FsEntry::File {
            name: name.into(),
            meta,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsEntry::Directory { name, .. } | FsEntry::File { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FsEntry::Directory { .. } => NodeKind::Directory,
            FsEntry::File { .. } => NodeKind::File,
        }
    }

    pub fn meta(&self) -> &FileMetadata {
        match self {
            FsEntry::Directory { meta, .. } | FsEntry::File { meta, .. } => meta,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Ordered children of a directory. Files have none.
    pub fn children(&self) -> &[FsEntry] {
        match self {
            FsEntry::Directory { children, .. } => children,
            FsEntry::File { .. } => &[],
        }
    }

    /// Find a direct child by name.
    ///
    /// Sibling names are assumed unique; if a snapshot violates that, the
    /// first match in display order wins.
    pub fn find_child(&self, name: &str) -> Option<&FsEntry> {
        self.children().iter().find(|child| child.name() == name)
    }
}

// =============================================================================
// Snapshot Types
// =============================================================================

fn default_root_path() -> String {
    ROOT_PATH.to_string()
}

/// Root document of a tree snapshot (e.g. `data/files.json`).
#[derive(Clone, Debug, Deserialize)]
pub struct Snapshot {
    /// Path the document describes. Informational, always the root.
    #[serde(default = "default_root_path")]
    pub path: String,
    /// Top-level entries
    #[serde(default)]
    pub files: Vec<SnapshotEntry>,
}

/// Entry of a tree snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    /// `"file"` or `"directory"`. When absent, entries with `files` are
    /// directories and everything else is a file.
    #[serde(rename = "type", default)]
    pub kind: Option<NodeKind>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub modified: String,
    /// Ordered children (directories only)
    #[serde(default)]
    pub files: Option<Vec<SnapshotEntry>>,
}

impl SnapshotEntry {
    /// Effective kind of this entry.
    pub fn node_kind(&self) -> NodeKind {
        match (self.kind, &self.files) {
            (Some(kind), _) => kind,
            (None, Some(_)) => NodeKind::Directory,
            (None, None) => NodeKind::File,
        }
    }
}

// =============================================================================
// Listings
// =============================================================================

/// Kind of a listing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Synthetic upward move, present whenever the listed directory is not root
    Parent,
    Directory,
    File,
}

/// A row of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: String,
    pub modified: String,
}

impl ListingEntry {
    /// The synthetic parent entry.
    pub fn parent() -> Self {
        Self {
            name: PARENT_ENTRY_NAME.to_string(),
            kind: EntryKind::Parent,
            size: String::new(),
            modified: String::new(),
        }
    }

    /// Describe a tree node.
    pub fn from_entry(entry: &FsEntry) -> Self {
        let kind = match entry.kind() {
            NodeKind::Directory => EntryKind::Directory,
            NodeKind::File => EntryKind::File,
        };
        let meta = entry.meta();
        Self {
            name: entry.name().to_string(),
            kind,
            size: meta.size.clone(),
            modified: meta.modified.clone(),
        }
    }

    /// Whether selecting this entry navigates (parent or directory).
    pub fn is_navigable(&self) -> bool {
        matches!(self.kind, EntryKind::Parent | EntryKind::Directory)
    }

    /// The command line selecting this entry stands for.
    pub fn command_line(&self) -> String {
        match self.kind {
            EntryKind::Parent => format!("cd {}", PARENT_ENTRY_NAME),
            EntryKind::Directory => format!("cd {}", self.name),
            EntryKind::File => format!("open {}", self.name),
        }
    }

    /// Icon shown next to the entry name.
    pub fn icon(&self) -> &'static str {
        match self.kind {
            EntryKind::Parent | EntryKind::Directory => "📁",
            EntryKind::File => "📄",
        }
    }
}

/// Listing of one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Normalized absolute path of the listed directory
    pub path: String,
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    /// Build the listing of `dir` located at `path`.
    ///
    /// A parent entry is prepended unless `path` is the root.
    pub fn of(path: &str, dir: &FsEntry) -> Self {
        let parent = (path != ROOT_PATH).then(ListingEntry::parent);
        let entries = parent
            .into_iter()
            .chain(dir.children().iter().map(ListingEntry::from_entry))
            .collect();
        Self {
            path: path.to_string(),
            entries,
        }
    }

    /// Names of the entries, in display order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}
