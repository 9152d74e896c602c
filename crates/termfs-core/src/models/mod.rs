//! Data models for the navigator.
//!
//! Contains domain types for:
//! - [`FsEntry`], [`FileMetadata`], [`NodeKind`] - Virtual filesystem representation
//! - [`Snapshot`], [`SnapshotEntry`] - Tree document as read from disk
//! - [`Listing`], [`ListingEntry`], [`EntryKind`] - Directory listings handed to front ends
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{
    EntryKind, FileMetadata, FsEntry, Listing, ListingEntry, NodeKind, Snapshot, SnapshotEntry,
};
pub use terminal::{OutputLine, OutputLineData};
