//! Navigation state: current position and visit history.

use tracing::debug;

use crate::config::ROOT_PATH;
use crate::error::ResolveError;
use crate::filesystem::VirtualFs;
use crate::models::{FsEntry, Listing};

/// Current position inside a [`VirtualFs`] plus the paths visited so far.
///
/// Paths are only stored after the resolver accepted them, so as long as the
/// tree is immutable `current_path` always names an existing directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    /// Visited normalized paths, oldest first. The last entry is the current
    /// path.
    history: Vec<String>,
}

impl NavigationState {
    /// Start at the root.
    pub fn new() -> Self {
        Self {
            current_path: ROOT_PATH.to_string(),
            history: vec![ROOT_PATH.to_string()],
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The directory node at the current path.
    pub fn current_dir<'a>(&self, fs: &'a VirtualFs) -> Result<&'a FsEntry, ResolveError> {
        fs.get_dir(&self.current_path)
    }

    /// Listing of the current directory.
    pub fn listing(&self, fs: &VirtualFs) -> Result<Listing, ResolveError> {
        let dir = self.current_dir(fs)?;
        Ok(Listing::of(&self.current_path, dir))
    }

    /// Move to `path`, resolved against the root.
    ///
    /// On success the normalized path becomes current and is appended to the
    /// history. On failure nothing changes.
    pub fn move_to(&mut self, fs: &VirtualFs, path: &str) -> Result<Listing, ResolveError> {
        let dir = fs.get_dir(path)?;
        let normalized = VirtualFs::normalize_path(path);
        debug!(from = %self.current_path, to = %normalized, "navigate");

        let listing = Listing::of(&normalized, dir);
        self.history.push(normalized.clone());
        self.current_path = normalized;
        Ok(listing)
    }

    /// Step back to the previously visited path.
    ///
    /// Returns `None` when fewer than two paths were visited. Otherwise the
    /// current path and the one before it are popped, and the latter is
    /// navigated to again, which pushes it back. Paths reached through `back`
    /// therefore re-enter the history instead of the history acting as an
    /// undo stack; front ends rely on this ordering.
    pub fn step_back(&mut self, fs: &VirtualFs) -> Option<Result<Listing, ResolveError>> {
        let len = self.history.len();
        if len < 2 {
            return None;
        }

        let target = self.history[len - 2].clone();
        if let Err(err) = fs.get_dir(&target) {
            return Some(Err(err));
        }

        self.history.truncate(len - 2);
        Some(self.move_to(fs, &target))
    }

    /// Navigate to the root.
    pub fn reset(&mut self, fs: &VirtualFs) -> Result<Listing, ResolveError> {
        self.move_to(fs, ROOT_PATH)
    }

    /// Parent of a normalized path, `"/"` once no segments remain.
    pub fn parent_of(path: &str) -> String {
        VirtualFs::parent_path(path)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileMetadata;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(FsEntry::directory(
            "",
            vec![
                FsEntry::directory(
                    "docs",
                    vec![
                        FsEntry::file("readme.txt", FileMetadata::default()),
                        FsEntry::directory("sub", vec![]),
                    ],
                ),
                FsEntry::file("notes.txt", FileMetadata::default()),
            ],
        ))
    }

    #[test]
    fn test_starts_at_root() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_path(), "/");
        assert_eq!(nav.history(), ["/"]);
    }

    #[test]
    fn test_move_to_normalizes_and_records() {
        let fs = create_test_fs();
        let mut nav = NavigationState::new();

        let listing = nav.move_to(&fs, "//docs/sub/").unwrap();
        assert_eq!(nav.current_path(), "/docs/sub");
        assert_eq!(listing.path, "/docs/sub");
        assert_eq!(listing.names(), vec![".."]);
        assert_eq!(nav.history(), ["/", "/docs/sub"]);
    }

    #[test]
    fn test_move_to_failure_leaves_state() {
        let fs = create_test_fs();
        let mut nav = NavigationState::new();
        nav.move_to(&fs, "/docs").unwrap();
        let before = nav.clone();

        let err = nav.move_to(&fs, "/docs/readme.txt").unwrap_err();
        assert_eq!(err, ResolveError::DirectoryNotFound("readme.txt".to_string()));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_step_back_needs_two_entries() {
        let fs = create_test_fs();
        let mut nav = NavigationState::new();
        assert!(nav.step_back(&fs).is_none());
        assert_eq!(nav.history(), ["/"]);
    }

    #[test]
    fn test_step_back_repushes_target() {
        let fs = create_test_fs();
        let mut nav = NavigationState::new();
        nav.move_to(&fs, "/docs").unwrap();
        nav.move_to(&fs, "/docs/sub").unwrap();

        let listing = nav.step_back(&fs).unwrap().unwrap();
        assert_eq!(listing.path, "/docs");
        assert_eq!(nav.current_path(), "/docs");
        assert_eq!(nav.history(), ["/", "/docs"]);
    }

    #[test]
    fn test_step_back_onto_missing_path_leaves_state() {
        let fs = create_test_fs();
        let mut nav = NavigationState {
            current_path: "/docs".to_string(),
            history: vec!["/gone".to_string(), "/docs".to_string()],
        };
        let before = nav.clone();

        let result = nav.step_back(&fs).unwrap();
        assert_eq!(result, Err(ResolveError::DirectoryNotFound("gone".to_string())));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_reset() {
        let fs = create_test_fs();
        let mut nav = NavigationState::new();
        nav.move_to(&fs, "/docs/sub").unwrap();

        let listing = nav.reset(&fs).unwrap();
        assert_eq!(nav.current_path(), "/");
        assert_eq!(listing.names(), vec!["docs", "notes.txt"]);
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(NavigationState::parent_of("/a/b"), "/a");
        assert_eq!(NavigationState::parent_of("/a"), "/");
        assert_eq!(NavigationState::parent_of("/"), "/");
    }
}
