//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed input lines
//! - `CommandResult` for command execution results
//! - `Interpreter`, which owns the navigation state and dispatches lines
//!
//! # Architecture
//!
//! A raw line is parsed into a `Command`, then run by `execute_command`
//! against the interpreter's `NavigationState` and the shared `VirtualFs`.
//! Each line runs to completion before the next one is accepted.

mod execute;
mod result;

pub use execute::{cd_target, execute_command};
pub use result::CommandResult;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::ResolveError;
use crate::filesystem::VirtualFs;
use crate::models::Listing;
use crate::navigation::NavigationState;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd docs`, `open notes.txt`).
///
/// Stored as typed (trimmed, not validated); validation happens during
/// execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    Cd(PathArg),
    Back,
    Open(PathArg),
    /// Unrecognized input, kept verbatim (trimmed) for the error message
    Unknown(String),
}

impl Command {
    /// Recognized command names.
    pub fn names() -> &'static [&'static str] {
        &["back", "cd", "clear", "help", "ls", "open"]
    }

    /// Parse a raw input line.
    ///
    /// Keywords are case-sensitive. `cd` and `open` take the rest of the line
    /// as their argument, so names may contain spaces; without an argument
    /// they are not recognized.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        let (name, arg) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (input, None),
        };

        match (name, arg) {
            ("help" | "?", None) => Self::Help,
            ("clear", None) => Self::Clear,
            ("ls", None) => Self::Ls,
            ("back", None) => Self::Back,
            ("cd", Some(dir)) => Self::Cd(PathArg::new(dir)),
            ("open", Some(file)) => Self::Open(PathArg::new(file)),
            _ => Self::Unknown(input.to_string()),
        }
    }
}

// =============================================================================
// Interpreter
// =============================================================================

/// Command interpreter over a read-only tree.
///
/// Owns its navigation state; the tree may be shared between interpreters.
#[derive(Clone, Debug)]
pub struct Interpreter {
    fs: Arc<VirtualFs>,
    nav: NavigationState,
}

impl Interpreter {
    /// Create an interpreter positioned at the root of `fs`.
    pub fn new(fs: impl Into<Arc<VirtualFs>>) -> Self {
        Self {
            fs: fs.into(),
            nav: NavigationState::new(),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_path(&self) -> &str {
        self.nav.current_path()
    }

    /// Parse and execute one input line.
    pub fn dispatch(&mut self, line: &str) -> CommandResult {
        let cmd = Command::parse(line);
        debug!(?cmd, "dispatch");
        self.execute(cmd)
    }

    /// Execute an already parsed command.
    pub fn execute(&mut self, cmd: Command) -> CommandResult {
        execute_command(cmd, &mut self.nav, &self.fs)
    }

    /// Navigate to an absolute path.
    pub fn move_to(&mut self, path: &str) -> Result<Listing, ResolveError> {
        self.nav.move_to(&self.fs, path)
    }

    /// Listing of the current directory.
    pub fn listing(&self) -> Result<Listing, ResolveError> {
        self.nav.listing(&self.fs)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileMetadata, FsEntry, OutputLine};

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(FsEntry::directory(
            "",
            vec![
                FsEntry::directory(
                    "docs",
                    vec![FsEntry::file("readme.txt", FileMetadata::default())],
                ),
                FsEntry::directory("my files", vec![]),
                FsEntry::file("notes.txt", FileMetadata::default()),
            ],
        ))
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("ls"), Command::Ls);
        assert_eq!(Command::parse("back"), Command::Back);
        assert_eq!(Command::parse("  ls  "), Command::Ls);
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(Command::parse("cd docs"), Command::Cd(ref p) if p == &"docs"));
        assert!(matches!(Command::parse("cd   docs "), Command::Cd(ref p) if p == &"docs"));
        assert!(matches!(Command::parse("cd .."), Command::Cd(ref p) if p == &".."));
        assert!(matches!(Command::parse("cd my files"), Command::Cd(ref p) if p == &"my files"));
    }

    #[test]
    fn test_parse_open() {
        assert!(matches!(
            Command::parse("open notes.txt"),
            Command::Open(ref f) if f == &"notes.txt"
        ));
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(Command::parse("cd"), Command::Unknown("cd".to_string()));
        assert_eq!(Command::parse("open "), Command::Unknown("open".to_string()));
    }

    #[test]
    fn test_parse_case_sensitive() {
        assert_eq!(Command::parse("LS"), Command::Unknown("LS".to_string()));
        assert_eq!(Command::parse("Help"), Command::Unknown("Help".to_string()));
    }

    #[test]
    fn test_parse_extra_arguments() {
        assert_eq!(Command::parse("ls docs"), Command::Unknown("ls docs".to_string()));
        assert_eq!(Command::parse("back 2"), Command::Unknown("back 2".to_string()));
    }

    #[test]
    fn test_command_names() {
        let names = Command::names();
        for name in ["ls", "cd", "back", "open", "clear", "help"] {
            assert!(names.contains(&name));
        }
    }

    #[test]
    fn test_help_lists_commands() {
        let mut interp = Interpreter::new(create_test_fs());
        let result = interp.dispatch("help");
        let text: Vec<_> = result.output.iter().map(OutputLine::plain).collect();
        let text = text.join("\n");
        for name in Command::names() {
            assert!(text.contains(name), "help should mention {}", name);
        }
        assert!(result.listing.is_none());
    }

    #[test]
    fn test_clear_signals_caller() {
        let mut interp = Interpreter::new(create_test_fs());
        let result = interp.dispatch("clear");
        assert!(result.clear_screen);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cd_into_name_with_spaces() {
        let mut interp = Interpreter::new(create_test_fs());
        let result = interp.dispatch("cd my files");
        assert_eq!(interp.current_path(), "/my files");
        assert_eq!(result.listing.unwrap().names(), vec![".."]);
    }

    #[test]
    fn test_cd_absolute_argument() {
        let mut interp = Interpreter::new(create_test_fs());
        interp.dispatch("cd docs");
        interp.dispatch("cd /my files");
        assert_eq!(interp.current_path(), "/my files");
    }

    #[test]
    fn test_cd_root_resets_and_records() {
        let mut interp = Interpreter::new(create_test_fs());
        interp.dispatch("cd docs");

        let result = interp.dispatch("cd /");
        assert_eq!(interp.current_path(), "/");
        assert_eq!(interp.navigation().history(), ["/", "/docs", "/"]);
        assert_eq!(result.listing.unwrap().names(), vec!["docs", "my files", "notes.txt"]);
    }

    #[test]
    fn test_cd_into_file_fails() {
        let mut interp = Interpreter::new(create_test_fs());
        let result = interp.dispatch("cd notes.txt");
        assert_eq!(result.output, vec![OutputLine::error("Directory not found: notes.txt")]);
        assert!(result.listing.is_none());
        assert_eq!(interp.current_path(), "/");
    }

    #[test]
    fn test_back_without_history_is_noop() {
        let mut interp = Interpreter::new(create_test_fs());
        assert_eq!(interp.dispatch("back"), CommandResult::empty());
        assert_eq!(interp.current_path(), "/");
    }

    #[test]
    fn test_move_to_entry_point() {
        let mut interp = Interpreter::new(create_test_fs());
        let listing = interp.move_to("/docs").unwrap();
        assert_eq!(listing.names(), vec!["..", "readme.txt"]);
        assert_eq!(interp.listing().unwrap(), listing);
    }
}
