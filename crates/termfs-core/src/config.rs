//! Core configuration.
//!
//! Centralizes the constants shared by the interpreter and its front ends.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Usage text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Path of the root directory.
pub const ROOT_PATH: &str = "/";

/// Name of the synthetic entry that stands for the parent directory.
pub const PARENT_ENTRY_NAME: &str = "..";

/// Name of the single entry in the fallback tree used when the snapshot
/// cannot be loaded.
pub const FALLBACK_ENTRY_NAME: &str = "Error loading files";

/// Size shown for the fallback entry.
pub const FALLBACK_ENTRY_SIZE: &str = "-";

/// Snapshot location used by front ends when none is given.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/files.json";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Prompt shown before echoed input.
pub const PROMPT: &str = ">";

/// Maximum number of rendered lines kept in a terminal's scrollback.
pub const MAX_SCROLLBACK: usize = 1000;
