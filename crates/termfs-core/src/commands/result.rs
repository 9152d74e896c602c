//! Command execution result type.

use crate::error::ResolveError;
use crate::models::{Listing, OutputLine};

/// Result of executing a command.
///
/// Commands produce output lines and may hand back a listing of the current
/// directory or ask the caller to discard what it rendered so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Directory listing to display (`ls`, and successful `cd`/`back`)
    pub listing: Option<Listing>,
    /// Discard all previously rendered output (`clear`)
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result carrying a listing.
    pub fn listing(listing: Listing) -> Self {
        Self {
            listing: Some(listing),
            ..Self::default()
        }
    }

    /// Create a result that clears the screen.
    pub fn clear() -> Self {
        Self {
            clear_screen: true,
            ..Self::default()
        }
    }

    /// Create an empty result (no output, no listing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single error line.
    pub fn error(message: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::error(message)])
    }
}

impl From<Result<Listing, ResolveError>> for CommandResult {
    /// A listing on success, a single error line on failure.
    fn from(result: Result<Listing, ResolveError>) -> Self {
        match result {
            Ok(listing) => Self::listing(listing),
            Err(err) => Self::error(err.to_string()),
        }
    }
}
