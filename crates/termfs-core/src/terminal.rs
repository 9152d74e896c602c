//! Terminal session: the input surface in front of an [`Interpreter`].
//!
//! Trims and echoes input, keeps the rendered scrollback (which `clear`
//! empties) and turns clicks on listing entries into commands.

use std::collections::VecDeque;

use crate::commands::{Command, CommandResult, Interpreter, PathArg};
use crate::config::{MAX_SCROLLBACK, PARENT_ENTRY_NAME, PROMPT};
use crate::filesystem::VirtualFs;
use crate::models::{EntryKind, ListingEntry, OutputLine};

// ============================================================================
// Scrollback
// ============================================================================

/// Bounded history of rendered output lines. The oldest line is dropped once
/// `capacity` is reached.
#[derive(Clone, Debug)]
pub struct Scrollback {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl Scrollback {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "scrollback capacity must be greater than 0");
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + ExactSizeIterator {
        self.lines.iter()
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new(MAX_SCROLLBACK)
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// An interpreter plus what has been rendered for it so far.
#[derive(Clone, Debug)]
pub struct Terminal {
    interpreter: Interpreter,
    scrollback: Scrollback,
}

impl Terminal {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            scrollback: Scrollback::default(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Submit one line of input.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the input is
    /// echoed behind the prompt, dispatched, and its output recorded. The
    /// returned result carries only the command's own output, not the echo.
    pub fn submit(&mut self, raw: &str) -> Option<CommandResult> {
        let input = raw.trim();
        if input.is_empty() {
            return None;
        }

        self.scrollback.push(OutputLine::command(PROMPT, input));
        let result = self.interpreter.dispatch(input);
        Some(self.record(result))
    }

    /// Activate (click) a listing entry.
    ///
    /// The entry's command line is echoed, but the entry is acted on by name
    /// without reparsing it, so names with surrounding whitespace still work.
    /// Directories print an access notice first.
    pub fn activate(&mut self, entry: &ListingEntry) -> CommandResult {
        if entry.is_navigable() {
            self.scrollback.push(OutputLine::info(format!(
                "Accessing directory: {}...",
                entry.name
            )));
        }
        self.scrollback
            .push(OutputLine::command(PROMPT, entry.command_line()));

        let result = match entry.kind {
            EntryKind::Parent => self
                .interpreter
                .execute(Command::Cd(PathArg::new(PARENT_ENTRY_NAME))),
            EntryKind::Directory => {
                let target = VirtualFs::join_path(self.interpreter.current_path(), &entry.name);
                self.interpreter.move_to(&target).into()
            }
            EntryKind::File => self
                .interpreter
                .execute(Command::Open(PathArg::new(entry.name.as_str()))),
        };
        self.record(result)
    }

    fn record(&mut self, result: CommandResult) -> CommandResult {
        if result.clear_screen {
            self.scrollback.clear();
        } else {
            self.scrollback.extend(result.output.iter().cloned());
        }
        result
    }
}
