//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single line of output with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering in front ends
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echoed input with its prompt
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Progress or status notice
    Info(String),
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// The line as plain text, without styling.
    pub fn plain(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{} {}", prompt, input),
            OutputLineData::Text(s) | OutputLineData::Error(s) | OutputLineData::Info(s) => {
                s.clone()
            }
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are identity, not content
        self.data == other.data
    }
}
