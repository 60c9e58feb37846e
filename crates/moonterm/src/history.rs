//! Command history with a recall cursor.
//!
//! Entries are append-only. Recall only moves the cursor; a cursor equal
//! to the number of entries means "not recalling" and yields a blank line.

use std::fmt;

/// One committed line of input. Never changes after commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<CommandLine>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a committed line and reset the cursor past the end.
    pub fn push(&mut self, line: CommandLine) {
        self.entries.push(line);
        self.cursor = self.entries.len();
    }

    /// Step back one entry. Stays on the oldest entry once reached.
    pub fn recall_previous(&mut self) -> &str {
        if self.entries.is_empty() {
            return "";
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Step forward one entry; past the newest entry the line is blank.
    pub fn recall_next(&mut self) -> &str {
        self.cursor = (self.cursor + 1).min(self.entries.len());
        self.current()
    }

    pub fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(CommandLine::as_str)
            .unwrap_or("")
    }
}
