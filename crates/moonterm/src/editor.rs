//! The line editor: raw input data in, committed command lines out.
//!
//! Every event is applied synchronously. The buffer only ever holds the
//! line being typed; the prompt in front of it belongs to the view and
//! can never be erased.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::history::{CommandLine, History};
use crate::terminal::{RenderSink, PROMPT_WIDTH};

/// Moves back one column, blanks it, moves back again.
pub const ERASE: &str = "\x08 \x08";

const INTERRUPT_MARKER: &str = "^C";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Anything that is not one of the editing keys, echoed verbatim.
    Text(String),
    Backspace,
    Interrupt,
    Commit,
    RecallPrevious,
    RecallNext,
}

impl InputEvent {
    /// Decode a chunk of terminal input data.
    pub fn from_data(data: &str) -> Self {
        match data {
            "\u{3}" => InputEvent::Interrupt,
            "\r" => InputEvent::Commit,
            "\u{7f}" => InputEvent::Backspace,
            "\x1b[A" => InputEvent::RecallPrevious,
            "\x1b[B" => InputEvent::RecallNext,
            other => InputEvent::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Apply one input event. Returns the line when the event commits it.
    ///
    /// The committed line is not pushed to `history`; the caller dispatches
    /// it first and records it afterwards.
    pub fn handle(
        &mut self,
        event: InputEvent,
        history: &mut History,
        sink: &mut dyn RenderSink,
    ) -> Option<CommandLine> {
        match event {
            InputEvent::Text(text) => {
                self.buffer.push_str(&text);
                sink.write(&text);
            }
            InputEvent::Backspace => {
                if sink.cursor_column() > PROMPT_WIDTH {
                    if let Some(ch) = self.buffer.pop() {
                        erase_columns(sink, ch.width().unwrap_or(0));
                    }
                }
            }
            InputEvent::Interrupt => {
                sink.write(INTERRUPT_MARKER);
                self.buffer.clear();
                sink.prompt();
            }
            InputEvent::Commit => {
                let line = CommandLine::new(std::mem::take(&mut self.buffer));
                return Some(line);
            }
            InputEvent::RecallPrevious => {
                if !history.is_empty() {
                    let recalled = history.recall_previous().to_string();
                    self.replace_line(recalled, sink);
                }
            }
            InputEvent::RecallNext => {
                if !history.is_empty() {
                    let recalled = history.recall_next().to_string();
                    self.replace_line(recalled, sink);
                }
            }
        }
        None
    }

    fn replace_line(&mut self, line: String, sink: &mut dyn RenderSink) {
        erase_columns(sink, self.buffer.width());
        sink.write(&line);
        self.buffer = line;
    }
}

fn erase_columns(sink: &mut dyn RenderSink, columns: usize) {
    if columns == 0 {
        return;
    }
    sink.write(&ERASE.repeat(columns));
}
