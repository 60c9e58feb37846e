//! Per-terminal session state.
//!
//! One `Session` holds everything that changes while the user works: the
//! line being edited, the command history and the active colour theme.
//! It is owned by the app and lent to the editor and the dispatcher.

use crate::editor::{InputEvent, LineEditor};
use crate::history::{CommandLine, History};
use crate::terminal::{RenderSink, ThemeKind};

#[derive(Debug, Default)]
pub struct Session {
    pub editor: LineEditor,
    pub history: History,
    pub theme: ThemeKind,
}

impl Session {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            editor: LineEditor::new(),
            history: History::new(),
            theme,
        }
    }

    /// Feed one input event to the editor; returns a line on commit.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        sink: &mut dyn RenderSink,
    ) -> Option<CommandLine> {
        self.editor.handle(event, &mut self.history, sink)
    }

    /// Record a line after it has been dispatched.
    pub fn record(&mut self, line: CommandLine) {
        self.history.push(line);
    }

    /// Put the unfinished line back after output interrupted it.
    pub fn redisplay_pending(&self, sink: &mut dyn RenderSink) {
        let pending = self.editor.buffer();
        if !pending.is_empty() {
            sink.write(pending);
        }
    }
}
