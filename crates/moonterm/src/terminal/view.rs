//! The terminal view: a vt100 screen model fed by the shell.
//!
//! Everything the shell prints goes through here as raw text with ANSI
//! escapes, exactly as it would be written to a real terminal. The view
//! keeps the screen grid, the cursor and a scrollback buffer; the app
//! draws it with ratatui each frame.

use vt100::Parser;

use super::render::render_lines;
use super::theme::Theme;
use super::RenderSink;

pub const SCROLLBACK_LINES: usize = 1000;

pub struct TerminalView {
    parser: Parser,
    rows: u16,
    cols: u16,
}

impl TerminalView {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            parser: Parser::new(rows.max(1), cols.max(1), SCROLLBACK_LINES),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Current scrollback offset (0 = bottom, positive = scrolled up).
    pub fn scrollback(&self) -> usize {
        self.parser.screen().scrollback()
    }

    /// Scroll by delta lines (positive = up, negative = down).
    pub fn scroll_lines(&mut self, delta: isize) {
        if delta == 0 {
            return;
        }
        let current = self.parser.screen().scrollback() as isize;
        let next = (current + delta).clamp(0, SCROLLBACK_LINES as isize) as usize;
        self.parser.set_scrollback(next);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.parser.set_scrollback(0);
    }

    pub fn resize(&mut self, rows: u16, cols: u16) {
        let rows = rows.max(1);
        let cols = cols.max(1);
        if rows == self.rows && cols == self.cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.parser.set_size(rows, cols);
    }

    /// Visible screen text, one line per row with trailing blanks trimmed.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    pub fn cursor_position(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }

    pub fn render_lines(&self, theme: &Theme) -> Vec<ratatui::text::Line<'static>> {
        render_lines(&self.parser, self.rows, self.cols, theme)
    }
}

impl RenderSink for TerminalView {
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // New output always snaps back to the live screen.
        if self.scrollback() != 0 {
            self.scroll_to_bottom();
        }
        self.parser.process(text.as_bytes());
    }

    fn cursor_column(&self) -> u16 {
        self.parser.screen().cursor_position().1
    }
}
