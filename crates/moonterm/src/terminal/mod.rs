//! Terminal view and rendering.
//!
//! This module owns the output side of the shell:
//! - The `RenderSink` contract every handler writes through
//! - The vt100-backed view that implements it (view.rs)
//! - Rendering the view to ratatui lines (render.rs)
//! - Light/dark colour presets (theme.rs)

mod render;
mod theme;
mod view;

pub use render::base_style;
pub use theme::ThemeKind;
pub use view::TerminalView;

pub const NEWLINE: &str = "\r\n";

/// Visible prompt text; also the width of the non-erasable prompt region.
pub const PROMPT_TEXT: &str = "electric@moon:~$ ";
pub const PROMPT_WIDTH: u16 = 17;

/// Where the shell writes its output.
///
/// Text is raw terminal output: ANSI escapes are honoured and `\r\n`
/// ends a line.
pub trait RenderSink {
    fn write(&mut self, text: &str);

    /// Column of the output cursor on its current row.
    fn cursor_column(&self) -> u16;

    fn writeln(&mut self, text: &str) {
        self.write(text);
        self.write(NEWLINE);
    }

    /// Start a fresh line with the coloured prompt.
    fn prompt(&mut self) {
        self.write(&format!("{NEWLINE}\x1b[32m{PROMPT_TEXT}\x1b[0m"));
    }
}
