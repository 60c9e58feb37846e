//! Application state.
//!
//! `App` owns the session, the terminal view and the collaborators. It is
//! only touched from the main loop; worker threads talk to it through
//! `AppEvent`s.

use crate::commands::CommandRegistry;
use crate::config::Config;
use crate::keymap::{parse_key_chord, KeyChord};
use crate::session::Session;
use crate::terminal::{RenderSink, TerminalView};
use crate::transport::{Fetcher, Transport};

pub const BANNER: &str = "Welcome to the electronic moon!";

pub struct App {
    pub session: Session,
    pub view: TerminalView,
    pub registry: CommandRegistry,
    pub transport: Box<dyn Transport>,
    pub fetcher: Box<dyn Fetcher>,
    pub quit_chord: Option<KeyChord>,
    pub scroll_up_chord: Option<KeyChord>,
    pub scroll_down_chord: Option<KeyChord>,
    pub should_quit: bool,
}

impl App {
    /// Build an app around the given collaborators and print the banner.
    pub fn with_collaborators(
        config: &Config,
        transport: Box<dyn Transport>,
        fetcher: Box<dyn Fetcher>,
        rows: u16,
        cols: u16,
    ) -> Self {
        let quit_chord = parse_key_chord(&config.keymap.quit);
        let scroll_up_chord = parse_key_chord(&config.keymap.scroll_up);
        let scroll_down_chord = parse_key_chord(&config.keymap.scroll_down);
        let mut app = Self {
            session: Session::new(config.ui.theme),
            view: TerminalView::new(rows, cols),
            registry: CommandRegistry::builtin(),
            transport,
            fetcher,
            quit_chord,
            scroll_up_chord,
            scroll_down_chord,
            should_quit: false,
        };
        app.view.writeln(BANNER);
        app.view.writeln("");
        app.view.prompt();
        app
    }

    /// Half a screen, used by the scroll chords.
    pub fn scroll_step(&self) -> isize {
        (self.view.rows() / 2).max(1) as isize
    }
}
