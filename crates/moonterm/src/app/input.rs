//! Event handling.
//!
//! Keys bound to an app chord (quit, scrolling) are handled here; every
//! other key is encoded to terminal data and fed to the line editor. A
//! committed line is classified, dispatched and then recorded in history.

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::commands::{classify, dispatch, render_joke, render_reply, render_status, CommandContext};
use crate::editor::InputEvent;
use crate::events::AppEvent;
use crate::history::CommandLine;
use crate::keymap::{key_event_to_data, matches_chord, KeyChord};

use super::state::App;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Paste(text) => feed(app, InputEvent::Text(text)),
        AppEvent::Resize(rows, cols) => app.view.resize(rows, cols),
        AppEvent::Reply(reply) => {
            debug!(topic = reply.topic.name(), "reply");
            let prompted = render_reply(&reply, &mut app.view);
            after_async_output(app, prompted);
        }
        AppEvent::Joke(result) => {
            let prompted = render_joke(&result, &mut app.view);
            after_async_output(app, prompted);
        }
        AppEvent::Transport(status) => {
            info!(?status, "transport status");
            let prompted = render_status(&status, &mut app.view);
            after_async_output(app, prompted);
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if chord_hit(key, app.quit_chord.as_ref()) {
        app.should_quit = true;
        return;
    }
    if chord_hit(key, app.scroll_up_chord.as_ref()) {
        let step = app.scroll_step();
        app.view.scroll_lines(step);
        return;
    }
    if chord_hit(key, app.scroll_down_chord.as_ref()) {
        let step = app.scroll_step();
        app.view.scroll_lines(-step);
        return;
    }

    let Some(data) = key_event_to_data(key) else {
        return;
    };
    feed(app, InputEvent::from_data(&data));
}

fn chord_hit(key: KeyEvent, chord: Option<&KeyChord>) -> bool {
    chord.is_some_and(|chord| matches_chord(key, chord))
}

fn feed(app: &mut App, event: InputEvent) {
    if let Some(line) = app.session.handle_input(event, &mut app.view) {
        run_line(app, line);
    }
}

fn run_line(app: &mut App, line: CommandLine) {
    let decision = classify(line.as_str(), &app.registry);
    info!(line = %line, ?decision, "run");
    let mut ctx = CommandContext {
        sink: &mut app.view,
        transport: app.transport.as_mut(),
        fetcher: app.fetcher.as_ref(),
        theme: &mut app.session.theme,
        registry: &app.registry,
        line_open: false,
    };
    dispatch(decision, &mut ctx);
    app.session.record(line);
}

/// Output arrived in the middle of typing: put the pending line back.
fn after_async_output(app: &mut App, prompted: bool) {
    if prompted {
        app.session.redisplay_pending(&mut app.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;

    use crate::config::Config;
    use crate::errors::TransportError;
    use crate::terminal::ThemeKind;
    use crate::test_utils::RecordingFetcher;
    use crate::transport::{Reply, Request, Topic, Transport, TransportStatus};

    #[derive(Clone, Default)]
    struct SharedTransport(Rc<RefCell<Vec<Request>>>);

    impl Transport for SharedTransport {
        fn emit(&mut self, request: Request) -> Result<(), TransportError> {
            self.0.borrow_mut().push(request);
            Ok(())
        }
    }

    fn app() -> (App, SharedTransport) {
        let transport = SharedTransport::default();
        let app = App::with_collaborators(
            &Config::default(),
            Box::new(transport.clone()),
            Box::new(RecordingFetcher::default()),
            20,
            90,
        );
        (app, transport)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_event(app, key(KeyCode::Char(ch)));
        }
    }

    fn submit(app: &mut App, text: &str) {
        type_line(app, text);
        handle_event(app, key(KeyCode::Enter));
    }

    fn last_line(app: &App) -> String {
        app.view
            .contents()
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .last()
            .unwrap_or_default()
    }

    #[test]
    fn startup_prints_banner_and_prompt() {
        let (app, _) = app();
        let contents = app.view.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0].trim_end(), "Welcome to the electronic moon!");
        assert_eq!(lines[1].trim_end(), "");
        assert_eq!(lines[2].trim_end(), "");
        assert_eq!(lines[3].trim_end(), "electric@moon:~$");
        assert_eq!(app.view.cursor_position(), (3, 17));
    }

    #[test]
    fn committed_lines_run_and_land_in_history() {
        let (mut app, _) = app();
        submit(&mut app, "help");
        assert!(app.view.contents().contains("Try some of the commands below."));
        assert_eq!(app.session.history.len(), 1);
        assert_eq!(app.session.editor.buffer(), "");
    }

    #[test]
    fn up_arrow_recalls_previous_line() {
        let (mut app, _) = app();
        submit(&mut app, "moonwalk");
        assert!(app.view.contents().contains("moonwalk: command not found"));
        handle_event(&mut app, key(KeyCode::Up));
        assert_eq!(app.session.editor.buffer(), "moonwalk");
        assert_eq!(last_line(&app), "electric@moon:~$ moonwalk");
    }

    #[test]
    fn empty_lines_are_recorded_too() {
        let (mut app, _) = app();
        submit(&mut app, "");
        assert_eq!(app.session.history.len(), 1);
    }

    #[test]
    fn all_caps_line_requests_a_quote() {
        let (mut app, transport) = app();
        submit(&mut app, "AAPL");
        assert_eq!(*transport.0.borrow(), vec![Request::Stock("AAPL".to_string())]);
    }

    #[test]
    fn quit_chord_is_not_echoed() {
        let (mut app, _) = app();
        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
        assert_eq!(app.session.editor.buffer(), "");
    }

    #[test]
    fn ctrl_c_discards_the_line() {
        let (mut app, transport) = app();
        type_line(&mut app, "weather");
        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert_eq!(app.session.editor.buffer(), "");
        assert!(app.view.contents().contains("weather^C"));
        assert!(transport.0.borrow().is_empty());
        assert!(app.session.history.is_empty());
    }

    #[test]
    fn reply_restores_pending_input() {
        let (mut app, _) = app();
        type_line(&mut app, "wea");
        handle_event(
            &mut app,
            AppEvent::Reply(Reply {
                topic: Topic::Ai,
                data: json!("the moon says hi"),
            }),
        );
        assert!(app.view.contents().contains("the moon says hi"));
        assert_eq!(last_line(&app), "electric@moon:~$ wea");
        assert_eq!(app.session.editor.buffer(), "wea");
    }

    #[test]
    fn memo_reply_changes_nothing() {
        let (mut app, _) = app();
        let before = app.view.contents();
        handle_event(
            &mut app,
            AppEvent::Reply(Reply {
                topic: Topic::Memo,
                data: json!("ignored"),
            }),
        );
        assert_eq!(app.view.contents(), before);
    }

    #[test]
    fn joke_result_is_printed() {
        let (mut app, _) = app();
        submit(&mut app, "joke");
        handle_event(&mut app, AppEvent::Joke(Ok("moon pie".to_string())));
        assert!(app.view.contents().contains("moon pie"));
        assert_eq!(last_line(&app), "electric@moon:~$");
    }

    #[test]
    fn disconnect_is_shown_in_the_view() {
        let (mut app, _) = app();
        handle_event(
            &mut app,
            AppEvent::Transport(TransportStatus::Disconnected(None)),
        );
        assert!(app.view.contents().contains("terminal disconnected..."));
    }

    #[test]
    fn paste_is_appended_as_text() {
        let (mut app, _) = app();
        handle_event(&mut app, AppEvent::Paste("define moon".to_string()));
        assert_eq!(app.session.editor.buffer(), "define moon");
    }

    #[test]
    fn theme_commands_update_the_session() {
        let (mut app, _) = app();
        submit(&mut app, "light");
        assert_eq!(app.session.theme, ThemeKind::Light);
        submit(&mut app, "dark");
        assert_eq!(app.session.theme, ThemeKind::Dark);
    }

    #[test]
    fn scroll_chords_move_through_scrollback() {
        let (mut app, _) = app();
        for _ in 0..30 {
            submit(&mut app, "nope");
        }
        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::PageUp, KeyModifiers::SHIFT)),
        );
        assert_eq!(app.view.scrollback(), 10);
        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::PageDown, KeyModifiers::SHIFT)),
        );
        assert_eq!(app.view.scrollback(), 0);
    }

    #[test]
    fn resize_event_resizes_the_view() {
        let (mut app, _) = app();
        handle_event(&mut app, AppEvent::Resize(40, 120));
        assert_eq!((app.view.rows(), app.view.cols()), (40, 120));
    }
}
