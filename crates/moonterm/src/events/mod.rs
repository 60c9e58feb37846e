//! Application event types.
//!
//! Everything the main loop reacts to arrives as an `AppEvent` over one
//! mpsc channel: key and paste events from the input thread, replies and
//! connection changes from the socket worker, and finished HTTP fetches.
//! Events are processed one at a time, to completion, before the next.

use crossterm::event::KeyEvent;

use crate::errors::FetchError;
use crate::transport::{Reply, TransportStatus};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    /// New terminal size as `(rows, cols)`.
    Resize(u16, u16),
    Reply(Reply),
    Joke(Result<String, FetchError>),
    Transport(TransportStatus),
}
