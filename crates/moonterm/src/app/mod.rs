//! Application orchestration and main event loop.
//!
//! This module owns the core application lifecycle:
//! - Initialization (terminal setup, config loading, collaborators)
//! - Event loop (keys, paste, socket replies, HTTP results)
//! - UI rendering delegation
//!
//! The app is structured around a single `App` struct that holds
//! all state. Events are processed sequentially in the main loop.
//!
//! Submodules:
//! - state: App struct and startup banner
//! - runner: main loop and terminal setup
//! - input: event handling and command execution
//! - render: drawing the terminal view

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
