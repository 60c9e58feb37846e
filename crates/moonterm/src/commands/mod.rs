//! Command routing and execution.
//!
//! This module takes a committed line from the editor to its output:
//! - Classification: literal command, ticker symbol or question (classify.rs)
//! - Registry: command specs, descriptions and help text (registry.rs)
//! - Dispatch: invoking the routed handler (dispatch.rs, handlers.rs)
//! - Replies: rendering asynchronous results (reply.rs)
//!
//! Arguments are plain whitespace-separated words; there is no quoting,
//! piping or chaining.

mod classify;
mod dispatch;
mod handlers;
mod registry;
mod reply;

pub use classify::classify;
pub use dispatch::dispatch;
pub use handlers::CommandContext;
pub use registry::CommandRegistry;
pub use reply::{render_joke, render_reply, render_status};
