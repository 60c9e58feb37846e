//! Rendering of asynchronous replies.
//!
//! Each function returns `true` when it redisplayed the prompt, so the
//! caller knows to re-echo any line the user had started typing.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::errors::FetchError;
use crate::format::{format_stock, format_weather, parse_stock, parse_weather};
use crate::terminal::{RenderSink, NEWLINE};
use crate::transport::{Reply, Topic, TransportStatus};

pub const DISCONNECTED_NOTICE: &str = "terminal disconnected...";

/// A red `error: ...` line.
pub fn error_line(err: impl fmt::Display) -> String {
    format!("\x1b[31merror: {err}\x1b[0m")
}

pub fn render_reply(reply: &Reply, sink: &mut dyn RenderSink) -> bool {
    match reply.topic {
        Topic::Ai | Topic::Define => {
            wrap_message(sink, &message_text(&reply.data));
        }
        Topic::Weather => match parse_weather(&reply.data) {
            Ok(report) => write_table(sink, &format_weather(&report)),
            Err(err) => write_failure(sink, &err),
        },
        Topic::Stock => match parse_stock(&reply.data) {
            Ok(quote) => write_table(sink, &format_stock(&quote)),
            Err(err) => write_failure(sink, &err),
        },
        Topic::Memo => return false,
    }
    true
}

pub fn render_joke(result: &Result<String, FetchError>, sink: &mut dyn RenderSink) -> bool {
    match result {
        Ok(content) => {
            sink.writeln(&format!("{NEWLINE}{}", content.trim()));
            sink.prompt();
        }
        Err(err) => write_failure(sink, err),
    }
    true
}

pub fn render_status(status: &TransportStatus, sink: &mut dyn RenderSink) -> bool {
    match status {
        TransportStatus::Connected => false,
        TransportStatus::Disconnected(reason) => {
            if let Some(reason) = reason {
                debug!(%reason, "transport dropped");
            }
            sink.write(NEWLINE);
            sink.write(DISCONNECTED_NOTICE);
            sink.prompt();
            true
        }
    }
}

fn message_text(data: &Value) -> String {
    match data {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn wrap_message(sink: &mut dyn RenderSink, message: &str) {
    sink.writeln("");
    sink.write(&to_crlf(message));
    sink.writeln("");
    sink.prompt();
}

fn write_table(sink: &mut dyn RenderSink, table: &str) {
    sink.write(&format!("{NEWLINE}{}", to_crlf(table)));
    sink.prompt();
}

fn write_failure(sink: &mut dyn RenderSink, err: &dyn fmt::Display) {
    sink.write(NEWLINE);
    sink.write(&error_line(err));
    sink.prompt();
}

/// Bare line feeds only move the cursor down; pair each with a return.
fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', NEWLINE)
}
