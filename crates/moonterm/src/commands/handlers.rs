//! Built-in command handlers.
//!
//! Handlers either finish synchronously (render, then prompt) or hand a
//! request to a collaborator and leave the prompt to the reply.

use tracing::warn;

use super::registry::CommandRegistry;
use super::reply::error_line;
use crate::errors::TransportError;
use crate::terminal::{RenderSink, ThemeKind, NEWLINE};
use crate::transport::{Fetcher, Request, Transport};

const HELP_HEADER: &str =
    "welcome to the \x1b[33melectronic moon\x1b[0m! Try some of the commands below.";

/// Everything a handler may touch while it runs.
pub struct CommandContext<'a> {
    pub sink: &'a mut dyn RenderSink,
    pub transport: &'a mut dyn Transport,
    pub fetcher: &'a dyn Fetcher,
    pub theme: &'a mut ThemeKind,
    pub registry: &'a CommandRegistry,
    /// The cursor still sits right after the typed line.
    pub line_open: bool,
}

impl CommandContext<'_> {
    fn emit(&mut self, request: Request) {
        let topic = request.topic_name();
        if let Err(err) = self.transport.emit(request) {
            warn!(topic, error = %err, "request not sent");
            self.fail(&err);
        }
    }

    fn fail(&mut self, err: &TransportError) {
        if self.line_open {
            self.sink.write(NEWLINE);
        }
        self.sink.write(&error_line(err));
        self.sink.prompt();
    }

    fn usage(&mut self, usage: &str) {
        self.sink.write(&format!("usage: {usage}"));
        self.sink.prompt();
    }
}

pub fn ai(args: &[String], ctx: &mut CommandContext<'_>) {
    if args.is_empty() {
        ctx.usage("ai <question>");
        return;
    }
    ctx.emit(Request::Ai(args.join(" ")));
}

pub fn define(args: &[String], ctx: &mut CommandContext<'_>) {
    if args.is_empty() {
        ctx.usage("define <words...>");
        return;
    }
    ctx.emit(Request::Define(args.join(" ")));
}

pub fn help(_args: &[String], ctx: &mut CommandContext<'_>) {
    let mut lines = vec![HELP_HEADER.to_string(), String::new()];
    lines.extend(ctx.registry.help_lines());
    ctx.sink.writeln(&lines.join(NEWLINE));
    ctx.sink.prompt();
}

pub fn light(_args: &[String], ctx: &mut CommandContext<'_>) {
    *ctx.theme = ThemeKind::Light;
    ctx.sink.prompt();
}

pub fn dark(_args: &[String], ctx: &mut CommandContext<'_>) {
    *ctx.theme = ThemeKind::Dark;
    ctx.sink.prompt();
}

pub fn weather(_args: &[String], ctx: &mut CommandContext<'_>) {
    ctx.emit(Request::Weather);
}

pub fn stock(args: &[String], ctx: &mut CommandContext<'_>) {
    match args.first() {
        Some(symbol) => ctx.emit(Request::Stock(symbol.clone())),
        None => ctx.usage("stock <SYMBOL>"),
    }
}

pub fn joke(_args: &[String], ctx: &mut CommandContext<'_>) {
    ctx.fetcher.fetch_joke();
}
