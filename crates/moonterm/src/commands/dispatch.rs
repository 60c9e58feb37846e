//! Execution of a routed line.

use tracing::debug;

use super::classify::RouteDecision;
use super::handlers::CommandContext;

/// Run a routed line against the registry in `ctx`.
pub fn dispatch(decision: RouteDecision, ctx: &mut CommandContext<'_>) {
    debug!(?decision, "dispatch");
    match decision {
        RouteDecision::Literal { name, args } => {
            ctx.sink.writeln("");
            invoke(&name, &args, ctx);
        }
        // The stock reply starts with its own newline.
        RouteDecision::StockSymbol(symbol) => {
            ctx.line_open = true;
            invoke("stock", &[symbol], ctx);
        }
        RouteDecision::NaturalLanguageQuery(text) => {
            ctx.sink.writeln("");
            invoke("ai", &[text], ctx);
        }
        RouteDecision::Unknown(name) => {
            ctx.sink.writeln("");
            not_found(&name, ctx);
        }
        RouteDecision::Empty => ctx.sink.prompt(),
    }
}

fn invoke(name: &str, args: &[String], ctx: &mut CommandContext<'_>) {
    let registry = ctx.registry;
    match registry.get(name) {
        Some(spec) => (spec.handler)(args, ctx),
        None => not_found(name, ctx),
    }
}

fn not_found(name: &str, ctx: &mut CommandContext<'_>) {
    ctx.sink.writeln(&format!("{name}: command not found"));
    ctx.sink.prompt();
}
