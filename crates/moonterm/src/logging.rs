//! File logging.
//!
//! The view owns the whole screen, so log lines go to a daily rolling file
//! under `~/.local/state/moonterm/` instead of stderr.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MOONTERM_LOG";

const DEFAULT_FILTER: &str = "info";
const QUIET_CRATES: &str = ",tungstenite=warn,reqwest=warn,hyper=warn";

pub fn log_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".local").join("state").join("moonterm"))
}

fn filter_directives(requested: Option<String>) -> String {
    let base = requested
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    format!("{base}{QUIET_CRATES}")
}

/// Install the global subscriber. Logging is skipped if the log directory
/// cannot be created.
pub fn init() {
    let directives = filter_directives(std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| {
        EnvFilter::new(filter_directives(None))
    });

    let Some(dir) = log_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let file_appender = tracing_appender::rolling::daily(&dir, "moonterm.log");
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
