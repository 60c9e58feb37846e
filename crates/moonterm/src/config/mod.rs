//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local file taking precedence:
//! 1. User-level: `$XDG_CONFIG_HOME/moonterm/config.toml`
//! 2. Local: `<cwd>/.moonterm/config.toml`
//!
//! `MOONTERM_ENDPOINT` overrides the server endpoint from either file.
//! Uses TOML format with serde.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::terminal::ThemeKind;

const DEFAULT_ENDPOINT: &str = "localhost:8888";
const DEFAULT_QUIT: &str = "ctrl+q";
const DEFAULT_SCROLL_UP: &str = "shift+pageup";
const DEFAULT_SCROLL_DOWN: &str = "shift+pagedown";

pub const ENDPOINT_ENV: &str = "MOONTERM_ENDPOINT";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `host:port` shared by the websocket and the HTTP endpoints.
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub theme: ThemeKind,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub quit: String,
    pub scroll_up: String,
    pub scroll_down: String,
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    server: Option<RawServer>,
    ui: Option<RawUi>,
    keymap: Option<RawKeymap>,
}

#[derive(Debug, Default, Deserialize)]
struct RawServer {
    endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUi {
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    quit: Option<String>,
    #[serde(alias = "scrollUp")]
    scroll_up: Option<String>,
    #[serde(alias = "scrollDown")]
    scroll_down: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unparsable config");
            None
        }
    }
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_server = local.as_ref().and_then(|c| c.server.as_ref());
    let user_server = user.as_ref().and_then(|c| c.server.as_ref());
    let endpoint = local_server
        .and_then(|s| s.endpoint.clone())
        .or_else(|| user_server.and_then(|s| s.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let local_ui = local.as_ref().and_then(|c| c.ui.as_ref());
    let user_ui = user.as_ref().and_then(|c| c.ui.as_ref());
    let theme = local_ui
        .and_then(|u| u.theme.clone())
        .or_else(|| user_ui.and_then(|u| u.theme.clone()))
        .map(|name| {
            ThemeKind::parse(&name).unwrap_or_else(|| {
                warn!(theme = %name, "unknown theme, using dark");
                ThemeKind::Dark
            })
        })
        .unwrap_or_default();

    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let quit = local_keymap
        .and_then(|k| k.quit.clone())
        .or_else(|| user_keymap.and_then(|k| k.quit.clone()))
        .unwrap_or_else(|| DEFAULT_QUIT.to_string());
    let scroll_up = local_keymap
        .and_then(|k| k.scroll_up.clone())
        .or_else(|| user_keymap.and_then(|k| k.scroll_up.clone()))
        .unwrap_or_else(|| DEFAULT_SCROLL_UP.to_string());
    let scroll_down = local_keymap
        .and_then(|k| k.scroll_down.clone())
        .or_else(|| user_keymap.and_then(|k| k.scroll_down.clone()))
        .unwrap_or_else(|| DEFAULT_SCROLL_DOWN.to_string());

    Config {
        server: ServerConfig { endpoint },
        ui: UiConfig { theme },
        keymap: KeymapConfig {
            quit,
            scroll_up,
            scroll_down,
        },
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            config.server.endpoint = endpoint.to_string();
        }
    }
}

pub fn local_config_path(root: &Path) -> PathBuf {
    root.join(".moonterm").join("config.toml")
}

pub fn user_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("moonterm").join("config.toml"))
}

pub fn load_config(root: &Path) -> Config {
    let local_config = read_toml(&local_config_path(root));
    let user_config = user_config_path().and_then(|path| read_toml(&path));

    let mut config = merge_config(user_config, local_config);
    apply_env_overrides(&mut config);
    config
}

#[cfg(test)]
mod tests;
