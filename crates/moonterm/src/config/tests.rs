use super::{load_config, local_config_path, user_config_path, ENDPOINT_ENV};
use crate::terminal::ThemeKind;
use crate::test_utils::{env_lock, EnvVarGuard};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

struct IsolatedHome {
    _home: TempDir,
    config_home: TempDir,
    _guards: Vec<EnvVarGuard>,
}

fn isolated_home() -> IsolatedHome {
    let home = TempDir::new().expect("temp home");
    let config_home = TempDir::new().expect("temp config");
    let guards = vec![
        EnvVarGuard::set("HOME", home.path()),
        EnvVarGuard::set("XDG_CONFIG_HOME", config_home.path()),
        EnvVarGuard::unset(ENDPOINT_ENV),
    ];
    IsolatedHome {
        _home: home,
        config_home,
        _guards: guards,
    }
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let _guard = env_lock();
    let _home = isolated_home();

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());

    assert_eq!(config.server.endpoint, "localhost:8888");
    assert_eq!(config.ui.theme, ThemeKind::Dark);
    assert_eq!(config.keymap.quit, "ctrl+q");
    assert_eq!(config.keymap.scroll_up, "shift+pageup");
    assert_eq!(config.keymap.scroll_down, "shift+pagedown");
}

#[test]
fn user_config_lives_under_config_dir() {
    let _guard = env_lock();
    let home = isolated_home();

    let path = user_config_path().expect("user config path");
    assert_eq!(
        path,
        home.config_home.path().join("moonterm").join("config.toml")
    );
}

#[test]
fn load_config_merges_user_and_local() {
    let _guard = env_lock();
    let home = isolated_home();

    write_config(
        &home.config_home.path().join("moonterm").join("config.toml"),
        r#"
[server]
endpoint = "moon.example:9000"

[ui]
theme = "light"

[keymap]
quit = "ctrl+x"
scroll_up = "ctrl+up"
"#,
    );

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        r#"
[keymap]
quit = "ctrl+d"
"#,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.server.endpoint, "moon.example:9000");
    assert_eq!(config.ui.theme, ThemeKind::Light);
    assert_eq!(config.keymap.quit, "ctrl+d");
    assert_eq!(config.keymap.scroll_up, "ctrl+up");
    assert_eq!(config.keymap.scroll_down, "shift+pagedown");
}

#[test]
fn local_config_wins_over_user_config() {
    let _guard = env_lock();
    let home = isolated_home();

    write_config(
        &home.config_home.path().join("moonterm").join("config.toml"),
        "[ui]\ntheme = \"light\"\n",
    );
    let cwd = TempDir::new().expect("temp cwd");
    write_config(&local_config_path(cwd.path()), "[ui]\ntheme = \"dark\"\n");

    let config = load_config(cwd.path());
    assert_eq!(config.ui.theme, ThemeKind::Dark);
}

#[test]
fn endpoint_env_overrides_files() {
    let _guard = env_lock();
    let _home = isolated_home();

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        "[server]\nendpoint = \"from-file:1\"\n",
    );
    let _endpoint = EnvVarGuard::set(ENDPOINT_ENV, "from-env:2");

    let config = load_config(cwd.path());
    assert_eq!(config.server.endpoint, "from-env:2");
}

#[test]
fn blank_endpoint_env_is_ignored() {
    let _guard = env_lock();
    let _home = isolated_home();
    let _endpoint = EnvVarGuard::set(ENDPOINT_ENV, "  ");

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());
    assert_eq!(config.server.endpoint, "localhost:8888");
}

#[test]
fn unparsable_or_unknown_values_fall_back_to_defaults() {
    let _guard = env_lock();
    let home = isolated_home();

    write_config(
        &home.config_home.path().join("moonterm").join("config.toml"),
        "[ui\ntheme = ",
    );
    let cwd = TempDir::new().expect("temp cwd");
    write_config(&local_config_path(cwd.path()), "[ui]\ntheme = \"sepia\"\n");

    let config = load_config(cwd.path());
    assert_eq!(config.ui.theme, ThemeKind::Dark);
    assert_eq!(config.server.endpoint, "localhost:8888");
}
