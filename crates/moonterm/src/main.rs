mod app;
mod commands;
mod config;
mod editor;
mod errors;
mod events;
mod format;
mod history;
mod keymap;
mod logging;
mod session;
mod terminal;
mod transport;

#[cfg(test)]
mod test_utils;

fn main() -> std::io::Result<()> {
    logging::init();
    app::run()
}
