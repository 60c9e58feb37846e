//! Key encoding to xterm input data.
//!
//! Converts crossterm key events into the strings an xterm-compatible
//! terminal sends for them. Handles:
//! - Standard keys (characters, enter, tab, arrows, etc.)
//! - Control key combinations (Ctrl+A through Ctrl+Z)
//! - Modifier parameters on cursor and editing keys

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert a key event to the data string a terminal would deliver.
///
/// Returns None for keys we don't handle (e.g., function keys).
pub fn key_event_to_data(key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            // Ctrl+letter produces control codes (1-26)
            let data = if key.modifiers.contains(KeyModifiers::CONTROL) {
                let lowercase = ch.to_ascii_lowercase();
                if lowercase.is_ascii_lowercase() {
                    char::from((lowercase as u8 - b'a') + 1).to_string()
                } else {
                    ch.to_string()
                }
            } else {
                ch.to_string()
            };
            Some(with_alt_prefix(key.modifiers, data))
        }
        KeyCode::Enter => Some(encode_enter(key.modifiers)),
        KeyCode::Tab => Some(encode_tab(key.modifiers)),
        KeyCode::BackTab => Some(encode_shift_tab(key.modifiers)),
        KeyCode::Backspace => Some(with_alt_prefix(key.modifiers, "\x7f".to_string())),
        KeyCode::Esc => Some(with_alt_prefix(key.modifiers, "\x1b".to_string())),
        KeyCode::Up => Some(encode_csi_key(key.modifiers, "A", "\x1b[A")),
        KeyCode::Down => Some(encode_csi_key(key.modifiers, "B", "\x1b[B")),
        KeyCode::Right => Some(encode_csi_key(key.modifiers, "C", "\x1b[C")),
        KeyCode::Left => Some(encode_csi_key(key.modifiers, "D", "\x1b[D")),
        KeyCode::Delete => Some(encode_csi_tilde_key(key.modifiers, "3", "\x1b[3~")),
        KeyCode::Home => Some(encode_csi_key(key.modifiers, "H", "\x1b[H")),
        KeyCode::End => Some(encode_csi_key(key.modifiers, "F", "\x1b[F")),
        KeyCode::PageUp => Some(encode_csi_tilde_key(key.modifiers, "5", "\x1b[5~")),
        KeyCode::PageDown => Some(encode_csi_tilde_key(key.modifiers, "6", "\x1b[6~")),
        _ => None,
    }
}

fn with_alt_prefix(modifiers: KeyModifiers, data: String) -> String {
    if !modifiers.contains(KeyModifiers::ALT) {
        return data;
    }
    format!("\x1b{data}")
}

fn modifier_param(modifiers: KeyModifiers) -> Option<u8> {
    let mut value = 1;
    let mut has = false;
    if modifiers.contains(KeyModifiers::SHIFT) {
        value += 1;
        has = true;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        value += 2;
        has = true;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        value += 4;
        has = true;
    }
    if has {
        Some(value)
    } else {
        None
    }
}

fn encode_csi_key(modifiers: KeyModifiers, final_byte: &str, base: &str) -> String {
    if let Some(param) = modifier_param(modifiers) {
        return format!("\x1b[1;{param}{final_byte}");
    }
    base.to_string()
}

fn encode_csi_tilde_key(modifiers: KeyModifiers, code: &str, base: &str) -> String {
    if let Some(param) = modifier_param(modifiers) {
        return format!("\x1b[{code};{param}~");
    }
    base.to_string()
}

fn encode_tab(modifiers: KeyModifiers) -> String {
    if modifiers.contains(KeyModifiers::SHIFT) {
        return encode_shift_tab(modifiers);
    }
    with_alt_prefix(modifiers, "\t".to_string())
}

fn encode_shift_tab(modifiers: KeyModifiers) -> String {
    if let Some(param) = modifier_param(modifiers) {
        return format!("\x1b[1;{param}Z");
    }
    "\x1b[Z".to_string()
}

fn encode_enter(modifiers: KeyModifiers) -> String {
    if let Some(param) = modifier_param(modifiers) {
        return format!("\x1b[13;{param}u");
    }
    "\r".to_string()
}
