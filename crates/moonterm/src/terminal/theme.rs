//! Colour presets for the terminal view.

pub type Rgb = (u8, u8, u8);

/// Which preset is active. Owned by the session, switched by `light`/`dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> Theme {
        let light = self == ThemeKind::Light;
        Theme {
            foreground: if light { (0x53, 0x68, 0x70) } else { (0xff, 0xff, 0xff) },
            background: if light { (0xfc, 0xf4, 0xdc) } else { (0x00, 0x00, 0x00) },
            cursor: (0x53, 0x68, 0x70),
            ansi: ANSI_PALETTE,
        }
    }
}

/// Resolved colours for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Rgb,
    pub background: Rgb,
    pub cursor: Rgb,
    /// The 16 ANSI colours: black, red, green, yellow, blue, magenta, cyan,
    /// white, then the bright variants in the same order.
    pub ansi: [Rgb; 16],
}

const ANSI_PALETTE: [Rgb; 16] = [
    (0x00, 0x28, 0x31),
    (0xd1, 0x1c, 0x24),
    (0x06, 0x98, 0x9a),
    (0xfc, 0xe9, 0x4f),
    (0x34, 0x65, 0xa4),
    (0xc6, 0x1c, 0x6f),
    (0x25, 0x92, 0x86),
    (0xea, 0xe3, 0xcb),
    (0x00, 0x1e, 0x27),
    (0xbd, 0x36, 0x13),
    (0x47, 0x5b, 0x62),
    (0x53, 0x68, 0x70),
    (0x70, 0x82, 0x84),
    (0x59, 0x56, 0xba),
    (0x81, 0x90, 0x90),
    (0xfc, 0xf4, 0xdc),
];
