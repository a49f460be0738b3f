use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
// Core
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36 - Background
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a - Current line / selection
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2 - Foreground text
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4 - Muted / comments

// Accents
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6

// Emerald-400 stands in for Dracula green on the status dot.
pub const EMERALD: Color = Color::Rgb(0x34, 0xD3, 0x99); // #34d399

pub const BG_DOCK: Color = Color::Rgb(0x34, 0x37, 0x46); // lifted surface for the pill
pub const BG_GRADIENT_END: Color = Color::Rgb(0x3A, 0x2E, 0x52); // purple-tinted page bottom
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(0x1D, 0x1F, 0x27); // Darkened overlay backdrop

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG_DOCK,
                surface_muted: BG_GRADIENT_END,
                border: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: Color::Rgb(0xD6, 0xD6, 0xD0), // foreground at ~80%
                text_muted: COMMENT,

                accent_primary: PINK,

                success: EMERALD,

                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                focus: CYAN, // Cyan for active/focused borders
                modal_bg: BG_MODAL_OVERLAY,
            },
        }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
