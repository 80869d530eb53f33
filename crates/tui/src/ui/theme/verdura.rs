use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Verdura palette: cooler garden greens for terminals that prefer low warmth.
pub const BG: Color = Color::Rgb(0x10, 0x17, 0x12);
pub const SURFACE: Color = Color::Rgb(0x17, 0x20, 0x19);
pub const SURFACE_MUTED: Color = Color::Rgb(0x24, 0x33, 0x27);
pub const FOREGROUND: Color = Color::Rgb(0xEA, 0xF2, 0xEB);
pub const MUTED: Color = Color::Rgb(0x86, 0x9B, 0x8A);

pub const LEAF: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const LIME: Color = Color::Rgb(0xC0, 0xE8, 0x6B);
pub const HONEY: Color = Color::Rgb(0xE8, 0xC5, 0x6B);
pub const OVERLAY: Color = Color::Rgb(0x0A, 0x0F, 0x0B);

/// Cool green alternative palette.
#[derive(Debug, Clone)]
pub struct VerduraTheme {
    roles: ThemeRoles,
}

impl VerduraTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: SURFACE,
                border: SURFACE_MUTED,

                text: FOREGROUND,
                text_secondary: Color::Rgb(0xC6, 0xD8, 0xC9),
                text_muted: MUTED,

                accent_primary: LEAF,
                accent_secondary: HONEY,

                success: LEAF,
                warning: HONEY,

                selection_bg: LEAF,
                selection_fg: BG,
                focus: LIME,
                overlay_bg: OVERLAY,
            },
        }
    }
}

impl Default for VerduraTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for VerduraTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
