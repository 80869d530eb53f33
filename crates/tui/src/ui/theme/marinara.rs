use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Marinara palette: the site's brand colors moved into terminal tones.
// Core
pub const BG: Color = Color::Rgb(0x1C, 0x17, 0x12); // Deep oven-brick brown
pub const SURFACE: Color = Color::Rgb(0x26, 0x1F, 0x18);
pub const SURFACE_MUTED: Color = Color::Rgb(0x3A, 0x2F, 0x24);
pub const FOREGROUND: Color = Color::Rgb(0xF5, 0xEF, 0xE6); // Warm flour white
pub const MUTED: Color = Color::Rgb(0x9C, 0x8E, 0x7C);

// Accents
pub const BASIL: Color = Color::Rgb(0x4C, 0xAF, 0x50); // pizza-green
pub const EMBER: Color = Color::Rgb(0xFF, 0x98, 0x00); // pizza-orange
pub const SAFFRON: Color = Color::Rgb(0xFF, 0xC1, 0x07); // pizza-yellow
pub const OVERLAY: Color = Color::Rgb(0x0F, 0x0C, 0x09);

/// Default warm palette tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct MarinaraTheme {
    roles: ThemeRoles,
}

impl MarinaraTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: SURFACE,
                border: SURFACE_MUTED,

                text: FOREGROUND,
                text_secondary: Color::Rgb(0xD8, 0xCC, 0xBB),
                text_muted: MUTED,

                accent_primary: EMBER,
                accent_secondary: BASIL,

                success: BASIL,
                warning: SAFFRON,

                selection_bg: EMBER,
                selection_fg: BG,
                focus: EMBER,
                overlay_bg: OVERLAY,
            },
        }
    }
}

impl Default for MarinaraTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for MarinaraTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
