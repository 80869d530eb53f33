//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the Marinara palette using indexed colors so the UI remains
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// ANSI 256-color approximation of the Marinara palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: Color::Indexed(236),
                border: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(246),

                accent_primary: Color::Indexed(214),
                accent_secondary: Color::Indexed(71),

                success: Color::Indexed(71),
                warning: Color::Indexed(220),

                selection_bg: Color::Indexed(214),
                selection_fg: Color::Indexed(235),
                focus: Color::Indexed(214),
                overlay_bg: Color::Indexed(233),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
