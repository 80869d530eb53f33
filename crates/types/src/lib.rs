//! Shared type definitions for the Palazzo TUI.
//!
//! Holds the section identifiers that act as in-page anchors, plus the
//! `Msg`/`Effect` pair that moves state through the application. Components
//! report `Effect`s instead of reaching into global state; the runtime drains
//! and executes them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anchor identifiers for the sections of the one-page site.
///
/// Order here is document order; it is also the navigation order used by the
/// drawer. Serialized as the kebab/lowercase ids the content file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Food,
    Menu,
    Chef,
    Testimonials,
    Reserve,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Food,
        SectionId::Menu,
        SectionId::Chef,
        SectionId::Testimonials,
        SectionId::Reserve,
    ];

    /// Stable string id, matching the content file's `section` keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Food => "food",
            SectionId::Menu => "menu",
            SectionId::Chef => "chef",
            SectionId::Testimonials => "testimonials",
            SectionId::Reserve => "reserve",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known section.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct ParseSectionIdError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionIdError(s.to_string()))
    }
}

/// Application-level messages delivered to components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (animations, deferred deadlines, carousel advance)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects reported by components and executed by the runtime.
///
/// Keeping these as data keeps the components pure: the drawer does not know
/// how the page scrolls, and the page does not know how the drawer animates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open or close the navigation drawer (burger button, Esc, outside click)
    ToggleDrawer,
    /// Scroll the page so the named section is in view
    ScrollToSection(SectionId),
    /// Open the reservation form modal
    OpenReserveModal,
    /// Close the reservation form modal
    CloseReserveModal,
    /// Show a transient status message in the footer line
    ShowStatus(String),
    /// Switch to the next theme in the catalog and persist the choice
    CycleTheme,
    /// Exit the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip_through_strings() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn unknown_section_id_is_rejected() {
        let err = "parking-lot".parse::<SectionId>().unwrap_err();
        assert_eq!(err, ParseSectionIdError("parking-lot".into()));
    }

    #[test]
    fn sections_serialize_as_lowercase_ids() {
        let json = serde_json::to_string(&SectionId::Testimonials).unwrap();
        assert_eq!(json, "\"testimonials\"");
    }
}
