use super::{Ansi256Theme, MarinaraTheme, Theme, VerduraTheme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes surfaced by the loader and the theme
/// cycling key.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "marinara",
        label: "Marinara",
        aliases: &["marinara", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(MarinaraTheme::new()),
    },
    ThemeDefinition {
        id: "verdura",
        label: "Verdura",
        aliases: &["verdura", "green"],
        is_ansi_fallback: false,
        factory: || Box::new(VerduraTheme::new()),
    },
    ThemeDefinition {
        id: "ansi",
        label: "ANSI Fallback",
        aliases: &["ansi", "ansi256", "fallback"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Resolve a name or alias to a theme definition, case-insensitively.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.contains(&needle.as_str()))
}

/// Default palette for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Fallback palette for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

/// The definition after `current` in catalog order, wrapping around. ANSI
/// fallbacks are skipped when cycling on a truecolor terminal.
pub fn next_after(current: &str) -> &'static ThemeDefinition {
    let truecolor: Vec<&'static ThemeDefinition> =
        THEME_DEFINITIONS.iter().filter(|d| !d.is_ansi_fallback).collect();
    let position = truecolor.iter().position(|d| d.id == current).unwrap_or(0);
    truecolor[(position + 1) % truecolor.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(resolve("MARINARA").unwrap().id, "marinara");
        assert_eq!(resolve("green").unwrap().id, "verdura");
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn cycling_wraps_and_skips_ansi_fallback() {
        assert_eq!(next_after("marinara").id, "verdura");
        assert_eq!(next_after("verdura").id, "marinara");
        assert_eq!(next_after("unknown").id, "verdura");
    }
}
