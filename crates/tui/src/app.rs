//! Application state for the Palazzo TUI.
//!
//! `App` aggregates the state every component reads and writes: the shared
//! context (theme, preferences, content) plus one state struct per surface.
//! Components mutate the state they own and report cross-cutting changes as
//! `Effect`s for the runtime to process.

use std::time::{Duration, Instant};

use tracing::warn;

use palazzo_content::SiteContent;
use palazzo_types::{Effect, Msg};
use palazzo_util::Preferences;

use crate::ui::animation::TimelineAnimator;
use crate::ui::components::nav_drawer::{NavDrawerState, NavItem};
use crate::ui::components::page::{CarouselState, PageState};
use crate::ui::components::reserve::ReserveFormState;
use crate::ui::theme::{self, Theme};

/// How long a status toast stays on screen.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Transient status message shown in the hint bar.
#[derive(Debug, Default)]
pub struct StatusLineState {
    message: Option<(String, Instant)>,
}

impl StatusLineState {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    /// The message, while it has screen time left.
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|(_, shown)| now.duration_since(*shown) < STATUS_DURATION)
            .map(|(message, _)| message.as_str())
    }

    /// Drops an expired message. Returns whether anything changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.message.is_some() && self.active(now).is_none() {
            self.message = None;
            return true;
        }
        false
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.active(now).is_some()
    }
}

/// Context shared by every component: theme, preferences, and the immutable
/// site content.
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub theme_id: String,
    pub preferences: Preferences,
    pub content: &'static SiteContent,
}

/// Top-level application state.
pub struct App {
    pub ctx: SharedCtx,
    pub nav_drawer: NavDrawerState,
    pub page: PageState,
    pub carousel: CarouselState,
    pub reserve: ReserveFormState,
    pub status: StatusLineState,
}

impl App {
    pub fn new(theme_override: Option<&str>) -> Self {
        let preferences = Preferences::load();
        let loaded = theme::load(theme_override.or(preferences.theme.as_deref()));

        let content = palazzo_content::site();
        let items: Vec<NavItem> = content
            .nav_items()
            .into_iter()
            .map(|(section, label)| NavItem::new(section, label))
            .collect();
        let animator = TimelineAnimator::new(items.len());

        let now = Instant::now();
        Self {
            ctx: SharedCtx {
                theme: loaded.theme,
                theme_id: loaded.definition.id.to_string(),
                preferences,
                content,
            },
            nav_drawer: NavDrawerState::new(items, Box::new(animator)),
            page: PageState::new(),
            carousel: CarouselState::new(content.testimonials.entries.len(), now),
            reserve: ReserveFormState::new(),
            status: StatusLineState::default(),
        }
    }

    /// Advances every time-driven piece of state. Returns whether anything
    /// changed and a redraw is needed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg {
            Msg::Tick => {
                let now = Instant::now();
                let mut changed = self.nav_drawer.on_tick(now);
                changed |= self.page.on_tick();
                changed |= self.carousel.on_tick(now);
                changed |= self.status.on_tick(now);
                changed
            }
            Msg::Resize(_, _) => true,
        }
    }

    /// Swaps in the next theme and persists the choice.
    pub fn cycle_theme(&mut self) -> Vec<Effect> {
        let definition = theme::catalog::next_after(&self.ctx.theme_id);
        self.ctx.theme = definition.build();
        self.ctx.theme_id = definition.id.to_string();
        self.ctx.preferences.theme = Some(definition.id.to_string());
        if let Err(error) = self.ctx.preferences.save() {
            warn!(%error, "failed to persist theme preference");
        }
        vec![Effect::ShowStatus(format!("Theme: {}", definition.label))]
    }

    /// Whether any animation is in flight; drives the fast/idle tick rate.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.nav_drawer.animator.is_animating(now)
            || self.nav_drawer.has_pending_close()
            || self.page.is_scrolling()
            || self.carousel.is_animating(now)
            || self.status.is_active(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_toast_expires_after_its_screen_time() {
        let now = Instant::now();
        let mut status = StatusLineState::default();
        status.show("saved", now);
        assert_eq!(status.active(now + Duration::from_secs(1)), Some("saved"));

        let later = now + STATUS_DURATION;
        assert_eq!(status.active(later), None);
        assert!(status.on_tick(later));
        assert!(!status.on_tick(later));
    }
}
