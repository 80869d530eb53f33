use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

use palazzo_types::{Effect, SectionId};

use crate::ui::animation::{DrawerAnimator, DrawerSequence};

/// A single entry in the navigation drawer.
///
/// The section doubles as the in-page anchor the entry navigates to; the
/// label is the text rendered in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: String,
}

impl NavItem {
    pub fn new(section: SectionId, label: impl Into<String>) -> Self {
        Self {
            section,
            label: label.into(),
        }
    }
}

/// How long after `activate` the drawer waits before closing itself. Long
/// enough for the scroll to visibly begin, short enough not to feel laggy.
pub const DEFERRED_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// State machine for the navigation drawer.
///
/// Owns the open/closed flag, the item list, the highlighted index, and the
/// cancellable deferred close. Visual transitions are requested through the
/// injected [`DrawerAnimator`]; those requests are fire-and-forget and cannot
/// affect correctness. Every operation here is total: indices are clamped,
/// keys are filtered, and nothing returns an error.
///
/// Hit regions (`panel_area`, `burger_area`, `item_areas`) are recorded by
/// the rendering adapter each frame and consulted for outside-click
/// dismissal, mirroring how the rest of the components track mouse targets.
#[derive(Debug)]
pub struct NavDrawerState {
    /// Navigation entries in drawer order. Fixed at startup.
    pub items: Vec<NavItem>,
    /// Whether the drawer is visible.
    pub open: bool,
    /// Index of the highlighted entry; always valid while `items` is non-empty.
    pub active_index: usize,
    /// Deadline of the pending deferred close, if one is scheduled.
    pending_close: Option<Instant>,
    /// Animation capability, injected at construction.
    pub animator: Box<dyn DrawerAnimator + Send>,
    /// Last rendered panel area, for outside-click hit testing.
    pub panel_area: Rect,
    /// Last rendered burger-button area; clicks here are never "outside".
    pub burger_area: Rect,
    /// Last rendered per-item rows for click/hover targeting.
    pub item_areas: Vec<Rect>,
}

impl NavDrawerState {
    /// Creates a closed drawer highlighting the first entry.
    pub fn new(items: Vec<NavItem>, animator: Box<dyn DrawerAnimator + Send>) -> Self {
        Self {
            items,
            open: false,
            active_index: 0,
            pending_close: None,
            animator,
            panel_area: Rect::default(),
            burger_area: Rect::default(),
            item_areas: Vec::new(),
        }
    }

    /// Flips the drawer and requests the matching animation sequence.
    ///
    /// Opening cancels any pending deferred close so a drawer the user just
    /// re-opened can never close out from under them; closing clears it
    /// because the close it was deferring has already happened.
    pub fn toggle(&mut self, now: Instant) {
        self.open = !self.open;
        self.pending_close = None;
        let sequence = if self.open {
            DrawerSequence::Open
        } else {
            DrawerSequence::Close
        };
        self.animator.play(sequence, now);
    }

    /// Moves the highlight to `index`, clamped into range. Pure highlight;
    /// no side effects.
    pub fn set_active(&mut self, index: usize) {
        if self.items.is_empty() {
            self.active_index = 0;
            return;
        }
        self.active_index = index.min(self.items.len() - 1);
    }

    /// Steps the highlight by `delta`, wrapping at both ends. Ignored while
    /// the drawer is closed.
    pub fn move_active(&mut self, delta: isize) {
        if !self.open || self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let next = (self.active_index as isize + delta).rem_euclid(len);
        self.active_index = next as usize;
    }

    /// Commits a selection: highlights the entry, pulses it, requests the
    /// page scroll, and schedules the deferred close.
    pub fn activate(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        if self.items.is_empty() {
            return Vec::new();
        }
        self.set_active(index);
        self.animator.play(DrawerSequence::Emphasize(self.active_index), now);
        self.pending_close = Some(now + DEFERRED_CLOSE_DELAY);
        vec![Effect::ScrollToSection(self.items[self.active_index].section)]
    }

    /// Keyboard dispatch. Entirely suppressed while the drawer is closed so
    /// the controller never intercepts keys when it is not visible.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        match code {
            KeyCode::Esc => self.toggle(now),
            KeyCode::Left => self.move_active(-1),
            KeyCode::Right => self.move_active(1),
            KeyCode::Enter => return self.activate(self.active_index, now),
            _ => {}
        }
        Vec::new()
    }

    /// Closes the drawer when an interaction lands outside both the panel
    /// and the burger button. Returns whether the drawer was closed.
    pub fn handle_outside_interaction(&mut self, column: u16, row: u16, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        let point = Position::new(column, row);
        if self.panel_area.contains(point) || self.burger_area.contains(point) {
            return false;
        }
        self.toggle(now);
        true
    }

    /// Index of the drawer entry under the given point, if any.
    pub fn hit_item(&self, column: u16, row: u16) -> Option<usize> {
        let point = Position::new(column, row);
        self.item_areas.iter().position(|area| area.contains(point))
    }

    /// Fires the deferred close once its deadline passes. Returns whether
    /// state changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.pending_close
            && now >= deadline
        {
            if self.open {
                self.toggle(now);
            } else {
                self.pending_close = None;
            }
            return true;
        }
        false
    }

    /// Whether a deferred close is scheduled. The runtime keeps ticking fast
    /// while one is pending.
    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Test double that records every requested sequence.
    #[derive(Debug, Default)]
    struct RecordingAnimator {
        log: Arc<Mutex<Vec<DrawerSequence>>>,
    }

    impl DrawerAnimator for RecordingAnimator {
        fn play(&mut self, sequence: DrawerSequence, _now: Instant) {
            self.log.lock().unwrap().push(sequence);
        }
        fn is_animating(&self, _now: Instant) -> bool {
            false
        }
        fn overlay_opacity(&self, _now: Instant) -> f32 {
            0.0
        }
        fn panel_progress(&self, _now: Instant) -> f32 {
            0.0
        }
        fn item_progress(&self, _index: usize, _now: Instant) -> f32 {
            0.0
        }
        fn emphasis_scale(&self, _index: usize, _now: Instant) -> f32 {
            1.0
        }
    }

    fn seven_items() -> Vec<NavItem> {
        SectionId::ALL.iter().map(|section| NavItem::new(*section, section.as_str())).collect()
    }

    fn drawer() -> (NavDrawerState, Arc<Mutex<Vec<DrawerSequence>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let animator = RecordingAnimator { log: Arc::clone(&log) };
        (NavDrawerState::new(seven_items(), Box::new(animator)), log)
    }

    #[test]
    fn toggle_parity_starting_closed() {
        let (mut state, log) = drawer();
        let now = Instant::now();
        assert!(!state.open);
        for i in 1..=6 {
            state.toggle(now);
            assert_eq!(state.open, i % 2 == 1);
        }
        let sequences = log.lock().unwrap();
        assert_eq!(
            *sequences,
            vec![
                DrawerSequence::Open,
                DrawerSequence::Close,
                DrawerSequence::Open,
                DrawerSequence::Close,
                DrawerSequence::Open,
                DrawerSequence::Close,
            ]
        );
    }

    #[test]
    fn move_active_wraps_both_directions() {
        let (mut state, _log) = drawer();
        state.toggle(Instant::now());
        assert_eq!(state.active_index, 0);
        state.move_active(-1);
        assert_eq!(state.active_index, 6);
        state.move_active(1);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn set_active_clamps_out_of_range() {
        let (mut state, _log) = drawer();
        state.set_active(999);
        assert_eq!(state.active_index, 6);
    }

    #[test]
    fn keys_are_suppressed_while_closed() {
        let (mut state, log) = drawer();
        let now = Instant::now();
        for code in [KeyCode::Esc, KeyCode::Left, KeyCode::Right, KeyCode::Enter, KeyCode::Char('x')] {
            assert!(state.handle_key(code, now).is_empty());
        }
        assert!(!state.open);
        assert_eq!(state.active_index, 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn escape_closes_and_is_harmless_when_closed() {
        let (mut state, _log) = drawer();
        let now = Instant::now();
        state.toggle(now);
        state.handle_key(KeyCode::Esc, now);
        assert!(!state.open);
        state.handle_key(KeyCode::Esc, now);
        assert!(!state.open);
    }

    #[test]
    fn activate_emphasizes_then_scrolls_then_defers_close() {
        let (mut state, log) = drawer();
        let now = Instant::now();
        state.toggle(now);
        let effects = state.activate(3, now);
        assert_eq!(effects, vec![Effect::ScrollToSection(SectionId::Menu)]);
        assert!(state.open);
        assert!(state.has_pending_close());
        // Emphasis was requested before the scroll effect was returned.
        assert_eq!(log.lock().unwrap().last(), Some(&DrawerSequence::Emphasize(3)));

        // Not yet due.
        assert!(!state.on_tick(now + Duration::from_millis(100)));
        assert!(state.open);
        // Due: the drawer closes itself.
        assert!(state.on_tick(now + DEFERRED_CLOSE_DELAY));
        assert!(!state.open);
        assert!(!state.has_pending_close());
    }

    #[test]
    fn reopening_cancels_the_pending_close() {
        let (mut state, _log) = drawer();
        let now = Instant::now();
        state.toggle(now);
        state.activate(2, now);

        // User closes and immediately re-opens inside the deferral window.
        state.toggle(now + Duration::from_millis(50));
        state.toggle(now + Duration::from_millis(100));
        assert!(state.open);
        assert!(!state.has_pending_close());

        // The stale deadline must not fire.
        assert!(!state.on_tick(now + Duration::from_secs(5)));
        assert!(state.open);
    }

    #[test]
    fn keyboard_walkthrough_seven_items() {
        let (mut state, _log) = drawer();
        let now = Instant::now();

        // Drawer closed: arrows do nothing.
        for _ in 0..3 {
            state.handle_key(KeyCode::Right, now);
        }
        assert!(!state.open);
        assert_eq!(state.active_index, 0);

        state.toggle(now);
        assert!(state.open);
        for _ in 0..3 {
            state.handle_key(KeyCode::Right, now);
        }
        assert_eq!(state.active_index, 3);

        let effects = state.handle_key(KeyCode::Enter, now);
        assert_eq!(effects, vec![Effect::ScrollToSection(SectionId::Menu)]);
        state.on_tick(now + DEFERRED_CLOSE_DELAY);
        assert!(!state.open);
    }

    #[test]
    fn outside_interaction_closes_only_outside_both_regions() {
        let (mut state, _log) = drawer();
        let now = Instant::now();
        state.toggle(now);
        state.panel_area = Rect::new(60, 0, 40, 30);
        state.burger_area = Rect::new(96, 1, 4, 3);

        // Inside the panel: stays open.
        assert!(!state.handle_outside_interaction(70, 10, now));
        assert!(state.open);
        // On the burger button: stays open (the button handles its own click).
        assert!(!state.handle_outside_interaction(97, 2, now));
        assert!(state.open);
        // Outside both: closes.
        assert!(state.handle_outside_interaction(5, 10, now));
        assert!(!state.open);
        // Already closed: no-op.
        assert!(!state.handle_outside_interaction(5, 10, now));
    }

    #[test]
    fn empty_item_list_never_panics() {
        let animator = RecordingAnimator::default();
        let mut state = NavDrawerState::new(Vec::new(), Box::new(animator));
        let now = Instant::now();
        state.toggle(now);
        state.set_active(5);
        state.move_active(1);
        assert!(state.activate(0, now).is_empty());
        assert_eq!(state.active_index, 0);
    }
}
