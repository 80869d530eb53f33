use std::time::{Duration, Instant};

use tracing::debug;

use palazzo_types::SectionId;

use crate::ui::animation::one_shot_progress;

/// How long a section takes to fade in after first entering the viewport.
const REVEAL_DURATION: Duration = Duration::from_millis(800);
/// Fraction of the remaining distance covered per tick while smooth-scrolling.
const SCROLL_CHASE: f32 = 0.3;
/// Sections start revealing once their top passes this fraction of the
/// viewport height, matching the original's "top 80%" scroll trigger.
const REVEAL_THRESHOLD: f32 = 0.8;

/// Scroll state of the one-page document.
///
/// The rendering component lays the whole site out as one tall column of
/// lines and records where each section starts; this state owns the scroll
/// offset, the smooth-scroll target chased on ticks, and the first-seen
/// instants that drive section reveal animations.
#[derive(Debug, Default)]
pub struct PageState {
    scroll: f32,
    target: Option<f32>,
    viewport_height: u16,
    content_height: u16,
    section_rows: Vec<(SectionId, u16)>,
    revealed: Vec<(SectionId, Instant)>,
    /// Index of the active menu category tab.
    pub menu_category: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in whole rows, for `Paragraph::scroll`.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.round().max(0.0) as u16
    }

    fn max_scroll(&self) -> f32 {
        self.content_height.saturating_sub(self.viewport_height) as f32
    }

    /// Records the layout the component just produced and marks sections
    /// that have entered the viewport as revealed.
    pub fn record_layout(&mut self, section_rows: Vec<(SectionId, u16)>, content_height: u16, viewport_height: u16, now: Instant) {
        self.section_rows = section_rows;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());

        let reveal_edge = self.scroll + viewport_height as f32 * REVEAL_THRESHOLD;
        for (section, row) in &self.section_rows {
            if (*row as f32) <= reveal_edge && !self.revealed.iter().any(|(seen, _)| seen == section) {
                self.revealed.push((*section, now));
            }
        }
    }

    /// Starts a smooth scroll to the named section.
    ///
    /// Returns `false` when the section has no recorded anchor (the one soft
    /// failure of navigation); callers treat that as a logged no-op.
    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        let Some((_, row)) = self.section_rows.iter().find(|(section, _)| *section == id) else {
            debug!(section = %id, "navigation target missing; ignoring scroll request");
            return false;
        };
        let destination = (*row as f32).min(self.max_scroll().max(0.0));
        self.target = Some(destination);
        true
    }

    /// Immediate scroll by `delta` rows (keyboard/wheel). Cancels any smooth
    /// scroll in flight; direct input wins over a pending anchor jump.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        self.scroll = (self.scroll + delta as f32).clamp(0.0, self.max_scroll());
    }

    /// Jump to the top or bottom of the document.
    pub fn scroll_to_edge(&mut self, bottom: bool) {
        self.target = Some(if bottom { self.max_scroll() } else { 0.0 });
    }

    /// Advances the smooth scroll. Returns whether the offset moved.
    pub fn on_tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.scroll;
        if remaining.abs() < 0.5 {
            self.scroll = target;
            self.target = None;
        } else {
            self.scroll += remaining * SCROLL_CHASE;
        }
        true
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    /// Reveal progress of a section in `[0, 1]`; 0 until the section first
    /// enters the viewport, then an 800 ms fade.
    pub fn reveal_progress(&self, id: SectionId, now: Instant) -> f32 {
        self.revealed
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, started)| one_shot_progress(*started, REVEAL_DURATION, now))
            .unwrap_or(0.0)
    }

    /// Section currently at the top of the viewport, for the header line.
    pub fn section_in_view(&self) -> Option<SectionId> {
        let offset = self.scroll_offset();
        self.section_rows
            .iter()
            .take_while(|(_, row)| *row <= offset + self.viewport_height / 3)
            .last()
            .map(|(section, _)| *section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> PageState {
        let mut state = PageState::new();
        state.record_layout(
            vec![
                (SectionId::Home, 0),
                (SectionId::About, 40),
                (SectionId::Menu, 90),
                (SectionId::Reserve, 200),
            ],
            240,
            30,
            Instant::now(),
        );
        state
    }

    #[test]
    fn scrolling_to_unknown_section_is_a_soft_failure() {
        let mut state = laid_out();
        assert!(!state.scroll_to_section(SectionId::Chef));
        assert!(!state.is_scrolling());
    }

    #[test]
    fn smooth_scroll_converges_on_the_anchor() {
        let mut state = laid_out();
        assert!(state.scroll_to_section(SectionId::About));
        assert!(state.is_scrolling());
        for _ in 0..64 {
            state.on_tick();
        }
        assert_eq!(state.scroll_offset(), 40);
        assert!(!state.is_scrolling());
    }

    #[test]
    fn anchor_jumps_clamp_to_the_scrollable_range() {
        let mut state = laid_out();
        assert!(state.scroll_to_section(SectionId::Reserve));
        for _ in 0..64 {
            state.on_tick();
        }
        // 240 rows of content in a 30-row viewport: max offset is 210.
        assert_eq!(state.scroll_offset(), 200);
        state.scroll_by(1000);
        assert_eq!(state.scroll_offset(), 210);
    }

    #[test]
    fn direct_input_cancels_a_smooth_scroll() {
        let mut state = laid_out();
        state.scroll_to_section(SectionId::Menu);
        state.scroll_by(-3);
        assert!(!state.is_scrolling());
    }

    #[test]
    fn section_in_view_tracks_the_scroll_offset() {
        let mut state = laid_out();
        assert_eq!(state.section_in_view(), Some(SectionId::Home));
        state.scroll_by(45);
        assert_eq!(state.section_in_view(), Some(SectionId::About));
        state.scroll_by(1000);
        assert_eq!(state.section_in_view(), Some(SectionId::Reserve));
    }

    #[test]
    fn reveals_fire_once_and_progress_monotonically() {
        let start = Instant::now();
        let mut state = PageState::new();
        state.record_layout(vec![(SectionId::Home, 0), (SectionId::Reserve, 500)], 540, 30, start);

        assert_eq!(state.reveal_progress(SectionId::Reserve, start), 0.0);
        let mid = start + Duration::from_millis(400);
        let early = state.reveal_progress(SectionId::Home, mid);
        assert!(early > 0.0 && early < 1.0);
        let done = start + Duration::from_secs(2);
        assert_eq!(state.reveal_progress(SectionId::Home, done), 1.0);
    }
}
