use std::time::{Duration, Instant};

use crate::ui::animation::one_shot_progress;

/// Delay between automatic slide advances.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);
/// Duration of the eased slide transition.
const SLIDE_TRANSITION: Duration = Duration::from_millis(800);

/// Testimonial slider state with auto-advance.
///
/// The auto-advance timer is a cancellable deadline, not a free-running
/// interval: every manual interaction resets it, so a stale tick can never
/// yank the slide out from under the user right after they picked one.
#[derive(Debug)]
pub struct CarouselState {
    slide_count: usize,
    pub current: usize,
    next_advance: Option<Instant>,
    transition_started: Option<Instant>,
}

impl CarouselState {
    pub fn new(slide_count: usize, now: Instant) -> Self {
        Self {
            slide_count,
            current: 0,
            next_advance: (slide_count > 1).then(|| now + AUTO_ADVANCE),
            transition_started: None,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Jumps to `index` (clamped) and resets the auto-advance deadline.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if self.slide_count == 0 {
            return;
        }
        let index = index.min(self.slide_count - 1);
        if index != self.current {
            self.current = index;
            self.transition_started = Some(now);
        }
        self.next_advance = (self.slide_count > 1).then(|| now + AUTO_ADVANCE);
    }

    pub fn next(&mut self, now: Instant) {
        if self.slide_count > 0 {
            self.go_to((self.current + 1) % self.slide_count, now);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if self.slide_count > 0 {
            self.go_to((self.current + self.slide_count - 1) % self.slide_count, now);
        }
    }

    /// Fires the auto-advance when its deadline passes. Returns whether the
    /// slide changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.next_advance
            && now >= deadline
        {
            self.next(now);
            return true;
        }
        false
    }

    /// Eased progress of the current slide transition; 1.0 once settled.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        self.transition_started
            .map(|started| one_shot_progress(started, SLIDE_TRANSITION, now))
            .unwrap_or(1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition_progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advances_after_the_delay() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(4, start);
        assert!(!carousel.on_tick(start + Duration::from_secs(4)));
        assert_eq!(carousel.current, 0);
        assert!(carousel.on_tick(start + AUTO_ADVANCE));
        assert_eq!(carousel.current, 1);
    }

    #[test]
    fn manual_selection_resets_the_auto_advance_deadline() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(4, start);

        // Just before the auto-advance would fire, the user picks a slide.
        let almost = start + Duration::from_millis(4900);
        carousel.go_to(3, almost);
        assert_eq!(carousel.current, 3);

        // The stale deadline must not fire.
        assert!(!carousel.on_tick(start + Duration::from_millis(5100)));
        assert_eq!(carousel.current, 3);

        // The reset deadline fires 5 s after the manual pick and wraps.
        assert!(carousel.on_tick(almost + AUTO_ADVANCE));
        assert_eq!(carousel.current, 0);
    }

    #[test]
    fn wrapping_in_both_directions() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(3, start);
        carousel.prev(start);
        assert_eq!(carousel.current, 2);
        carousel.next(start);
        assert_eq!(carousel.current, 0);
    }

    #[test]
    fn single_slide_never_schedules_an_advance() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(1, start);
        assert!(!carousel.on_tick(start + Duration::from_secs(60)));
        assert_eq!(carousel.current, 0);
    }
}
