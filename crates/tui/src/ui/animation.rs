//! Tick-driven animation timelines.
//!
//! The drawer choreography is declared as timelines of tracks (delay,
//! duration, easing) and sampled against `Instant::now()` on every render.
//! Nothing blocks and nothing retains per-frame state: a sequence is fully
//! described by the instant it started. The controller requests sequences via
//! the [`DrawerAnimator`] trait and never inspects results; sampling is the
//! renderer's business.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Easing curves used by the timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    InCubic,
    OutCubic,
    /// Overshooting ease-out, the terminal stand-in for `back.out(1.7)`.
    OutBack,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::OutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let shifted = t - 1.0;
                1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
            }
        }
    }
}

/// One animated value inside a timeline.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub from: f32,
    pub to: f32,
}

impl Track {
    pub fn new(delay: Duration, duration: Duration, easing: Easing, from: f32, to: f32) -> Self {
        Self {
            delay,
            duration,
            easing,
            from,
            to,
        }
    }

    /// Samples the track at `elapsed` since the timeline started. Holds the
    /// start value before the delay and the end value after completion.
    pub fn value(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return self.from;
        }
        let active = elapsed - self.delay;
        if active >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Linear progress of a one-shot effect that started at `start`.
pub fn one_shot_progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Named sequences the navigation controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSequence {
    /// Overlay fades in, panel slides in, items stagger-reveal.
    Open,
    /// Mirrored: items hide first, panel retreats, overlay fades last.
    Close,
    /// Brief pulse on the item the user just committed.
    Emphasize(usize),
}

/// The animation capability handed to the navigation controller.
///
/// The controller's only contract with it is the ordering of requests; every
/// call is fire-and-forget and cannot fail. Sampling methods exist for the
/// rendering adapter and always answer, animating or not.
pub trait DrawerAnimator: Debug {
    fn play(&mut self, sequence: DrawerSequence, now: Instant);

    fn is_animating(&self, now: Instant) -> bool;
    /// Backdrop opacity in `[0, 1]`.
    fn overlay_opacity(&self, now: Instant) -> f32;
    /// Panel slide-in progress: 0 fully off-screen, 1 fully shown.
    fn panel_progress(&self, now: Instant) -> f32;
    /// Reveal progress of one drawer entry.
    fn item_progress(&self, index: usize, now: Instant) -> f32;
    /// Emphasis pulse scale; 1.0 when the item is at rest.
    fn emphasis_scale(&self, index: usize, now: Instant) -> f32;
}

const OVERLAY_FADE: Duration = Duration::from_millis(300);
const PANEL_DELAY: Duration = Duration::from_millis(100);
const PANEL_SLIDE: Duration = Duration::from_millis(500);
const ITEM_BASE_DELAY: Duration = Duration::from_millis(300);
const ITEM_STAGGER: Duration = Duration::from_millis(100);
const ITEM_REVEAL: Duration = Duration::from_millis(500);
const CLOSE_ITEM_STAGGER: Duration = Duration::from_millis(50);
const CLOSE_ITEM_HIDE: Duration = Duration::from_millis(300);
const CLOSE_PANEL_DELAY: Duration = Duration::from_millis(200);
const CLOSE_PANEL_SLIDE: Duration = Duration::from_millis(500);
const CLOSE_OVERLAY_DELAY: Duration = Duration::from_millis(500);
const CLOSE_OVERLAY_FADE: Duration = Duration::from_millis(300);
const EMPHASIS_PULSE: Duration = Duration::from_millis(400);

/// Timeline-backed implementation of [`DrawerAnimator`].
///
/// Open choreography (causal order of the original slide-from-right drawer):
/// overlay fade-in, then panel slide with overshoot, then items revealing with
/// a stagger. Close mirrors it in reverse: items first, panel, overlay last.
#[derive(Debug)]
pub struct TimelineAnimator {
    item_count: usize,
    sequence: Option<(DrawerSequence, Instant)>,
    emphasis: Option<(usize, Instant)>,
}

impl TimelineAnimator {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            sequence: None,
            emphasis: None,
        }
    }

    fn overlay_track(sequence: DrawerSequence) -> Track {
        match sequence {
            DrawerSequence::Open => Track::new(Duration::ZERO, OVERLAY_FADE, Easing::OutCubic, 0.0, 1.0),
            _ => Track::new(CLOSE_OVERLAY_DELAY, CLOSE_OVERLAY_FADE, Easing::InCubic, 1.0, 0.0),
        }
    }

    fn panel_track(sequence: DrawerSequence) -> Track {
        match sequence {
            DrawerSequence::Open => Track::new(PANEL_DELAY, PANEL_SLIDE, Easing::OutBack, 0.0, 1.0),
            _ => Track::new(CLOSE_PANEL_DELAY, CLOSE_PANEL_SLIDE, Easing::InCubic, 1.0, 0.0),
        }
    }

    fn item_track(sequence: DrawerSequence, index: usize) -> Track {
        match sequence {
            DrawerSequence::Open => Track::new(
                ITEM_BASE_DELAY + ITEM_STAGGER * index as u32,
                ITEM_REVEAL,
                Easing::OutCubic,
                0.0,
                1.0,
            ),
            _ => Track::new(CLOSE_ITEM_STAGGER * index as u32, CLOSE_ITEM_HIDE, Easing::InCubic, 1.0, 0.0),
        }
    }

    fn sequence_total(&self, sequence: DrawerSequence) -> Duration {
        let last_item = self.item_count.saturating_sub(1);
        let mut total = Self::overlay_track(sequence)
            .end()
            .max(Self::panel_track(sequence).end());
        if self.item_count > 0 {
            total = total.max(Self::item_track(sequence, last_item).end());
        }
        total
    }

    fn sample(&self, now: Instant, track_for: impl Fn(DrawerSequence) -> Track) -> f32 {
        match self.sequence {
            Some((sequence, started)) => track_for(sequence).value(now.saturating_duration_since(started)),
            // No sequence ever requested: the drawer has never been opened.
            None => 0.0,
        }
    }
}

impl DrawerAnimator for TimelineAnimator {
    fn play(&mut self, sequence: DrawerSequence, now: Instant) {
        match sequence {
            DrawerSequence::Emphasize(index) => self.emphasis = Some((index, now)),
            other => {
                self.sequence = Some((other, now));
                self.emphasis = None;
            }
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        let sequence_live = self.sequence.is_some_and(|(sequence, started)| {
            now.saturating_duration_since(started) < self.sequence_total(sequence)
        });
        let emphasis_live = self
            .emphasis
            .is_some_and(|(_, started)| now.saturating_duration_since(started) < EMPHASIS_PULSE);
        sequence_live || emphasis_live
    }

    fn overlay_opacity(&self, now: Instant) -> f32 {
        self.sample(now, Self::overlay_track)
    }

    fn panel_progress(&self, now: Instant) -> f32 {
        self.sample(now, Self::panel_track)
    }

    fn item_progress(&self, index: usize, now: Instant) -> f32 {
        self.sample(now, |sequence| Self::item_track(sequence, index))
    }

    fn emphasis_scale(&self, index: usize, now: Instant) -> f32 {
        let Some((pulsing, started)) = self.emphasis else {
            return 1.0;
        };
        if pulsing != index {
            return 1.0;
        }
        let t = one_shot_progress(started, EMPHASIS_PULSE, now);
        if t >= 1.0 {
            return 1.0;
        }
        // Yoyo: grow for the first half, shrink back for the second.
        let pulse = if t < 0.5 {
            Easing::OutCubic.apply(t * 2.0)
        } else {
            1.0 - Easing::InCubic.apply((t - 0.5) * 2.0)
        };
        1.0 + 0.1 * pulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::InCubic, Easing::OutCubic, Easing::OutBack] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn out_back_overshoots_before_settling() {
        let peak = (0..100).map(|i| Easing::OutBack.apply(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn track_holds_endpoints_outside_active_window() {
        let track = Track::new(Duration::from_millis(100), Duration::from_millis(200), Easing::Linear, 0.0, 1.0);
        assert_eq!(track.value(Duration::from_millis(50)), 0.0);
        assert_eq!(track.value(Duration::from_millis(400)), 1.0);
        let mid = track.value(Duration::from_millis(200));
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn open_sequence_orders_overlay_panel_items() {
        let mut animator = TimelineAnimator::new(7);
        let start = Instant::now();
        animator.play(DrawerSequence::Open, start);

        // Early on the overlay is moving but the last item has not started.
        let early = at(start, 150);
        assert!(animator.overlay_opacity(early) > 0.0);
        assert_eq!(animator.item_progress(6, early), 0.0);

        // Items reveal in stagger order.
        let mid = at(start, 600);
        assert!(animator.item_progress(0, mid) > animator.item_progress(6, mid));

        // Everything settles fully open.
        let done = at(start, 3000);
        assert_eq!(animator.overlay_opacity(done), 1.0);
        assert_eq!(animator.panel_progress(done), 1.0);
        assert_eq!(animator.item_progress(6, done), 1.0);
        assert!(!animator.is_animating(done));
    }

    #[test]
    fn close_sequence_hides_items_before_panel_retreats() {
        let mut animator = TimelineAnimator::new(3);
        let start = Instant::now();
        animator.play(DrawerSequence::Open, start);
        let reopened = at(start, 5000);
        animator.play(DrawerSequence::Close, reopened);

        let early = at(reopened, 100);
        assert!(animator.item_progress(0, early) < 1.0);
        assert_eq!(animator.panel_progress(early), 1.0);

        let done = at(reopened, 3000);
        assert_eq!(animator.panel_progress(done), 0.0);
        assert_eq!(animator.overlay_opacity(done), 0.0);
    }

    #[test]
    fn emphasis_pulses_only_the_requested_item() {
        let mut animator = TimelineAnimator::new(5);
        let start = Instant::now();
        animator.play(DrawerSequence::Emphasize(2), start);

        let mid = at(start, 200);
        assert!(animator.emphasis_scale(2, mid) > 1.0);
        assert_eq!(animator.emphasis_scale(1, mid), 1.0);

        let done = at(start, 500);
        assert_eq!(animator.emphasis_scale(2, done), 1.0);
        assert!(!animator.is_animating(done));
    }
}
