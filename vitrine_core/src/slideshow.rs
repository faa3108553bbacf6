// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideshow controller.
//!
//! The [`Slideshow`] owns a fixed ring of items, a cursor into it and at most
//! one live auto-advance timer. Four input sources compete for the cursor:
//!
//! - the periodic timer, via [`tick`](Slideshow::tick);
//! - pointer hover, via [`pause`](Slideshow::pause) and
//!   [`resume`](Slideshow::resume);
//! - touch swipes, via [`handle_gesture_start`](Slideshow::handle_gesture_start)
//!   and [`handle_gesture_end`](Slideshow::handle_gesture_end), or
//!   [`cancel_gesture`](Slideshow::cancel_gesture) when the host aborts one;
//! - previous/next buttons, via
//!   [`handle_manual_advance`](Slideshow::handle_manual_advance).
//!
//! Every entry point runs to completion before the next one starts (the host
//! serializes event callbacks), so the only hazard is two timers being live
//! at once. [`resume`](Slideshow::resume) always cancels before it starts,
//! which keeps the live-timer count at zero or one.
//!
//! Degenerate input is never an error: a slideshow with no items is inert,
//! and sub-threshold swipes, redundant pauses and stray touch ends do
//! nothing.

use alloc::vec::Vec;

use crate::gesture::{DragState, SWIPE_THRESHOLD, classify_swipe};
use crate::surface::{Item, Surface};
use crate::time::Duration;
use crate::timer::{TimerSource, VirtualTimers};
use crate::trace::{
    AdvanceCause, GestureEndEvent, GestureStartEvent, NoopSink, SlideChangedEvent,
    TimerCancelledEvent, TimerStartedEvent, TraceSink, Tracer,
};

/// Default auto-advance period.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(8_000);

/// Which way to move through the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next slide, wrapping from last to first.
    Forward,
    /// Previous slide, wrapping from first to last.
    Backward,
}

impl Direction {
    /// Returns the cursor after one step from `cursor` in a ring of `len`.
    ///
    /// Equivalent to `(cursor + delta + len) % len` with `delta = ±1`.
    /// `len` must be non-zero and `cursor < len`.
    #[must_use]
    pub const fn step(self, cursor: usize, len: usize) -> usize {
        match self {
            Self::Forward => (cursor + 1) % len,
            Self::Backward => (cursor + len - 1) % len,
        }
    }

    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Configuration for a [`Slideshow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideshowConfig {
    /// Auto-advance period. Zero disables auto-advance.
    pub period: Duration,
    /// Minimum horizontal travel for a swipe, in logical pixels.
    pub swipe_threshold: f64,
}

impl SlideshowConfig {
    /// The portfolio page's settings: 8 s period, 50 px swipe threshold.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }

    /// Portfolio settings with a different period.
    #[must_use]
    pub const fn with_period(period: Duration) -> Self {
        Self {
            period,
            ..Self::portfolio()
        }
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// A single slideshow: items, cursor, auto-advance timer and drag state.
///
/// Create one per slideshow surface with [`initialize`](Self::initialize)
/// (or [`with_sink`](Self::with_sink) to observe it). Dropping the controller
/// tears it down, cancelling any live timer.
pub struct Slideshow<S: Surface, T: TimerSource, K: TraceSink = NoopSink> {
    surface: S,
    timers: T,
    sink: K,
    config: SlideshowConfig,
    items: Vec<Item>,
    cursor: Option<usize>,
    timer: Option<T::Handle>,
    drag: DragState,
}

impl<S: Surface, T: TimerSource, K: TraceSink> core::fmt::Debug for Slideshow<S, T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slideshow")
            .field("config", &self.config)
            .field("item_count", &self.items.len())
            .field("cursor", &self.cursor)
            .field("running", &self.timer.is_some())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, T: TimerSource> Slideshow<S, T> {
    /// Builds a controller over `surface` without tracing.
    ///
    /// See [`with_sink`](Self::with_sink).
    #[must_use]
    pub fn initialize(surface: S, timers: T, config: SlideshowConfig) -> Self {
        Self::with_sink(surface, timers, config, NoopSink)
    }
}

impl<S: Surface, T: TimerSource, K: TraceSink> Slideshow<S, T, K> {
    /// Builds a controller over `surface`, reporting to `sink`.
    ///
    /// If the surface has no items the controller is inert: no cursor, no
    /// timer, and every later call is a no-op. Otherwise item 0 is shown,
    /// every other item is hidden, and the auto-advance timer starts.
    #[must_use]
    pub fn with_sink(surface: S, timers: T, config: SlideshowConfig, sink: K) -> Self {
        let count = surface.item_count();
        let mut this = Self {
            surface,
            timers,
            sink,
            config,
            items: (0..count)
                .map(|position| Item {
                    position,
                    visible: position == 0,
                })
                .collect(),
            cursor: None,
            timer: None,
            drag: DragState::default(),
        };
        if count == 0 {
            return this;
        }
        for item in &this.items {
            this.surface.set_visible(item.position, item.visible);
        }
        this.cursor = Some(0);
        this.resume();
        this
    }

    /// Moves the cursor one step and swaps which item is visible.
    ///
    /// Does not touch the timer. With a single item the cursor stays at 0
    /// and the item stays visible.
    pub fn advance(&mut self, direction: Direction) {
        self.step(direction, AdvanceCause::Direct);
    }

    /// Timer entry point: advances forward without resetting the idle clock.
    pub fn tick(&mut self) {
        self.step(Direction::Forward, AdvanceCause::Timer);
    }

    /// Cancels the live timer, if any. Idempotent.
    pub fn pause(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.timers.cancel(handle);
            let at = self.timers.now();
            self.tracer().timer_cancelled(&TimerCancelledEvent { at });
        }
    }

    /// Restarts the auto-advance timer at the configured period.
    ///
    /// Any live timer is cancelled first. The timer stays stopped while the
    /// slideshow is inert, while a drag is in progress, or when the period
    /// is zero.
    pub fn resume(&mut self) {
        self.pause();
        if self.cursor.is_none() || self.drag.active || self.config.period.is_zero() {
            return;
        }
        let period = self.config.period;
        self.timer = Some(self.timers.start_repeating(period));
        let at = self.timers.now();
        self.tracer().timer_started(&TimerStartedEvent { at, period });
    }

    /// Touch start: records the drag origin and pauses auto-advance.
    pub fn handle_gesture_start(&mut self, position: f64) {
        if self.cursor.is_none() {
            return;
        }
        self.drag.begin(position);
        let at = self.timers.now();
        self.tracer().gesture_start(&GestureStartEvent { at, position });
        self.pause();
    }

    /// Touch cancel: drops the gesture in progress without moving, then
    /// resumes.
    ///
    /// A no-op when no gesture is in progress.
    pub fn cancel_gesture(&mut self) {
        if !core::mem::take(&mut self.drag).active {
            return;
        }
        self.resume();
    }

    /// Touch end: swipes if the travel exceeds the threshold, then resumes.
    ///
    /// A no-op without a matching [`handle_gesture_start`]. Otherwise the
    /// timer restarts whether or not the gesture was a swipe, so a tap still
    /// resets the idle clock.
    ///
    /// [`handle_gesture_start`]: Self::handle_gesture_start
    pub fn handle_gesture_end(&mut self, position: f64) {
        let Some(delta) = self.drag.finish(position) else {
            return;
        };
        let swipe = classify_swipe(delta, self.config.swipe_threshold);
        let at = self.timers.now();
        self.tracer().gesture_end(&GestureEndEvent {
            at,
            position,
            delta,
            swipe,
        });
        if let Some(direction) = swipe {
            self.step(direction, AdvanceCause::Swipe);
        }
        self.resume();
    }

    /// Button press: advances, then restarts the idle clock.
    pub fn handle_manual_advance(&mut self, direction: Direction) {
        self.step(direction, AdvanceCause::Button);
        self.resume();
    }

    /// Cancels the timer and forgets any gesture in progress.
    ///
    /// The controller stays usable; [`resume`](Self::resume) restarts it.
    pub fn teardown(&mut self) {
        self.drag = DragState::default();
        self.pause();
    }

    /// Returns the cursor, or `None` for an inert slideshow.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the items in surface order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns `true` while an auto-advance timer is live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns `true` between a gesture start and its end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the timer source.
    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Returns the trace sink.
    #[must_use]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    fn step(&mut self, direction: Direction, cause: AdvanceCause) {
        let Some(from) = self.cursor else {
            return;
        };
        let to = direction.step(from, self.items.len());
        self.set_visible(from, false);
        self.set_visible(to, true);
        self.cursor = Some(to);
        let at = self.timers.now();
        self.tracer().slide_changed(&SlideChangedEvent {
            at,
            from,
            to,
            direction,
            cause,
        });
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        self.items[index].visible = visible;
        self.surface.set_visible(index, visible);
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::new(&mut self.sink)
    }
}

impl<S: Surface, K: TraceSink> Slideshow<S, VirtualTimers, K> {
    /// Moves the virtual clock forward by `by`, delivering every tick that
    /// fell due. Returns the number of ticks delivered.
    ///
    /// Each tick is delivered with the clock reading its due time.
    pub fn run_for(&mut self, by: Duration) -> u32 {
        let end = self.timers.now().saturating_add(by);
        let mut delivered = 0_u32;
        while let Some(due) = self.timers.next_due().filter(|&due| due <= end) {
            let fired = self
                .timers
                .advance(due.saturating_duration_since(self.timers.now()));
            for _ in 0..fired {
                self.tick();
            }
            delivered = delivered.saturating_add(fired);
        }
        self.timers
            .advance(end.saturating_duration_since(self.timers.now()));
        delivered
    }
}

impl<S: Surface, T: TimerSource, K: TraceSink> Drop for Slideshow<S, T, K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::time::HostTime;

    /// Records visibility as the DOM would see it.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        visible: Vec<bool>,
        writes: usize,
    }

    impl RecordingSurface {
        fn with_items(n: usize) -> Self {
            Self {
                visible: vec![false; n],
                writes: 0,
            }
        }

        fn shown(&self) -> Vec<usize> {
            self.visible
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.then_some(i))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn item_count(&self) -> usize {
            self.visible.len()
        }

        fn set_visible(&mut self, index: usize, visible: bool) {
            self.visible[index] = visible;
            self.writes += 1;
        }
    }

    const PERIOD: Duration = Duration::from_millis(8_000);

    fn slideshow(n: usize) -> Slideshow<RecordingSurface, VirtualTimers> {
        Slideshow::initialize(
            RecordingSurface::with_items(n),
            VirtualTimers::default(),
            SlideshowConfig::portfolio(),
        )
    }

    fn assert_one_visible(s: &Slideshow<RecordingSurface, VirtualTimers>) {
        let cursor = s.cursor().expect("non-empty slideshow has a cursor");
        assert!(cursor < s.items().len(), "cursor {cursor} out of range");
        assert_eq!(s.surface().shown(), vec![cursor], "surface disagrees");
        let flagged: Vec<usize> = s
            .items()
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.position)
            .collect();
        assert_eq!(flagged, vec![cursor], "item flags disagree");
    }

    #[test]
    fn initialize_shows_first_item_and_starts_timer() {
        let s = slideshow(3);
        assert_eq!(s.cursor(), Some(0));
        assert!(s.is_running());
        assert_eq!(s.timers().live_count(), 1);
        assert_one_visible(&s);
    }

    #[test]
    fn empty_slideshow_is_inert() {
        let mut s = slideshow(0);
        assert_eq!(s.cursor(), None);
        assert!(!s.is_running());

        s.pause();
        s.resume();
        s.advance(Direction::Forward);
        s.handle_gesture_start(100.0);
        assert!(!s.is_dragging());
        s.handle_gesture_end(0.0);
        s.cancel_gesture();
        s.handle_manual_advance(Direction::Backward);
        assert_eq!(s.run_for(PERIOD.saturating_mul(3)), 0);

        assert_eq!(s.cursor(), None);
        assert!(!s.is_running());
        assert_eq!(s.timers().started_count(), 0);
        assert_eq!(s.surface().writes, 0);
    }

    #[test]
    fn cursor_stays_in_range_under_any_sequence() {
        for n in 1..=5 {
            let mut s = slideshow(n);
            let pattern = [
                Direction::Forward,
                Direction::Backward,
                Direction::Backward,
                Direction::Backward,
                Direction::Forward,
                Direction::Backward,
                Direction::Forward,
                Direction::Forward,
                Direction::Forward,
            ];
            for (i, dir) in pattern.iter().cycle().take(40).enumerate() {
                s.advance(*dir);
                assert_one_visible(&s);
                assert!(s.cursor().is_some(), "step {i} lost the cursor");
            }
        }
    }

    #[test]
    fn forward_then_backward_is_identity() {
        for n in 1..=6 {
            let mut s = slideshow(n);
            for start in 0..n {
                while s.cursor() != Some(start) {
                    s.advance(Direction::Forward);
                }
                s.advance(Direction::Forward);
                s.advance(Direction::Backward);
                assert_eq!(s.cursor(), Some(start), "n={n} start={start}");
            }
        }
    }

    #[test]
    fn single_item_stays_put() {
        let mut s = slideshow(1);
        s.advance(Direction::Forward);
        s.advance(Direction::Backward);
        s.tick();
        assert_eq!(s.cursor(), Some(0));
        assert_one_visible(&s);
    }

    #[test]
    fn full_cycle_has_no_drift() {
        let mut s = slideshow(4);
        for _ in 0..4 * 25 {
            s.advance(Direction::Forward);
        }
        assert_eq!(s.cursor(), Some(0));
        for _ in 0..4 * 25 + 1 {
            s.advance(Direction::Backward);
        }
        assert_eq!(s.cursor(), Some(3));
    }

    #[test]
    fn timer_advances_once_per_period() {
        let mut s = slideshow(3);
        assert_eq!(s.run_for(Duration(7_999)), 0);
        assert_eq!(s.cursor(), Some(0));
        assert_eq!(s.run_for(Duration(1)), 1);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.run_for(PERIOD.saturating_mul(2)), 2);
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn double_resume_keeps_one_timer() {
        let mut s = slideshow(5);
        s.resume();
        s.resume();
        assert_eq!(s.timers().live_count(), 1);

        assert_eq!(s.run_for(PERIOD), 1, "must not advance at double speed");
        assert_eq!(s.cursor(), Some(1));
    }

    #[test]
    fn pause_is_idempotent_and_stops_ticks() {
        let mut s = slideshow(3);
        s.pause();
        s.pause();
        assert!(!s.is_running());
        assert_eq!(s.run_for(PERIOD.saturating_mul(4)), 0);
        assert_eq!(s.cursor(), Some(0));

        s.resume();
        assert_eq!(s.run_for(PERIOD), 1);
    }

    #[test]
    fn resume_resets_idle_clock() {
        let mut s = slideshow(3);
        assert_eq!(s.run_for(Duration(6_000)), 0);
        s.resume();
        // Without the reset this would be the first tick.
        assert_eq!(s.run_for(Duration(4_000)), 0);
        assert_eq!(s.run_for(Duration(4_000)), 1);
    }

    #[test]
    fn short_gesture_does_not_move_but_restarts_timer() {
        let mut s = slideshow(3);
        let started = s.timers().started_count();

        s.handle_gesture_start(200.0);
        assert!(!s.is_running(), "timer must stop during a drag");
        assert!(s.is_dragging());
        s.handle_gesture_end(150.0);

        assert_eq!(s.cursor(), Some(0));
        assert!(s.is_running());
        assert!(!s.is_dragging());
        assert_eq!(s.timers().started_count(), started + 1);
    }

    #[test]
    fn leftward_swipe_advances_forward_once() {
        let mut s = slideshow(3);
        s.handle_gesture_start(300.0);
        s.handle_gesture_end(225.0);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.timers().live_count(), 1);
    }

    #[test]
    fn rightward_swipe_advances_backward() {
        let mut s = slideshow(3);
        s.handle_gesture_start(100.0);
        s.handle_gesture_end(260.0);
        assert_eq!(s.cursor(), Some(2));
        assert_one_visible(&s);
    }

    #[test]
    fn stray_gesture_end_is_ignored() {
        let mut s = slideshow(3);
        s.pause();
        s.handle_gesture_end(0.0);
        assert_eq!(s.cursor(), Some(0));
        assert!(!s.is_running(), "touch end without start must not resume");
    }

    #[test]
    fn timer_stays_stopped_during_drag() {
        let mut s = slideshow(3);
        s.handle_gesture_start(10.0);
        // Pointer leave during a touch must not restart the clock.
        s.resume();
        assert!(!s.is_running());
        assert_eq!(s.run_for(PERIOD.saturating_mul(2)), 0);
        s.handle_gesture_end(12.0);
        assert!(s.is_running());
    }

    #[test]
    fn cancelled_gesture_restarts_autoplay() {
        let mut s = slideshow(3);
        s.handle_gesture_start(100.0);
        s.pause();
        s.resume();
        assert!(!s.is_running(), "still dragging");

        s.cancel_gesture();
        assert!(!s.is_dragging());
        assert!(s.is_running(), "autoplay must survive an interrupted touch");
        assert_eq!(s.run_for(Duration::from_secs(600)), 75);

        // A late touch end for the cancelled gesture changes nothing.
        let cursor = s.cursor();
        s.handle_gesture_end(-300.0);
        assert_eq!(s.cursor(), cursor);
    }

    #[test]
    fn run_for_stops_at_end_of_clock() {
        let mut s = Slideshow::initialize(
            RecordingSurface::with_items(3),
            VirtualTimers::new(HostTime(u64::MAX - 10)),
            SlideshowConfig::portfolio(),
        );
        assert_eq!(s.run_for(Duration::from_secs(600)), 0);
        assert_eq!(s.timers().now(), HostTime(u64::MAX));
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn cancel_without_gesture_is_noop() {
        let mut s = slideshow(3);
        s.pause();
        s.cancel_gesture();
        assert!(!s.is_running(), "no gesture, so nothing to resume");
    }

    #[test]
    fn manual_advance_scenario_wraps() {
        let mut s = slideshow(3);
        assert_eq!(s.cursor(), Some(0));

        let started = s.timers().started_count();
        s.handle_manual_advance(Direction::Forward);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.timers().started_count(), started + 1, "timer restarted");
        assert_eq!(s.timers().live_count(), 1);

        s.handle_manual_advance(Direction::Backward);
        s.handle_manual_advance(Direction::Backward);
        assert_eq!(s.cursor(), Some(2));
        assert_one_visible(&s);

        s.advance(Direction::Forward);
        assert_eq!(s.cursor(), Some(0));
        assert_one_visible(&s);
    }

    #[test]
    fn manual_advance_resets_idle_clock() {
        let mut s = slideshow(3);
        s.run_for(Duration(7_000));
        s.handle_manual_advance(Direction::Forward);
        assert_eq!(s.run_for(Duration(7_000)), 0);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.run_for(Duration(1_000)), 1);
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn zero_period_never_starts_timer() {
        let s = Slideshow::initialize(
            RecordingSurface::with_items(2),
            VirtualTimers::default(),
            SlideshowConfig::with_period(Duration::ZERO),
        );
        assert_eq!(s.cursor(), Some(0));
        assert!(!s.is_running());
    }

    #[test]
    fn teardown_cancels_timer_and_drag() {
        let mut s = slideshow(3);
        s.handle_gesture_start(50.0);
        s.teardown();
        assert!(!s.is_running());
        assert!(!s.is_dragging());
        s.handle_gesture_end(-200.0);
        assert_eq!(s.cursor(), Some(0), "gesture was forgotten");
    }

    #[test]
    fn advance_touches_exactly_two_items() {
        let mut s = slideshow(4);
        let before = s.surface().writes;
        s.advance(Direction::Forward);
        assert_eq!(s.surface().writes - before, 2);
    }

    #[test]
    fn virtual_clock_is_shared_with_timer() {
        let s = Slideshow::initialize(
            RecordingSurface::with_items(2),
            VirtualTimers::new(HostTime(500)),
            SlideshowConfig::portfolio(),
        );
        assert_eq!(s.timers().next_due(), Some(HostTime(8_500)));
    }

    #[test]
    fn direction_step_and_label() {
        assert_eq!(Direction::Forward.step(2, 3), 0);
        assert_eq!(Direction::Backward.step(0, 3), 2);
        assert_eq!(Direction::Backward.as_str(), "backward");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_reports_causes() {
        #[derive(Default)]
        struct Causes(Vec<(AdvanceCause, usize)>, u32, u32);
        impl TraceSink for Causes {
            fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
                self.0.push((e.cause, e.to));
            }
            fn on_timer_started(&mut self, _: &TimerStartedEvent) {
                self.1 += 1;
            }
            fn on_timer_cancelled(&mut self, _: &TimerCancelledEvent) {
                self.2 += 1;
            }
        }

        let mut s = Slideshow::with_sink(
            RecordingSurface::with_items(3),
            VirtualTimers::default(),
            SlideshowConfig::portfolio(),
            Causes::default(),
        );
        s.run_for(PERIOD);
        s.handle_manual_advance(Direction::Forward);
        s.handle_gesture_start(100.0);
        s.handle_gesture_end(0.0);
        s.advance(Direction::Backward);

        assert_eq!(
            s.sink().0,
            vec![
                (AdvanceCause::Timer, 1),
                (AdvanceCause::Button, 2),
                (AdvanceCause::Swipe, 0),
                (AdvanceCause::Direct, 2),
            ]
        );
        // init + button + gesture end
        assert_eq!(s.sink().1, 3);
        // button restart + gesture start
        assert_eq!(s.sink().2, 2);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn inert_slideshow_emits_no_gesture_events() {
        #[derive(Default)]
        struct Gestures(u32);
        impl TraceSink for Gestures {
            fn on_gesture_start(&mut self, _: &GestureStartEvent) {
                self.0 += 1;
            }
            fn on_gesture_end(&mut self, _: &GestureEndEvent) {
                self.0 += 1;
            }
        }

        let mut s = Slideshow::with_sink(
            RecordingSurface::with_items(0),
            VirtualTimers::default(),
            SlideshowConfig::portfolio(),
            Gestures::default(),
        );
        s.handle_gesture_start(100.0);
        assert!(!s.is_dragging());
        s.handle_gesture_end(0.0);
        s.cancel_gesture();
        assert_eq!(s.sink().0, 0);
        assert!(!s.is_running());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn run_for_delivers_ticks_at_due_time() {
        #[derive(Default)]
        struct Times(Vec<HostTime>);
        impl TraceSink for Times {
            fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
                self.0.push(e.at);
            }
        }

        let mut s = Slideshow::with_sink(
            RecordingSurface::with_items(3),
            VirtualTimers::default(),
            SlideshowConfig::portfolio(),
            Times::default(),
        );
        assert_eq!(s.run_for(Duration(20_000)), 2);
        assert_eq!(s.sink().0, vec![HostTime(8_000), HostTime(16_000)]);
        assert_eq!(s.timers().now(), HostTime(20_000));
    }
}
