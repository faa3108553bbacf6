// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the slideshow controller.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! controller calls whenever it changes slide, starts or cancels its timer,
//! or sees a gesture. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps a `&mut dyn TraceSink`. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method dispatches straight to the sink.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies.

use crate::slideshow::Direction;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What asked the controller to change slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdvanceCause {
    /// The auto-advance timer fired.
    Timer,
    /// A completed swipe gesture.
    Swipe,
    /// A previous/next button press.
    Button,
    /// A direct `advance` call.
    Direct,
}

impl AdvanceCause {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::Swipe => "swipe",
            Self::Button => "button",
            Self::Direct => "direct",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the visible slide changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideChangedEvent {
    /// Timer-source time of the change.
    pub at: HostTime,
    /// Cursor before the change.
    pub from: usize,
    /// Cursor after the change.
    pub to: usize,
    /// Requested direction.
    pub direction: Direction,
    /// Which input requested it.
    pub cause: AdvanceCause,
}

/// Emitted when the auto-advance timer is (re)started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerStartedEvent {
    /// Timer-source time of the start.
    pub at: HostTime,
    /// Auto-advance period.
    pub period: Duration,
}

/// Emitted when the live auto-advance timer is cancelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerCancelledEvent {
    /// Timer-source time of the cancellation.
    pub at: HostTime,
}

/// Emitted on touch start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureStartEvent {
    /// Timer-source time of the touch.
    pub at: HostTime,
    /// Horizontal position of the touch.
    pub position: f64,
}

/// Emitted on touch end for a gesture that was in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEndEvent {
    /// Timer-source time of the release.
    pub at: HostTime,
    /// Horizontal position of the release.
    pub position: f64,
    /// Signed travel since touch start.
    pub delta: f64,
    /// Direction of the resulting swipe, or `None` for a tap.
    pub swipe: Option<Direction>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the slideshow controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the visible slide changed.
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        _ = e;
    }

    /// Called when the auto-advance timer starts.
    fn on_timer_started(&mut self, e: &TimerStartedEvent) {
        _ = e;
    }

    /// Called when the auto-advance timer is cancelled.
    fn on_timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        _ = e;
    }

    /// Called on touch start.
    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        _ = e;
    }

    /// Called on touch end.
    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Line formatting
// ---------------------------------------------------------------------------

// One line per event, shared by the console and native sinks.

impl core::fmt::Display for SlideChangedEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[slide] {} -> {} {} cause={} at={}ms",
            self.from,
            self.to,
            self.direction.as_str(),
            self.cause.as_str(),
            self.at.millis(),
        )
    }
}

impl core::fmt::Display for TimerStartedEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[timer:start] period={}ms at={}ms",
            self.period.as_millis(),
            self.at.millis(),
        )
    }
}

impl core::fmt::Display for TimerCancelledEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[timer:cancel] at={}ms", self.at.millis())
    }
}

impl core::fmt::Display for GestureStartEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[gesture:start] x={:.1} at={}ms",
            self.position,
            self.at.millis(),
        )
    }
}

impl core::fmt::Display for GestureEndEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[gesture:end] x={:.1} delta={:.1} swipe={} at={}ms",
            self.position,
            self.delta,
            self.swipe.map_or("none", Direction::as_str),
            self.at.millis(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around a [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: &'a mut dyn TraceSink,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SlideChangedEvent`].
    #[inline]
    pub fn slide_changed(&mut self, e: &SlideChangedEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_slide_changed(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerStartedEvent`].
    #[inline]
    pub fn timer_started(&mut self, e: &TimerStartedEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_timer_started(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerCancelledEvent`].
    #[inline]
    pub fn timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_timer_cancelled(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureStartEvent`].
    #[inline]
    pub fn gesture_start(&mut self, e: &GestureStartEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_gesture_start(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureEndEvent`].
    #[inline]
    pub fn gesture_end(&mut self, e: &GestureEndEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_gesture_end(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_change() -> SlideChangedEvent {
        SlideChangedEvent {
            at: HostTime(8_000),
            from: 0,
            to: 1,
            direction: Direction::Forward,
            cause: AdvanceCause::Timer,
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_slide_changed(&sample_change());
        sink.on_timer_started(&TimerStartedEvent {
            at: HostTime(0),
            period: Duration(8_000),
        });
        sink.on_gesture_end(&GestureEndEvent {
            at: HostTime(10),
            position: 0.0,
            delta: -75.0,
            swipe: Some(Direction::Forward),
        });
    }

    #[test]
    fn cause_labels() {
        assert_eq!(AdvanceCause::Timer.as_str(), "timer");
        assert_eq!(AdvanceCause::Swipe.as_str(), "swipe");
        assert_eq!(AdvanceCause::Button.as_str(), "button");
        assert_eq!(AdvanceCause::Direct.as_str(), "direct");
    }

    #[test]
    fn event_lines() {
        use alloc::format;

        assert_eq!(
            format!("{}", sample_change()),
            "[slide] 0 -> 1 forward cause=timer at=8000ms"
        );
        let end = GestureEndEvent {
            at: HostTime(120),
            position: 25.0,
            delta: -75.0,
            swipe: Some(Direction::Forward),
        };
        assert_eq!(
            format!("{end}"),
            "[gesture:end] x=25.0 delta=-75.0 swipe=forward at=120ms"
        );
        let tap = GestureEndEvent {
            swipe: None,
            delta: 3.0,
            ..end
        };
        assert!(format!("{tap}").contains("swipe=none"));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            targets: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
                self.targets.push(e.to);
            }
        }

        let mut sink = RecordingSink {
            targets: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.slide_changed(&sample_change());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.targets, &[1]);
    }
}
