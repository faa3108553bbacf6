// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sending one trace stream to two sinks.

use vitrine_core::trace::{
    GestureEndEvent, GestureStartEvent, SlideChangedEvent, TimerCancelledEvent,
    TimerStartedEvent, TraceSink,
};

/// A [`TraceSink`] that forwards every event to `A`, then to `B`.
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B> {
    /// First receiver.
    pub first: A,
    /// Second receiver.
    pub second: B,
}

impl<A: TraceSink, B: TraceSink> Tee<A, B> {
    /// Combines two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tee back into its sinks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.first.on_slide_changed(e);
        self.second.on_slide_changed(e);
    }

    fn on_timer_started(&mut self, e: &TimerStartedEvent) {
        self.first.on_timer_started(e);
        self.second.on_timer_started(e);
    }

    fn on_timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        self.first.on_timer_cancelled(e);
        self.second.on_timer_cancelled(e);
    }

    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        self.first.on_gesture_start(e);
        self.second.on_gesture_start(e);
    }

    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        self.first.on_gesture_end(e);
        self.second.on_gesture_end(e);
    }
}
