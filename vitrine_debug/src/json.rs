// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event, each on its own line.
//! Every object carries an `"event"` name and an `"at"` time in
//! milliseconds; the remaining keys depend on the event.

use std::io::Write;

use serde_json::{Value, json};

use vitrine_core::trace::{
    GestureEndEvent, GestureStartEvent, SlideChangedEvent, TimerCancelledEvent,
    TimerStartedEvent, TraceSink,
};

/// Writes trace events as newline-delimited JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of events written so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and returns the writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok()
            && self.writer.write_all(b"\n").is_ok()
        {
            self.written += 1;
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.emit(&json!({
            "event": "slide_changed",
            "at": e.at.millis(),
            "from": e.from,
            "to": e.to,
            "direction": e.direction.as_str(),
            "cause": e.cause.as_str(),
        }));
    }

    fn on_timer_started(&mut self, e: &TimerStartedEvent) {
        self.emit(&json!({
            "event": "timer_started",
            "at": e.at.millis(),
            "period_ms": e.period.as_millis(),
        }));
    }

    fn on_timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        self.emit(&json!({
            "event": "timer_cancelled",
            "at": e.at.millis(),
        }));
    }

    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        self.emit(&json!({
            "event": "gesture_start",
            "at": e.at.millis(),
            "position": e.position,
        }));
    }

    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        self.emit(&json!({
            "event": "gesture_end",
            "at": e.at.millis(),
            "position": e.position,
            "delta": e.delta,
            "swipe": e.swipe.map(|d| d.as_str()),
        }));
    }
}
