// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Times are
//! timer-source milliseconds.

use std::io::Write;

use vitrine_core::trace::{
    GestureEndEvent, GestureStartEvent, SlideChangedEvent, TimerCancelledEvent,
    TimerStartedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        let _ = writeln!(self.writer, "{e}");
    }

    fn on_timer_started(&mut self, e: &TimerStartedEvent) {
        let _ = writeln!(self.writer, "{e}");
    }

    fn on_timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        let _ = writeln!(self.writer, "{e}");
    }

    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        let _ = writeln!(self.writer, "{e}");
    }

    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        let _ = writeln!(self.writer, "{e}");
    }
}
