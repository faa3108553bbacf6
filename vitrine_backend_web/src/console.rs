// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::string::ToString as _;

use vitrine_core::trace::{
    GestureEndEvent, GestureStartEvent, SlideChangedEvent, TimerCancelledEvent,
    TimerStartedEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Logs slideshow trace events with `console.log`, one line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn log(line: &impl core::fmt::Display) {
    web_sys::console::log_1(&JsValue::from_str(&line.to_string()));
}

impl TraceSink for ConsoleSink {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        log(e);
    }

    fn on_timer_started(&mut self, e: &TimerStartedEvent) {
        log(e);
    }

    fn on_timer_cancelled(&mut self, e: &TimerCancelledEvent) {
        log(e);
    }

    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        log(e);
    }

    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        log(e);
    }
}
