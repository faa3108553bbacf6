// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` timer source.
//!
//! [`IntervalTimers`] owns one JS closure, built up front from the callback
//! passed to [`IntervalTimers::new`]. Every timer it starts registers that
//! same closure with `setInterval`; cancelling calls `clearInterval` with the
//! returned id. The closure must outlive every interval that references it,
//! which the slideshow guarantees by cancelling in its `Drop` before its
//! fields are dropped.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use vitrine_core::time::{Duration, HostTime};
use vitrine_core::timer::TimerSource;

// Direct global bindings instead of `web_sys::Window` methods, so timers
// work without fetching (and unwrapping) the Window on every restart.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    pub(crate) fn set_timeout(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    pub(crate) fn request_animation_frame(callback: &JsValue) -> i32;
}

/// Converts a duration to the `i32` milliseconds browser timers take.
pub(crate) fn timeout_ms(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Id of a live `setInterval` timer.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct IntervalHandle(i32);

/// A [`TimerSource`] backed by `setInterval` / `clearInterval`.
pub struct IntervalTimers {
    callback: Closure<dyn FnMut()>,
}

impl IntervalTimers {
    /// Creates a source whose timers all invoke `on_tick`.
    pub fn new(on_tick: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
        }
    }
}

impl TimerSource for IntervalTimers {
    type Handle = IntervalHandle;

    fn now(&self) -> HostTime {
        crate::now()
    }

    fn start_repeating(&mut self, period: Duration) -> IntervalHandle {
        IntervalHandle(set_interval(self.callback.as_ref(), timeout_ms(period)))
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        clear_interval(handle.0);
    }
}

impl core::fmt::Debug for IntervalTimers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimers").finish_non_exhaustive()
    }
}
