// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State and arithmetic behind the portfolio page's interactive effects.
//!
//! `vitrine_core` holds everything that can be reasoned about without a
//! browser. It is `no_std` compatible (with `alloc`); DOM bindings live in
//! `vitrine_backend_web`.
//!
//! # Architecture
//!
//! The slideshow is the only stateful component. Input adapters call into a
//! single [`Slideshow`](slideshow::Slideshow) instance, which mirrors its
//! state onto a [`Surface`](surface::Surface) and owns at most one live timer
//! from a [`TimerSource`](timer::TimerSource):
//!
//! ```text
//!   TimerSource tick ──┐
//!   pointer enter/leave┼──► Slideshow ──► Surface::set_visible()
//!   touch start/end ───┤        │
//!   prev/next buttons ─┘        └──► TraceSink
//! ```
//!
//! **[`slideshow`]**: Cursor, items, timer ownership and input arbitration.
//!
//! **[`gesture`]**: Drag bookkeeping and swipe classification.
//!
//! **[`surface`]**: The [`Surface`](surface::Surface) trait backends
//! implement to show and hide items.
//!
//! **[`timer`]**: The [`TimerSource`](timer::TimerSource) capability plus a
//! deterministic [`VirtualTimers`](timer::VirtualTimers) implementation.
//!
//! **[`scroll`]**: Progress bar, parallax and header hide/show arithmetic.
//!
//! **[`reveal`]**: Intersection-driven reveal presets and stagger delays.
//!
//! **[`nav`]**: Navigation overlay open/closed state.
//!
//! **[`time`]**: Millisecond host time and durations.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and slideshow event
//! types, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` dispatch (one branch per
//!   call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod gesture;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod slideshow;
pub mod surface;
pub mod time;
pub mod timer;
pub mod trace;
