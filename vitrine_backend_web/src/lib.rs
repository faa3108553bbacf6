// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vitrine.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`IntervalTimers`]: `setInterval`-backed [`TimerSource`](vitrine_core::timer::TimerSource)
//! - [`ClassListSurface`]: slides shown and hidden through a CSS class
//! - [`mount_slideshow`]: wires pointer, touch and button input to a
//!   [`Slideshow`](vitrine_core::slideshow::Slideshow)
//! - [`ConsoleSink`]: slideshow trace lines on the browser console
//! - page effects: [`install_scroll_progress`], [`install_parallax`],
//!   [`install_header`], [`install_reveals`], [`install_footer_toggle`],
//!   [`install_nav_menu`], [`set_current_year`]
//!
//! Every installer looks its elements up once. When an element is missing
//! the installer does nothing and reports that through its return value;
//! only failing browser calls are errors.

#![no_std]

extern crate alloc;

mod console;
mod interval;
mod listener;
mod nav;
mod page;
mod reveal;
mod scroll;
mod slideshow;
mod surface;

pub use console::ConsoleSink;
pub use interval::{IntervalHandle, IntervalTimers};
pub use listener::{EventBinding, Passive};
pub use nav::install_nav_menu;
pub use page::{on_dom_ready, set_current_year};
pub use reveal::{ObserverBinding, install_footer_toggle, install_reveal, install_reveals};
pub use scroll::{install_header, install_parallax, install_scroll_progress};
pub use slideshow::{DomSlideshow, SlideshowHandle, mount_slideshow, mount_slideshow_by_id};
pub use surface::{ACTIVE_SLIDE_CLASS, ClassListSurface};

use alloc::vec::Vec;

use vitrine_core::time::HostTime;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, NodeList};

/// Returns the current host time from `performance.now()`, in whole
/// milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = interval::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; ms fits in u64"
    )]
    let ms = ms as u64;
    HostTime(ms)
}

/// Collects the elements of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
