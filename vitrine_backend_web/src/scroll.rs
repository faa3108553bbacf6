// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll listeners: progress bar, parallax and header.
//!
//! Parallax and header updates go through [`listen_per_frame`], which
//! coalesces scroll events into one `requestAnimationFrame` callback with a
//! [`FrameThrottle`]. The progress bar updates on every scroll event.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use vitrine_core::scroll::{
    FrameThrottle, HeaderTracker, parallax_offset, parse_speed, progress_percent,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::interval::request_animation_frame;
use crate::listener::{EventBinding, Passive};

/// Class toggled on the site header.
const HEADER_HIDDEN_CLASS: &str = "hidden";

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Registers a passive `scroll` listener on `window` that runs `update` at
/// most once per animation frame.
fn listen_per_frame(
    window: &Window,
    update: impl FnMut() + 'static,
) -> Result<EventBinding, JsValue> {
    let update: Rc<RefCell<Box<dyn FnMut()>>> = Rc::new(RefCell::new(Box::new(update)));
    let throttle = Rc::new(Cell::new(FrameThrottle::default()));

    EventBinding::listen(window.as_ref(), "scroll", Passive::Yes, move |_| {
        let mut latch = throttle.get();
        if !latch.request() {
            return;
        }
        throttle.set(latch);

        let update = Rc::clone(&update);
        let throttle = Rc::clone(&throttle);
        let frame = Closure::once_into_js(move || {
            if let Ok(mut update) = update.try_borrow_mut() {
                update();
            }
            let mut latch = throttle.get();
            latch.complete();
            throttle.set(latch);
        });
        request_animation_frame(&frame);
    })
}

/// Keeps the width of `.scroll-progress` in step with the scroll position.
///
/// Returns `Ok(None)` if the page has no progress bar.
pub fn install_scroll_progress(
    window: &Window,
    document: &Document,
) -> Result<Option<EventBinding>, JsValue> {
    let Some(bar) = document.query_selector(".scroll-progress")? else {
        return Ok(None);
    };
    let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
        return Ok(None);
    };

    let win = window.clone();
    let doc = document.clone();
    let binding = EventBinding::listen(window.as_ref(), "scroll", Passive::Yes, move |_| {
        let document_height = doc
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        let viewport_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let percent = progress_percent(scroll_y(&win), document_height, viewport_height);
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    })?;
    Ok(Some(binding))
}

/// Translates every `.parallax-element` against the scroll direction.
///
/// Each element's speed is read from `data-speed` once, at install time.
/// Returns `Ok(None)` if the page has no parallax elements.
pub fn install_parallax(
    window: &Window,
    document: &Document,
) -> Result<Option<EventBinding>, JsValue> {
    let layers: Vec<(HtmlElement, f64)> =
        crate::elements(&document.query_selector_all(".parallax-element")?)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                let speed = parse_speed(el.dataset().get("speed").as_deref());
                (el, speed)
            })
            .collect();
    if layers.is_empty() {
        return Ok(None);
    }

    let win = window.clone();
    listen_per_frame(window, move || {
        let y = scroll_y(&win);
        for (el, speed) in &layers {
            let offset = parallax_offset(y, *speed);
            let _ = el
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
    })
    .map(Some)
}

/// Hides `header` while scrolling down and shows it again on scroll up.
///
/// Returns `Ok(None)` if the page has no header.
pub fn install_header(
    window: &Window,
    document: &Document,
) -> Result<Option<EventBinding>, JsValue> {
    let Some(header) = document.query_selector("header")? else {
        return Ok(None);
    };

    let win = window.clone();
    let mut tracker = HeaderTracker::new();
    listen_per_frame(window, move || {
        let hidden = tracker.update(scroll_y(&win)).is_hidden();
        set_class(&header, HEADER_HIDDEN_CLASS, hidden);
    })
    .map(Some)
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
