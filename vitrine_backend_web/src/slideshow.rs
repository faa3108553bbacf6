// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a slideshow on a DOM element.
//!
//! The controller lives in an `Rc<RefCell<_>>`. Its interval callback and
//! every event listener hold only a `Weak` to it, so dropping the
//! [`SlideshowHandle`] removes the listeners, cancels the timer and frees
//! the controller. Callbacks that find the controller already borrowed (a
//! re-entrant dispatch) skip the event.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use vitrine_core::slideshow::{Direction, Slideshow, SlideshowConfig};
use vitrine_core::surface::Surface as _;
use vitrine_core::trace::TraceSink;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, TouchEvent, TouchList};

use crate::interval::IntervalTimers;
use crate::listener::{EventBinding, Passive};
use crate::surface::ClassListSurface;

/// A slideshow over DOM elements driven by `setInterval`.
pub type DomSlideshow<K> = Slideshow<ClassListSurface, IntervalTimers, K>;

type Shared<K> = Rc<RefCell<DomSlideshow<K>>>;

/// A mounted slideshow and the listeners feeding it.
///
/// Dropping the handle tears the slideshow down. Keep it alive (or
/// `mem::forget` it) for as long as the slideshow should run.
pub struct SlideshowHandle<K: TraceSink + 'static> {
    // Dropped first: listeners go away before the controller does.
    bindings: Vec<EventBinding>,
    slideshow: Shared<K>,
}

impl<K: TraceSink + 'static> core::fmt::Debug for SlideshowHandle<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlideshowHandle")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl<K: TraceSink + 'static> SlideshowHandle<K> {
    /// Returns the shared controller.
    #[must_use]
    pub fn slideshow(&self) -> &Rc<RefCell<DomSlideshow<K>>> {
        &self.slideshow
    }

    /// Stops the slideshow and removes its listeners.
    pub fn teardown(self) {
        let Self {
            bindings,
            slideshow,
        } = self;
        drop(bindings);
        if let Ok(mut s) = slideshow.try_borrow_mut() {
            s.teardown();
        }
    }
}

/// Runs `f` on the controller if it is still alive and not already
/// borrowed.
fn with_slideshow<K: TraceSink>(
    weak: &Weak<RefCell<DomSlideshow<K>>>,
    f: impl FnOnce(&mut DomSlideshow<K>),
) {
    if let Some(rc) = weak.upgrade()
        && let Ok(mut s) = rc.try_borrow_mut()
    {
        f(&mut s);
    }
}

/// Horizontal client position of the first touch in `list`.
fn first_touch_x(list: &TouchList) -> Option<f64> {
    list.get(0).map(|touch| f64::from(touch.client_x()))
}

/// Mounts a slideshow over the `<img>` children of `root`.
///
/// Returns `Ok(None)` when `root` has no images; nothing is installed then.
pub fn mount_slideshow<K: TraceSink + 'static>(
    root: &Element,
    config: SlideshowConfig,
    sink: K,
) -> Result<Option<SlideshowHandle<K>>, JsValue> {
    let surface = ClassListSurface::from_selector(root, "img")?;
    if surface.item_count() == 0 {
        return Ok(None);
    }

    let slideshow: Shared<K> = Rc::new_cyclic(|weak: &Weak<RefCell<DomSlideshow<K>>>| {
        let weak = weak.clone();
        let timers = IntervalTimers::new(move || with_slideshow(&weak, Slideshow::tick));
        RefCell::new(Slideshow::with_sink(surface, timers, config, sink))
    });

    let mut bindings = Vec::new();
    let target: &web_sys::EventTarget = root.as_ref();

    let weak = Rc::downgrade(&slideshow);
    bindings.push(EventBinding::listen(target, "mouseenter", Passive::No, move |_| {
        with_slideshow(&weak, Slideshow::pause);
    })?);

    let weak = Rc::downgrade(&slideshow);
    bindings.push(EventBinding::listen(target, "mouseleave", Passive::No, move |_| {
        with_slideshow(&weak, Slideshow::resume);
    })?);

    let weak = Rc::downgrade(&slideshow);
    bindings.push(EventBinding::listen(
        target,
        "touchstart",
        Passive::Yes,
        move |event: Event| {
            let Some(x) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| first_touch_x(&e.touches()))
            else {
                return;
            };
            with_slideshow(&weak, |s| s.handle_gesture_start(x));
        },
    )?);

    let weak = Rc::downgrade(&slideshow);
    bindings.push(EventBinding::listen(
        target,
        "touchend",
        Passive::No,
        move |event: Event| {
            let Some(x) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| first_touch_x(&e.changed_touches()))
            else {
                return;
            };
            with_slideshow(&weak, |s| s.handle_gesture_end(x));
        },
    )?);

    // No touchend follows a cancelled touch.
    let weak = Rc::downgrade(&slideshow);
    bindings.push(EventBinding::listen(target, "touchcancel", Passive::Yes, move |_| {
        with_slideshow(&weak, Slideshow::cancel_gesture);
    })?);

    for (selector, direction) in [
        (".slideshow-btn.prev", Direction::Backward),
        (".slideshow-btn.next", Direction::Forward),
    ] {
        let Some(button) = root.query_selector(selector)? else {
            continue;
        };
        let weak = Rc::downgrade(&slideshow);
        bindings.push(EventBinding::listen(
            button.as_ref(),
            "click",
            Passive::No,
            move |event: Event| {
                event.prevent_default();
                with_slideshow(&weak, |s| s.handle_manual_advance(direction));
            },
        )?);
    }

    Ok(Some(SlideshowHandle {
        bindings,
        slideshow,
    }))
}

/// Mounts a slideshow on the element with id `id`.
///
/// Returns `Ok(None)` if there is no such element or it has no images.
pub fn mount_slideshow_by_id<K: TraceSink + 'static>(
    document: &Document,
    id: &str,
    config: SlideshowConfig,
    sink: K,
) -> Result<Option<SlideshowHandle<K>>, JsValue> {
    match document.get_element_by_id(id) {
        Some(root) => mount_slideshow(&root, config, sink),
        None => Ok(None),
    }
}
