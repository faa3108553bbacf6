// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned DOM event listeners.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Whether a listener promises never to call `preventDefault`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passive {
    /// Registered with `{ passive: true }`; lets the browser scroll without
    /// waiting on the handler.
    Yes,
    /// Default registration.
    No,
}

/// An event listener that is removed when dropped.
///
/// Call [`forget`](Self::forget) for listeners that should live as long as
/// the page.
pub struct EventBinding {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Registers `handler` for `kind` events on `target`.
    pub fn listen(
        target: &EventTarget,
        kind: &'static str,
        passive: Passive,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match passive {
            Passive::Yes => {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind,
                    closure.as_ref().unchecked_ref(),
                    &options,
                )?;
            }
            Passive::No => {
                target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            }
        }
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Leaves the listener registered for the lifetime of the page.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBinding")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
