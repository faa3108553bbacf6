// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hamburger menu and navigation overlay.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use vitrine_core::nav::{ACTIVE_CLASS, NavMenu};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, KeyboardEvent};

use crate::listener::{EventBinding, Passive};

/// Shared view of the menu elements.
struct Menu {
    state: Cell<NavMenu>,
    hamburger: Element,
    overlay: Element,
    document: Document,
}

impl Menu {
    /// Writes the current state to the DOM.
    fn render(&self) {
        let state = self.state.get();
        for el in [&self.hamburger, &self.overlay] {
            let _ = el
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, state.is_open());
        }
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = match state.body_overflow() {
                Some(value) => style.set_property("overflow", value),
                None => style.remove_property("overflow").map(drop),
            };
        }
    }

    fn update(&self, f: impl FnOnce(&mut NavMenu) -> bool) {
        let mut state = self.state.get();
        let changed = f(&mut state);
        self.state.set(state);
        if changed {
            self.render();
        }
    }
}

/// Wires `.hamburger` to open and close `.nav-overlay`.
///
/// Links inside the overlay and the `Escape` key close it. Returns no
/// bindings if either element is missing.
pub fn install_nav_menu(document: &Document) -> Result<Vec<EventBinding>, JsValue> {
    let (Some(hamburger), Some(overlay)) = (
        document.query_selector(".hamburger")?,
        document.query_selector(".nav-overlay")?,
    ) else {
        return Ok(Vec::new());
    };

    let menu = Rc::new(Menu {
        state: Cell::new(NavMenu::new()),
        hamburger,
        overlay,
        document: document.clone(),
    });
    let mut bindings = Vec::new();

    let m = Rc::clone(&menu);
    bindings.push(EventBinding::listen(
        menu.hamburger.as_ref(),
        "click",
        Passive::No,
        move |_| {
            m.update(|state| {
                state.toggle();
                true
            });
        },
    )?);

    for link in crate::elements(&document.query_selector_all(".nav-overlay a")?) {
        let m = Rc::clone(&menu);
        bindings.push(EventBinding::listen(link.as_ref(), "click", Passive::No, move |_| {
            m.update(NavMenu::close);
        })?);
    }

    let m = Rc::clone(&menu);
    bindings.push(EventBinding::listen(document.as_ref(), "keydown", Passive::No, move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            let key = event.key();
            m.update(|state| state.on_key(&key));
        }
    })?);

    Ok(bindings)
}
