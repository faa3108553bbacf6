// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document lifecycle helpers.

use alloc::string::ToString as _;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Runs `init` once the document has been parsed.
///
/// If parsing already finished (`readyState` is not `"loading"`), `init`
/// runs immediately. Otherwise it runs on the first `DOMContentLoaded`.
pub fn on_dom_ready(
    document: &Document,
    init: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    let callback = Closure::once_into_js(init);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}

/// Writes the current calendar year into `#currentYear`.
///
/// Returns `false` if the page has no such element.
pub fn set_current_year(document: &Document) -> bool {
    let Some(el) = document.get_element_by_id("currentYear") else {
        return false;
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    true
}
