// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page script for the portfolio site.
//!
//! Installs every page effect once the document is parsed: scroll progress,
//! reveals, parallax, the hiding header, the navigation overlay, the footer
//! toggle, the contact slideshow and the footer year.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_web`
//! Then load the generated `pkg/portfolio_web.js` as a module from the page.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

#[cfg(debug_assertions)]
use vitrine_backend_web::ConsoleSink;
use vitrine_backend_web::{
    install_footer_toggle, install_header, install_nav_menu, install_parallax, install_reveals,
    install_scroll_progress, mount_slideshow_by_id, on_dom_ready, set_current_year,
};
use vitrine_core::reveal::{FOOTER_TOGGLE, PORTFOLIO_REVEALS};
use vitrine_core::slideshow::SlideshowConfig;
#[cfg(not(debug_assertions))]
use vitrine_core::trace::NoopSink;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Id of the slideshow container in the contact section.
const SLIDESHOW_ID: &str = "contactSlideshow";

/// Slideshow trace lines go to the console in debug builds only.
#[cfg(debug_assertions)]
fn slideshow_sink() -> ConsoleSink {
    ConsoleSink::new()
}

#[cfg(not(debug_assertions))]
fn slideshow_sink() -> NoopSink {
    NoopSink
}

/// Entry point: waits for the document, then installs the page effects.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("window");
    let document = window.document().expect("document");

    let doc = document.clone();
    on_dom_ready(&document, move || {
        if let Err(err) = install(&window, &doc) {
            web_sys::console::error_1(&err);
        }
    })
}

/// Installs every effect for the lifetime of the page.
fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    if let Some(binding) = install_scroll_progress(window, document)? {
        binding.forget();
    }
    for observer in install_reveals(document, PORTFOLIO_REVEALS)? {
        observer.forget();
    }
    if let Some(binding) = install_parallax(window, document)? {
        binding.forget();
    }
    if let Some(binding) = install_header(window, document)? {
        binding.forget();
    }
    for binding in install_nav_menu(document)? {
        binding.forget();
    }
    if let Some(observer) = install_footer_toggle(document, &FOOTER_TOGGLE)? {
        observer.forget();
    }
    let slideshow = mount_slideshow_by_id(
        document,
        SLIDESHOW_ID,
        SlideshowConfig::portfolio(),
        slideshow_sink(),
    )?;
    if let Some(handle) = slideshow {
        core::mem::forget(handle);
    }
    set_current_year(document);
    Ok(())
}
