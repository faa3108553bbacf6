// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` wiring for reveals and the footer toggle.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use vitrine_core::reveal::{InlineStyle, RevealEffect, RevealSpec, Stagger, ToggleSpec};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::interval::{set_timeout, timeout_ms};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live `IntersectionObserver` and its callback.
///
/// Dropping it disconnects the observer. Call [`forget`](Self::forget) to
/// keep it for the lifetime of the page.
pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

impl ObserverBinding {
    fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: ObserverClosure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }

    /// Leaves the observer running for the lifetime of the page.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for ObserverBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverBinding").finish_non_exhaustive()
    }
}

fn apply_style(el: &HtmlElement, style: &InlineStyle) {
    let css = el.style();
    let _ = css.set_property("opacity", style.opacity);
    let _ = css.set_property("transform", style.transform);
}

/// Installs one reveal over every element matching `spec.selector`.
///
/// An element is revealed the first time it intersects and is not watched
/// afterwards. Returns `Ok(None)` if nothing matches.
pub fn install_reveal(
    document: &Document,
    spec: &RevealSpec,
) -> Result<Option<ObserverBinding>, JsValue> {
    let targets = crate::elements(&document.query_selector_all(spec.selector)?);
    if targets.is_empty() {
        return Ok(None);
    }
    let margin = spec.root_margin_css();

    let binding = match spec.effect {
        RevealEffect::AddClass(class) => {
            ObserverBinding::new(spec.threshold, margin.as_deref(), move |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(class);
                observer.unobserve(&target);
            })?
        }
        RevealEffect::Stagger(stagger) => {
            for el in &targets {
                if let Some(el) = el.dyn_ref::<HtmlElement>() {
                    apply_style(el, &stagger.hidden);
                    let _ = el.style().set_property("transition", stagger.transition);
                }
            }
            let order = Rc::new(targets.clone());
            ObserverBinding::new(spec.threshold, margin.as_deref(), move |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let index = order.iter().position(|el| *el == target).unwrap_or(0);
                reveal_later(target, stagger, index);
            })?
        }
    };

    for el in &targets {
        binding.observe(el);
    }
    Ok(Some(binding))
}

/// Applies the shown style to `target` after its stagger delay.
fn reveal_later(target: Element, stagger: Stagger, index: usize) {
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let delay = stagger.delay(index);
    let show = Closure::once_into_js(move || apply_style(&target, &stagger.shown));
    set_timeout(&show, timeout_ms(delay));
}

/// Installs every reveal in `specs`, skipping those with no matching
/// elements.
pub fn install_reveals(
    document: &Document,
    specs: &[RevealSpec],
) -> Result<Vec<ObserverBinding>, JsValue> {
    let mut bindings = Vec::with_capacity(specs.len());
    for spec in specs {
        if let Some(binding) = install_reveal(document, spec)? {
            bindings.push(binding);
        }
    }
    Ok(bindings)
}

/// Keeps `spec.class` on the target element exactly while the watched
/// element is in view.
///
/// Returns `Ok(None)` if either element is missing.
pub fn install_footer_toggle(
    document: &Document,
    spec: &ToggleSpec,
) -> Result<Option<ObserverBinding>, JsValue> {
    let (Some(target), Some(watched)) = (
        document.query_selector(spec.target)?,
        document.query_selector(spec.watched)?,
    ) else {
        return Ok(None);
    };
    let class = spec.class;
    let binding = ObserverBinding::new(spec.threshold, None, move |entry, _| {
        let _ = target
            .class_list()
            .toggle_with_force(class, entry.is_intersecting());
    })?;
    binding.observe(&watched);
    Ok(Some(binding))
}
