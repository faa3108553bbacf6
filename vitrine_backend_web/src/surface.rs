// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slides as DOM elements.
//!
//! [`ClassListSurface`] shows a slide by adding a class to its element and
//! hides it by removing the class. All presentation (stacking, fades) is up
//! to the page's CSS.

use alloc::vec::Vec;

use vitrine_core::surface::Surface;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Class that marks the visible slide.
pub const ACTIVE_SLIDE_CLASS: &str = "active";

/// A [`Surface`] over a fixed list of elements.
pub struct ClassListSurface {
    elements: Vec<Element>,
}

impl core::fmt::Debug for ClassListSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassListSurface")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl ClassListSurface {
    /// Creates a surface over `elements`, in order, using the `active` class.
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Creates a surface over every descendant of `root` matching
    /// `selector`, in document order.
    pub fn from_selector(root: &Element, selector: &str) -> Result<Self, JsValue> {
        let list = root.query_selector_all(selector)?;
        Ok(Self::new(crate::elements(&list)))
    }
}

impl Surface for ClassListSurface {
    fn item_count(&self) -> usize {
        self.elements.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(el) = self.elements.get(index) {
            let classes = el.class_list();
            let _ = if visible {
                classes.add_1(ACTIVE_SLIDE_CLASS)
            } else {
                classes.remove_1(ACTIVE_SLIDE_CLASS)
            };
        }
    }
}
