// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surface contract.
//!
//! A *surface* is whatever actually shows the slides: a set of `<img>`
//! elements on the web, a recording vector in tests. The controller never
//! formats or styles anything; it only flips one boolean per item.

/// A displayable slide as tracked by the controller.
///
/// Items are created once at initialization, one per slide the surface
/// reports, and are never added or removed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Ordinal position in the surface, fixed at initialization.
    pub position: usize,
    /// Whether this item is the one currently shown.
    pub visible: bool,
}

/// Shows and hides the items of a slideshow.
///
/// Both the DOM surface and test doubles implement this trait.
pub trait Surface {
    /// Returns the number of items present at initialization time.
    ///
    /// The controller reads this once; later changes are ignored.
    fn item_count(&self) -> usize;

    /// Marks the item at `index` visible or not visible.
    ///
    /// `index` is always in `0..item_count()`.
    fn set_visible(&mut self, index: usize, visible: bool);
}
