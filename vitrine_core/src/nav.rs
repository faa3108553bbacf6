// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation overlay state.
//!
//! The hamburger button toggles a full-screen overlay. While it is open the
//! page body must not scroll underneath it. Following a link or pressing
//! `Escape` closes it.

/// Class carried by the hamburger and the overlay while open.
pub const ACTIVE_CLASS: &str = "active";

/// Key that dismisses the open overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Open/closed state of the navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Creates a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` while the overlay is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        core::mem::replace(&mut self.open, false)
    }

    /// Handles a key press. Returns `true` if the key closed the menu.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close()
    }

    /// The body `overflow` value for the current state, or `None` to clear
    /// the inline style.
    #[must_use]
    pub const fn body_overflow(self) -> Option<&'static str> {
        if self.open { Some("hidden") } else { None }
    }
}
