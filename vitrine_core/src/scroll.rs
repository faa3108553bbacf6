// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven effects: progress bar, parallax and header hide/show.
//!
//! Everything here is plain arithmetic over scroll offsets in CSS pixels. The
//! web backend reads `scrollY` and friends, calls into this module, and
//! writes the result back as inline styles or classes.
//!
//! Parallax and header updates run at most once per animation frame;
//! [`FrameThrottle`] is the latch that coalesces bursts of scroll events.

/// Scroll offset past which a downward scroll hides the header.
pub const HEADER_HIDE_OFFSET: f64 = 100.0;

/// Parallax speed used when an element has no usable `data-speed`.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// Returns how far down the page the reader is, as a percentage.
///
/// The result is clamped to `[0, 100]`. A page that cannot scroll (document
/// no taller than the viewport) reports 0.
#[must_use]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Parses a `data-speed` attribute, falling back to
/// [`DEFAULT_PARALLAX_SPEED`].
#[must_use]
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Vertical translation, in pixels, for a parallax element.
///
/// Elements drift upward at `speed` times the scroll rate.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// Whether the site header should be showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderVisibility {
    /// Header is on screen.
    Shown,
    /// Header is tucked away (class `hidden`).
    Hidden,
}

impl HeaderVisibility {
    /// Returns `true` for [`Hidden`](Self::Hidden).
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Hides the header while scrolling down and shows it on any scroll up.
///
/// Near the top of the page (at or above [`HEADER_HIDE_OFFSET`]) the header
/// always shows.
#[derive(Clone, Copy, Debug)]
pub struct HeaderTracker {
    last_scroll_y: f64,
    hide_after: f64,
}

impl HeaderTracker {
    /// Creates a tracker that assumes the page starts at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_scroll_y: 0.0,
            hide_after: HEADER_HIDE_OFFSET,
        }
    }

    /// Feeds the current scroll offset and returns the header state.
    pub fn update(&mut self, scroll_y: f64) -> HeaderVisibility {
        let hidden = scroll_y > self.last_scroll_y && scroll_y > self.hide_after;
        self.last_scroll_y = scroll_y;
        if hidden {
            HeaderVisibility::Hidden
        } else {
            HeaderVisibility::Shown
        }
    }
}

impl Default for HeaderTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` if the caller should schedule a frame now.
    ///
    /// Subsequent calls return `false` until [`complete`](Self::complete).
    pub fn request(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Marks the scheduled frame as done.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    /// Returns `true` while a frame is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
