// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe detection.
//!
//! Touch input is reduced to a single horizontal coordinate at touch start
//! and touch end. A gesture counts as a swipe when the finger travelled
//! strictly more than [`SWIPE_THRESHOLD`] logical pixels; anything shorter is
//! a tap.

use crate::slideshow::Direction;

/// Minimum horizontal travel, in logical pixels, for a swipe.
///
/// The comparison is strict: a gesture of exactly this length is a tap.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Per-gesture drag record.
///
/// Created by [`begin`](Self::begin) on touch start and consumed by
/// [`finish`](Self::finish) on touch end. Nothing carries over between
/// gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Horizontal position where the gesture started.
    pub start: f64,
    /// Whether a gesture is in progress.
    pub active: bool,
}

impl DragState {
    /// Starts a gesture at `position`, replacing any unfinished one.
    pub fn begin(&mut self, position: f64) {
        *self = Self {
            start: position,
            active: true,
        };
    }

    /// Ends the gesture at `position` and returns the signed travel.
    ///
    /// Returns `None` if no gesture was in progress. The state is cleared
    /// either way.
    pub fn finish(&mut self, position: f64) -> Option<f64> {
        let was = core::mem::take(self);
        was.active.then(|| position - was.start)
    }
}

/// Maps a horizontal travel to a slide direction.
///
/// Leftward travel (negative delta) reveals the next slide, rightward
/// travel the previous one. Returns `None` when `|delta| <= threshold` or
/// the delta is not a number.
#[must_use]
pub fn classify_swipe(delta: f64, threshold: f64) -> Option<Direction> {
    if delta.abs() > threshold {
        Some(if delta < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_without_begin_is_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.finish(120.0), None);
    }

    #[test]
    fn finish_clears_state() {
        let mut drag = DragState::default();
        drag.begin(200.0);
        assert!(drag.active);
        assert_eq!(drag.finish(125.0), Some(-75.0));
        assert_eq!(drag, DragState::default());
        assert_eq!(drag.finish(0.0), None, "second finish must be a no-op");
    }

    #[test]
    fn begin_restarts_unfinished_gesture() {
        let mut drag = DragState::default();
        drag.begin(10.0);
        drag.begin(300.0);
        assert_eq!(drag.finish(290.0), Some(-10.0));
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify_swipe(50.0, SWIPE_THRESHOLD), None);
        assert_eq!(classify_swipe(-50.0, SWIPE_THRESHOLD), None);
        assert_eq!(
            classify_swipe(50.5, SWIPE_THRESHOLD),
            Some(Direction::Backward)
        );
        assert_eq!(
            classify_swipe(-75.0, SWIPE_THRESHOLD),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn nan_delta_is_not_a_swipe() {
        assert_eq!(classify_swipe(f64::NAN, SWIPE_THRESHOLD), None);
    }
}
