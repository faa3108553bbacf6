// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable repeating timers.
//!
//! [`TimerSource`] is the capability the slideshow uses for auto-advance. It
//! deliberately says nothing about *what* runs when a timer fires: the web
//! backend binds its interval callback to the controller when it builds the
//! source, and [`VirtualTimers`] simply counts due ticks for the caller to
//! deliver.
//!
//! Handles are move-only, so a handle can be cancelled at most once.

use alloc::vec::Vec;

use crate::time::{Duration, HostTime};

/// Starts and cancels repeating timers.
pub trait TimerSource {
    /// Identifies one live timer.
    type Handle;

    /// Returns the current time on this source's clock.
    fn now(&self) -> HostTime;

    /// Starts a timer that fires every `period` until cancelled.
    fn start_repeating(&mut self, period: Duration) -> Self::Handle;

    /// Cancels a timer previously returned by
    /// [`start_repeating`](Self::start_repeating).
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle for a timer started on [`VirtualTimers`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct VirtualHandle(u64);

#[derive(Clone, Copy, Debug)]
struct VirtualTimer {
    id: u64,
    period: Duration,
    /// `None` once the next fire time is past the end of the clock.
    next_due: Option<HostTime>,
}

/// A deterministic [`TimerSource`] driven by an explicit virtual clock.
///
/// Nothing fires on its own. [`advance`](Self::advance) moves the clock and
/// reports how many ticks fell due across all live timers, which the caller
/// then delivers (see `Slideshow::run_for`).
#[derive(Debug)]
pub struct VirtualTimers {
    now: HostTime,
    next_id: u64,
    live: Vec<VirtualTimer>,
    started: u64,
}

impl VirtualTimers {
    /// Creates a virtual clock reading `start`, with no live timers.
    #[must_use]
    pub fn new(start: HostTime) -> Self {
        Self {
            now: start,
            next_id: 0,
            live: Vec::new(),
            started: 0,
        }
    }

    /// Number of timers currently live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total number of timers ever started on this source.
    #[must_use]
    pub fn started_count(&self) -> u64 {
        self.started
    }

    /// Earliest pending fire time across all live timers.
    #[must_use]
    pub fn next_due(&self) -> Option<HostTime> {
        self.live.iter().filter_map(|t| t.next_due).min()
    }

    /// Moves the clock forward by `by` and returns the number of ticks that
    /// fell due, counting every live timer.
    ///
    /// The clock stops at `u64::MAX` milliseconds. A timer whose next fire
    /// time would fall beyond that stays live but never fires again.
    pub fn advance(&mut self, by: Duration) -> u32 {
        self.now = self.now.saturating_add(by);
        let now = self.now;
        let mut fired = 0_u32;
        for timer in &mut self.live {
            while let Some(due) = timer.next_due
                && due <= now
            {
                fired = fired.saturating_add(1);
                timer.next_due = due.checked_add(timer.period);
            }
        }
        fired
    }
}

impl Default for VirtualTimers {
    fn default() -> Self {
        Self::new(HostTime::ZERO)
    }
}

impl TimerSource for VirtualTimers {
    type Handle = VirtualHandle;

    fn now(&self) -> HostTime {
        self.now
    }

    fn start_repeating(&mut self, period: Duration) -> VirtualHandle {
        // A zero period would never let `advance` terminate.
        let period = period.max(Duration(1));
        let id = self.next_id;
        self.next_id += 1;
        self.started += 1;
        self.live.push(VirtualTimer {
            id,
            period,
            next_due: self.now.checked_add(period),
        });
        VirtualHandle(id)
    }

    fn cancel(&mut self, handle: VirtualHandle) {
        self.live.retain(|t| t.id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut timers = VirtualTimers::default();
        let _h = timers.start_repeating(Duration(100));

        assert_eq!(timers.advance(Duration(99)), 0);
        assert_eq!(timers.advance(Duration(1)), 1);
        assert_eq!(timers.advance(Duration(250)), 2);
        assert_eq!(timers.next_due(), Some(HostTime(400)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = VirtualTimers::default();
        let h = timers.start_repeating(Duration(10));
        timers.cancel(h);

        assert_eq!(timers.live_count(), 0);
        assert_eq!(timers.advance(Duration(1_000)), 0);
        assert_eq!(timers.next_due(), None);
    }

    #[test]
    fn overlapping_timers_each_count() {
        let mut timers = VirtualTimers::default();
        let _a = timers.start_repeating(Duration(100));
        let _b = timers.start_repeating(Duration(100));

        // Two live timers double the tick rate; this is what the slideshow
        // must never allow.
        assert_eq!(timers.advance(Duration(100)), 2);
        assert_eq!(timers.started_count(), 2);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut timers = VirtualTimers::default();
        let _h = timers.start_repeating(Duration::ZERO);
        assert_eq!(timers.advance(Duration(5)), 5);
    }

    #[test]
    fn timer_due_past_end_of_clock_never_fires() {
        let mut timers = VirtualTimers::new(HostTime(u64::MAX - 10));
        let _h = timers.start_repeating(Duration(8_000));

        assert_eq!(timers.advance(Duration(10)), 0);
        assert_eq!(timers.advance(Duration(1_000)), 0);
        assert_eq!(timers.now(), HostTime(u64::MAX));
        assert_eq!(timers.next_due(), None);
        assert_eq!(timers.live_count(), 1);
    }

    #[test]
    fn last_tick_before_end_of_clock_fires_once() {
        let mut timers = VirtualTimers::new(HostTime(u64::MAX - 100));
        let _h = timers.start_repeating(Duration(60));

        assert_eq!(timers.advance(Duration(100)), 1);
        assert_eq!(timers.next_due(), None);
        assert_eq!(timers.advance(Duration(100)), 0);
    }
}
