// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed scale interpolation driven by host frame callbacks.
//!
//! A [`ScaleTween`] is plain data: it records where the scale starts, where it
//! ends, and when. The host samples it with a monotonic millisecond clock on
//! each animation frame. Starting a new tween replaces the old one; there is
//! no queue and no cancellation handle.
//!
//! ```rust
//! use understory_zoom::{Easing, ScaleTween};
//!
//! let tween = ScaleTween::new(0.5, 1.5, 1_000, 200, Easing::Linear);
//! assert_eq!(tween.sample(1_000), 0.5);
//! assert_eq!(tween.sample(1_100), 1.0);
//! assert!(tween.is_finished(1_200));
//! assert_eq!(tween.sample(5_000), 1.5);
//! ```

use crate::modes::Easing;

/// Interpolates a scale value from `from` to `to` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl ScaleTween {
    /// Creates a tween that starts at `start_ms` and lasts `duration_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress at `now_ms`, in `[0, 1]`.
    ///
    /// Timestamps earlier than the start count as the start; a zero duration
    /// is complete immediately.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            1.0
        } else {
            elapsed as f64 / self.duration_ms as f64
        }
    }

    /// Interpolated value at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            // Land exactly on the target.
            return self.to;
        }
        let eased = self.easing.apply(t);
        self.from + (self.to - self.from) * eased
    }

    /// Returns `true` once `now_ms` is at or past the end of the tween.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
