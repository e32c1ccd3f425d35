// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::{ClampMode, Easing};

/// Tunables for a [`crate::ZoomController`].
///
/// ```rust
/// use understory_zoom::{ClampMode, ZoomConfig};
///
/// let config = ZoomConfig::default()
///     .with_zoom_coefficient(2.0)
///     .with_tween_duration_ms(250)
///     .with_clamp_mode(ClampMode::MaxScale);
/// assert_eq!(config.zoom_coefficient, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Overscale applied on top of the fill factor to get the maximum scale.
    ///
    /// Values below `1.0` can invert the scale range and are rejected at
    /// layout time.
    pub zoom_coefficient: f64,
    /// Length of the double-tap scale tween in milliseconds.
    ///
    /// `0` jumps to the target scale on the tap itself.
    pub tween_duration_ms: u64,
    /// Progress curve of the double-tap tween.
    pub easing: Easing,
    /// Which scale pan limits are derived from.
    pub clamp_mode: ClampMode,
}

impl ZoomConfig {
    /// Default zoom coefficient.
    pub const DEFAULT_ZOOM_COEFFICIENT: f64 = 1.2;
    /// Default tween duration in milliseconds.
    pub const DEFAULT_TWEEN_DURATION_MS: u64 = 300;

    /// Returns a copy with the given zoom coefficient.
    #[must_use]
    pub fn with_zoom_coefficient(mut self, coefficient: f64) -> Self {
        self.zoom_coefficient = coefficient;
        self
    }

    /// Returns a copy with the given tween duration.
    #[must_use]
    pub fn with_tween_duration_ms(mut self, duration_ms: u64) -> Self {
        self.tween_duration_ms = duration_ms;
        self
    }

    /// Returns a copy with the given easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns a copy with the given clamp mode.
    #[must_use]
    pub fn with_clamp_mode(mut self, mode: ClampMode) -> Self {
        self.clamp_mode = mode;
        self
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_coefficient: Self::DEFAULT_ZOOM_COEFFICIENT,
            tween_duration_ms: Self::DEFAULT_TWEEN_DURATION_MS,
            easing: Easing::default(),
            clamp_mode: ClampMode::default(),
        }
    }
}
