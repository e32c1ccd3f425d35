// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which scale the pan limits are computed from.
///
/// Consulted by [`crate::ZoomController`] every time it clamps the pan offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Limit pan by the content extent at the live scale.
    ///
    /// The pan offset always satisfies the bounds of the scale currently on
    /// screen. When the content fits the view (for example at the minimum
    /// scale) the pan collapses to zero, so a zoom that starts from the
    /// fitted state begins centered.
    #[default]
    LiveScale,
    /// Limit pan by the content extent at the maximum scale.
    ///
    /// The pan offset is treated as the target offset of a fully zoomed-in
    /// view, which keeps the anchor computed at the start of a zoom alive
    /// while the scale is still small. Rendering scales the offset by zoom
    /// progress, so content never drifts further than the zoomed-in limits
    /// allow.
    MaxScale,
}

/// Progress curve for the double-tap scale tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerate from rest and decelerate into the target (`3t² − 2t³`).
    #[default]
    SmoothStep,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
