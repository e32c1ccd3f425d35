// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan clamping against the content extent at a given scale.

use kurbo::Vec2;

use crate::geometry::ViewportGeometry;

/// Largest allowed pan magnitude on each axis at `scale`.
///
/// Per axis this is `content * scale / 2 - view / 2`, floored at zero: when
/// the scaled content is smaller than the view there is no room to pan.
#[must_use]
pub fn pan_limits(geometry: &ViewportGeometry, scale: f64) -> Vec2 {
    let view = geometry.view();
    let content = geometry.content();
    Vec2::new(
        axis_limit(content.width, view.width, scale),
        axis_limit(content.height, view.height, scale),
    )
}

/// Clamps `pan` so the scaled content keeps covering the view.
///
/// Each axis is limited to `[-limit, limit]` from [`pan_limits`]; an axis
/// without room to pan is pinned to zero. Clamping is idempotent.
#[must_use]
pub fn clamp_pan(geometry: &ViewportGeometry, scale: f64, pan: Vec2) -> Vec2 {
    let limits = pan_limits(geometry, scale);
    Vec2::new(
        pan.x.clamp(-limits.x, limits.x),
        pan.y.clamp(-limits.y, limits.y),
    )
}

fn axis_limit(content: f64, view: f64, scale: f64) -> f64 {
    let limit = content * scale / 2.0 - view / 2.0;
    if limit > 0.0 { limit } else { 0.0 }
}
