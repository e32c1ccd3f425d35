// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A recognized gesture, as produced by the host's gesture detectors.
///
/// Pinch and tap/drag detectors usually both see every pointer event, so the
/// same physical gesture can produce interleaved variants from each. The
/// controller accepts them in any order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomGesture {
    /// Two-finger pinch started with its focal point at `focus` (view coordinates).
    PinchBegin {
        /// Midpoint between the pointers.
        focus: Point,
    },
    /// Pinch span changed by `factor` since the previous update.
    PinchUpdate {
        /// Multiplicative change in scale.
        factor: f64,
    },
    /// Pinch finished.
    PinchEnd,
    /// Double-tap recognized at `at` (view coordinates).
    DoubleTap {
        /// Tap position.
        at: Point,
    },
    /// Scroll gesture moved.
    ///
    /// `distance` is the previous pointer position minus the current one,
    /// the convention of platform scroll detectors.
    Drag {
        /// Scroll distance since the previous event.
        distance: Vec2,
    },
}
