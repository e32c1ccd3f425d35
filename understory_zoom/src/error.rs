// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when geometry or zoom configuration cannot produce a
/// usable transform.
///
/// Operations that return this error leave the controller state untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomError {
    /// A view or content dimension is zero, negative, or not finite.
    InvalidGeometry {
        /// The rejected view size.
        view: Size,
        /// The rejected content size.
        content: Size,
    },
    /// The scale range is empty or inverted, so zoom progress is undefined.
    ///
    /// This typically means the zoom coefficient is `1.0` (or less) for a
    /// content aspect ratio that matches the view.
    DegenerateZoomRange {
        /// Scale at which content fits the view.
        min_scale: f64,
        /// Fully zoomed-in scale.
        max_scale: f64,
    },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { view, content } => write!(
                f,
                "invalid geometry: view {}x{}, content {}x{} (dimensions must be positive and finite)",
                view.width, view.height, content.width, content.height
            ),
            Self::DegenerateZoomRange {
                min_scale,
                max_scale,
            } => write!(
                f,
                "degenerate zoom range: min scale {min_scale} is not below max scale {max_scale}"
            ),
        }
    }
}

impl core::error::Error for ZoomError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::Size;

    use super::ZoomError;

    #[test]
    fn display_names_the_offending_values() {
        let err = ZoomError::InvalidGeometry {
            view: Size::new(0.0, 300.0),
            content: Size::new(600.0, 300.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("view 0x300"), "{msg}");
        assert!(msg.contains("content 600x300"), "{msg}");

        let err = ZoomError::DegenerateZoomRange {
            min_scale: 1.0,
            max_scale: 1.0,
        };
        assert!(err.to_string().starts_with("degenerate zoom range"));
    }
}
