// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ZoomError;
use crate::geometry::ViewportGeometry;

/// The allowed scale range for one layout.
///
/// `min` fits the content inside the view along its more constrained axis.
/// `max` takes the *other* axis' fit factor and multiplies it by the zoom
/// coefficient, so a fully zoomed-in image fills the view along both axes
/// with some overscale to spare.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl ScaleBounds {
    /// Computes the scale range for `geometry` with the given zoom coefficient.
    ///
    /// An equal `min` and `max` is accepted here; it pins the scale and only
    /// fails later when zoom progress is needed (see [`ScaleBounds::progress`]).
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if the coefficient yields a
    /// `max` below `min`, or if either end is not positive and finite. Extreme
    /// size ratios can underflow `min` to zero or overflow `max`.
    pub fn compute(geometry: &ViewportGeometry, zoom_coefficient: f64) -> Result<Self, ZoomError> {
        let view = geometry.view();
        let content = geometry.content();
        let fit_x = view.width / content.width;
        let fit_y = view.height / content.height;
        let (min, max) = if geometry.width_is_binding() {
            (fit_x, fit_y * zoom_coefficient)
        } else {
            (fit_y, fit_x * zoom_coefficient)
        };
        if !min.is_finite() || min <= 0.0 || !max.is_finite() || max <= 0.0 || max < min {
            return Err(ZoomError::DegenerateZoomRange {
                min_scale: min,
                max_scale: max,
            });
        }
        Ok(Self { min, max })
    }

    /// Scale at which the content fits the view.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Fully zoomed-in scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Zoom progress of `scale`: `0.0` at `min`, `1.0` at `max`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if `min == max`.
    pub fn progress(&self, scale: f64) -> Result<f64, ZoomError> {
        let span = self.max - self.min;
        if span <= 0.0 {
            return Err(ZoomError::DegenerateZoomRange {
                min_scale: self.min,
                max_scale: self.max,
            });
        }
        Ok((scale - self.min) / span)
    }

    /// The `max / min` ratio used by the zoom anchor.
    pub(crate) fn ratio(&self) -> f64 {
        self.max / self.min
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::ScaleBounds;
    use crate::{ViewportGeometry, ZoomError};

    fn geometry(vw: f64, vh: f64, cw: f64, ch: f64) -> ViewportGeometry {
        ViewportGeometry::new(Size::new(vw, vh), Size::new(cw, ch)).unwrap()
    }

    #[test]
    fn wide_content_binds_on_width() {
        let b = ScaleBounds::compute(&geometry(300.0, 300.0, 600.0, 300.0), 1.2).unwrap();
        assert!((b.min - 0.5).abs() < 1e-12);
        assert!((b.max - 1.2).abs() < 1e-12);
    }

    #[test]
    fn tall_content_binds_on_height() {
        let b = ScaleBounds::compute(&geometry(400.0, 300.0, 200.0, 600.0), 1.2).unwrap();
        // Height: 300/600 = 0.5 (binding); width: 400/200 = 2.0.
        assert!((b.min - 0.5).abs() < 1e-12);
        assert!((b.max - 2.4).abs() < 1e-12);
    }

    #[test]
    fn bounds_are_ordered_and_positive_for_sane_coefficients() {
        let sizes = [1.0, 37.5, 300.0, 1080.0, 4000.0];
        for &vw in &sizes {
            for &vh in &sizes {
                for &cw in &sizes {
                    for &ch in &sizes {
                        let b = ScaleBounds::compute(&geometry(vw, vh, cw, ch), 1.2).unwrap();
                        assert!(b.min > 0.0);
                        assert!(b.min <= b.max, "{b:?} for {vw}x{vh} / {cw}x{ch}");
                    }
                }
            }
        }
    }

    #[test]
    fn unit_coefficient_on_matching_aspect_is_pinned() {
        let b = ScaleBounds::compute(&geometry(300.0, 300.0, 600.0, 600.0), 1.0).unwrap();
        assert_eq!(b.min, b.max);
        assert_eq!(b.clamp(10.0), b.min);
        assert_eq!(
            b.progress(b.min),
            Err(ZoomError::DegenerateZoomRange {
                min_scale: 0.5,
                max_scale: 0.5
            })
        );
    }

    #[test]
    fn inverted_or_non_finite_range_is_rejected() {
        let g = geometry(300.0, 300.0, 600.0, 300.0);
        assert!(matches!(
            ScaleBounds::compute(&g, 0.25),
            Err(ZoomError::DegenerateZoomRange { .. })
        ));
        assert!(ScaleBounds::compute(&g, f64::NAN).is_err());
        assert!(ScaleBounds::compute(&g, f64::INFINITY).is_err());
    }

    #[test]
    fn underflowing_minimum_is_rejected() {
        // 1e-200 / 1e200 underflows to 0.0, which would make `max / min` infinite.
        let g = geometry(1e-200, 1.0, 1e200, 1.0);
        assert_eq!(
            ScaleBounds::compute(&g, 1.2),
            Err(ZoomError::DegenerateZoomRange {
                min_scale: 0.0,
                max_scale: 1.2
            })
        );
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let b = ScaleBounds { min: 0.5, max: 1.5 };
        assert_eq!(b.progress(0.5), Ok(0.0));
        assert_eq!(b.progress(1.0), Ok(0.5));
        assert_eq!(b.progress(1.5), Ok(1.0));
        assert_eq!(b.ratio(), 3.0);
    }
}
