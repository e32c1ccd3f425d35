// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::bounds::ScaleBounds;
use crate::error::ZoomError;
use crate::geometry::ViewportGeometry;

/// Scale and pan as stored by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Current zoom factor.
    pub scale: f64,
    /// Pan offset of the content center from the view center, in pixels.
    pub pan: Vec2,
}

/// The three drawing steps a renderer applies for one frame.
///
/// In order: translate by [`translation`](Self::translation), scale by
/// [`scale`](Self::scale) about [`center`](Self::center), then draw the
/// content with its top-left corner at [`content_origin`](Self::content_origin).
/// [`to_affine`](Self::to_affine) folds these into one content-to-view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTransform {
    /// Pan weighted by zoom progress: zero at the minimum scale, the full pan
    /// at the maximum scale.
    pub translation: Vec2,
    /// Canvas scale.
    pub scale: f64,
    /// View center; the scale pivot.
    pub center: Point,
    /// Where the unscaled content's top-left corner is drawn so that it is
    /// centered in the view.
    pub content_origin: Point,
}

impl RenderTransform {
    /// Composes the drawing steps for `transform` under `geometry` and `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if `bounds` has no span, as
    /// zoom progress is undefined then.
    pub fn compose(
        geometry: &ViewportGeometry,
        bounds: &ScaleBounds,
        transform: ZoomTransform,
    ) -> Result<Self, ZoomError> {
        let progress = bounds.progress(transform.scale)?;
        let center = geometry.view_center();
        let content = geometry.content();
        Ok(Self {
            translation: transform.pan * progress,
            scale: transform.scale,
            center,
            content_origin: Point::new(
                center.x - content.width / 2.0,
                center.y - content.height / 2.0,
            ),
        })
    }

    /// Content-space to view-space transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let pivot = self.center.to_vec2();
        Affine::translate(self.translation)
            * Affine::translate(pivot)
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
            * Affine::translate(self.content_origin.to_vec2())
    }
}
