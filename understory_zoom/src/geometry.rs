// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::error::ZoomError;

/// View and content sizes for one layout pass.
///
/// Both sizes are in device pixels. A `ViewportGeometry` can only be built
/// from strictly positive, finite dimensions, so everything derived from it
/// (scale bounds, pan limits) is free of division by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    view: Size,
    content: Size,
}

impl ViewportGeometry {
    /// Creates geometry for a view of size `view` showing content of size `content`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidGeometry`] if any dimension is zero,
    /// negative, or not finite.
    pub fn new(view: Size, content: Size) -> Result<Self, ZoomError> {
        if !is_positive(view) || !is_positive(content) {
            return Err(ZoomError::InvalidGeometry { view, content });
        }
        Ok(Self { view, content })
    }

    /// Returns the view size.
    #[must_use]
    pub fn view(&self) -> Size {
        self.view
    }

    /// Returns the content (image) size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Returns the center of the view in view coordinates.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(self.view.width / 2.0, self.view.height / 2.0)
    }

    /// Offset of `pt` from the view center.
    pub(crate) fn offset_from_center(&self, pt: Point) -> Vec2 {
        pt - self.view_center()
    }

    /// Returns `true` if width is the more constrained axis when fitting the
    /// content into the view.
    #[must_use]
    pub fn width_is_binding(&self) -> bool {
        self.content.width / self.view.width > self.content.height / self.view.height
    }
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
