// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::ScaleBounds;
use crate::clamp::{clamp_pan, pan_limits};
use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::geometry::ViewportGeometry;
use crate::gesture::ZoomGesture;
use crate::modes::ClampMode;
use crate::render::{RenderTransform, ZoomTransform};
use crate::trace::{log_debug, log_trace, log_warn};
use crate::tween::ScaleTween;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Layout {
    geometry: ViewportGeometry,
    bounds: ScaleBounds,
}

/// Zoom and pan state for one image view.
///
/// The controller owns the current scale and pan offset. It reacts to
/// gestures, keeps the scale inside the range derived from the latest layout,
/// and re-clamps the pan after every change.
///
/// Lifecycle:
/// - [`ZoomController::new`] creates a detached controller.
/// - [`ZoomController::on_layout`] attaches it to a view/content geometry and
///   resets the state to the fitted view. Call it again on every resize or
///   content change.
/// - [`ZoomController::destroy`] detaches it again.
///
/// While detached, gestures are ignored and nothing is rendered.
///
/// Every mutating call returns `true` when the visible transform changed and
/// the host should redraw.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    layout: Option<Layout>,
    scale: f64,
    pan: Vec2,
    zoomed_in: bool,
    tween: Option<ScaleTween>,
}

impl ZoomController {
    /// Creates a detached controller.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            layout: None,
            scale: 1.0,
            pan: Vec2::ZERO,
            zoomed_in: false,
            tween: None,
        }
    }

    /// Detaches the controller, dropping geometry, bounds and any running tween.
    ///
    /// The configuration is kept so the controller can be attached again.
    pub fn destroy(&mut self) {
        log_debug!("zoom controller detached");
        *self = Self::new(self.config);
    }

    /// Returns `true` once a layout has been applied.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.layout.is_some()
    }

    /// Applies a new view and content size.
    ///
    /// Recomputes the scale bounds and resets to the fitted view: minimum
    /// scale, zero pan, not zoomed in, no tween.
    ///
    /// # Errors
    ///
    /// - [`ZoomError::InvalidGeometry`] if a dimension is not positive and finite.
    /// - [`ZoomError::DegenerateZoomRange`] if the zoom coefficient inverts the
    ///   scale range for this geometry.
    ///
    /// On error the previous state is kept.
    pub fn on_layout(&mut self, view: Size, content: Size) -> Result<(), ZoomError> {
        let geometry = ViewportGeometry::new(view, content)
            .inspect_err(|err| log_warn!("rejected layout: {err}"))?;
        self.apply_geometry(geometry)
    }

    /// Like [`ZoomController::on_layout`] for already validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if the zoom coefficient
    /// inverts the scale range for this geometry.
    pub fn apply_geometry(&mut self, geometry: ViewportGeometry) -> Result<(), ZoomError> {
        let bounds = ScaleBounds::compute(&geometry, self.config.zoom_coefficient)
            .inspect_err(|err| log_warn!("rejected layout: {err}"))?;
        log_debug!(
            "layout: view {:?}, content {:?}, scale range [{}, {}]",
            geometry.view(),
            geometry.content(),
            bounds.min(),
            bounds.max()
        );
        self.layout = Some(Layout { geometry, bounds });
        self.reset();
        Ok(())
    }

    /// Replaces the configuration.
    ///
    /// When attached, the scale bounds are recomputed with the new zoom
    /// coefficient and the state is reset as for a layout change.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if the new coefficient
    /// inverts the scale range of the current geometry. The old
    /// configuration is kept in that case.
    pub fn set_config(&mut self, config: ZoomConfig) -> Result<(), ZoomError> {
        if let Some(layout) = self.layout {
            let bounds = ScaleBounds::compute(&layout.geometry, config.zoom_coefficient)
                .inspect_err(|err| log_warn!("rejected config: {err}"))?;
            self.config = config;
            self.layout = Some(Layout {
                geometry: layout.geometry,
                bounds,
            });
            self.reset();
        } else {
            self.config = config;
        }
        Ok(())
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Returns the geometry of the latest layout, if attached.
    #[must_use]
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        self.layout.map(|l| l.geometry)
    }

    /// Returns the scale range of the latest layout, if attached.
    #[must_use]
    pub fn bounds(&self) -> Option<ScaleBounds> {
        self.layout.map(|l| l.bounds)
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset of the content center from the view center.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns `true` after a double-tap zoomed in and until the next one zooms out.
    ///
    /// Pinch gestures do not change this flag.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoomed_in
    }

    /// Returns `true` while a double-tap tween is running.
    ///
    /// Hosts should keep scheduling [`ZoomController::on_animation_frame`]
    /// while this holds.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Scale and pan as stored.
    #[must_use]
    pub fn current_transform(&self) -> ZoomTransform {
        ZoomTransform {
            scale: self.scale,
            pan: self.pan,
        }
    }

    /// Drawing steps for the current frame, or `None` while detached.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateZoomRange`] if the minimum and maximum
    /// scale are equal.
    pub fn render_transform(&self) -> Result<Option<RenderTransform>, ZoomError> {
        let Some(layout) = self.layout else {
            return Ok(None);
        };
        RenderTransform::compose(&layout.geometry, &layout.bounds, self.current_transform())
            .map(Some)
    }

    /// Dispatches a recognized gesture; `now_ms` is only used by double-taps.
    pub fn handle(&mut self, gesture: ZoomGesture, now_ms: u64) -> bool {
        match gesture {
            ZoomGesture::PinchBegin { focus } => self.on_pinch_begin(focus),
            ZoomGesture::PinchUpdate { factor } => self.on_pinch_update(factor),
            ZoomGesture::PinchEnd => {
                self.on_pinch_end();
                false
            }
            ZoomGesture::DoubleTap { at } => self.on_double_tap(at, now_ms),
            ZoomGesture::Drag { distance } => self.on_drag(distance),
        }
    }

    /// Starts a pinch around `focus`.
    ///
    /// Moves the pan so the zoom appears anchored at the focal point and
    /// stops any running double-tap tween.
    ///
    /// The anchor offset is `(focus - center) * (1 - max / min)`: it depends
    /// only on the scale range, not on the scale at the start of the pinch,
    /// so a pinch that starts already zoomed in can jump.
    pub fn on_pinch_begin(&mut self, focus: Point) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        log_trace!("pinch begin at {focus:?}");
        self.tween = None;
        let pan = anchor_pan(&layout, focus);
        self.apply(&layout, self.scale, pan)
    }

    /// Applies an incremental pinch scale factor.
    ///
    /// Factors that are not positive and finite are ignored.
    pub fn on_pinch_update(&mut self, factor: f64) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        if !factor.is_finite() || factor <= 0.0 {
            log_trace!("ignoring pinch factor {factor}");
            return false;
        }
        let scale = layout.bounds.clamp(self.scale * factor);
        self.apply(&layout, scale, self.pan)
    }

    /// Ends a pinch. The scale stays where the pinch left it.
    pub fn on_pinch_end(&mut self) {
        log_trace!("pinch end at scale {}", self.scale);
    }

    /// Toggles between the fitted and the zoomed-in scale.
    ///
    /// Zooming in first anchors the pan at `at`, then tweens the scale to the
    /// maximum; zooming out tweens back to the minimum and lets the pan
    /// collapse through clamping. Either way the tween starts from the live
    /// scale at `now_ms` and replaces any tween in flight.
    pub fn on_double_tap(&mut self, at: Point, now_ms: u64) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        self.zoomed_in = !self.zoomed_in;
        log_trace!("double tap at {at:?}, zoomed in: {}", self.zoomed_in);

        let (target, pan_changed) = if self.zoomed_in {
            let pan = anchor_pan(&layout, at);
            (layout.bounds.max(), self.apply(&layout, self.scale, pan))
        } else {
            (layout.bounds.min(), false)
        };
        self.tween = Some(ScaleTween::new(
            self.scale,
            target,
            now_ms,
            self.config.tween_duration_ms,
            self.config.easing,
        ));
        let scale_changed = self.on_animation_frame(now_ms);
        pan_changed || scale_changed
    }

    /// Pans by a scroll `distance` while zoomed in.
    ///
    /// `distance` is the previous pointer position minus the current one, so
    /// the pan moves by `-distance`. Ignored unless
    /// [`ZoomController::is_zoomed_in`].
    pub fn on_drag(&mut self, distance: Vec2) -> bool {
        if !self.zoomed_in || !distance.is_finite() {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        self.apply(&layout, self.scale, self.pan - distance)
    }

    /// Advances the double-tap tween to `now_ms`.
    ///
    /// Returns `false` when no tween is running or the scale did not move.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let value = tween.sample(now_ms);
        if tween.is_finished(now_ms) {
            self.tween = None;
        }
        self.write_scale(value)
    }

    /// Writes an externally interpolated scale.
    ///
    /// For hosts that drive the zoom animation with their own animator
    /// instead of [`ZoomController::on_animation_frame`]. The value is
    /// clamped to the scale range and the pan re-clamped, like any other
    /// scale change.
    ///
    /// A running double-tap tween is cancelled so the two drivers never
    /// fight over the scale; the external animator becomes the last writer.
    pub fn set_animated_scale(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.tween = None;
        self.write_scale(value)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            geometry: self.geometry(),
            bounds: self.bounds(),
            pan_limits: self
                .layout
                .map(|l| pan_limits(&l.geometry, self.pan_reference_scale(&l, self.scale))),
            scale: self.scale,
            pan: self.pan,
            zoomed_in: self.zoomed_in,
            tween: self.tween,
            config: self.config,
        }
    }

    fn reset(&mut self) {
        if let Some(layout) = self.layout {
            self.scale = layout.bounds.min();
        }
        self.pan = Vec2::ZERO;
        self.zoomed_in = false;
        self.tween = None;
    }

    fn write_scale(&mut self, value: f64) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let scale = layout.bounds.clamp(value);
        self.apply(&layout, scale, self.pan)
    }

    /// Stores `scale` and the clamped `pan`; returns whether either changed.
    fn apply(&mut self, layout: &Layout, scale: f64, pan: Vec2) -> bool {
        let pan = clamp_pan(&layout.geometry, self.pan_reference_scale(layout, scale), pan);
        let changed = scale != self.scale || pan != self.pan;
        self.scale = scale;
        self.pan = pan;
        changed
    }

    fn pan_reference_scale(&self, layout: &Layout, scale: f64) -> f64 {
        match self.config.clamp_mode {
            ClampMode::LiveScale => scale,
            ClampMode::MaxScale => layout.bounds.max(),
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

fn anchor_pan(layout: &Layout, focus: Point) -> Vec2 {
    layout.geometry.offset_from_center(focus) * (1.0 - layout.bounds.ratio())
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDebugInfo {
    /// Geometry of the latest layout, if attached.
    pub geometry: Option<ViewportGeometry>,
    /// Scale range, if attached.
    pub bounds: Option<ScaleBounds>,
    /// Pan limits currently in force, if attached.
    pub pan_limits: Option<Vec2>,
    /// Current zoom factor.
    pub scale: f64,
    /// Current pan offset.
    pub pan: Vec2,
    /// Double-tap toggle state.
    pub zoomed_in: bool,
    /// Running double-tap tween.
    pub tween: Option<ScaleTween>,
    /// Active configuration.
    pub config: ZoomConfig,
}
