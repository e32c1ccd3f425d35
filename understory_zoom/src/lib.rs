// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: a headless zoom controller for image views.
//!
//! This crate models the transform behind an image view that supports
//! double-tap-to-zoom, pinch-to-zoom, and drag-to-pan with the pan clamped to
//! the image. It focuses on:
//! - Scale bounds: the fitted (minimum) and zoomed-in (maximum) scale for a
//!   view/content size pair.
//! - Pan clamping so the zoomed content keeps covering the view.
//! - Gesture handling: pinch begin/update/end, double-tap toggle, drag.
//! - A frame-driven scale tween for the double-tap toggle.
//! - Composing the per-frame drawing transform.
//!
//! It does **not** decode images, recognize gestures from raw pointer
//! events, or paint. Callers are expected to:
//! - Feed layout sizes into [`ZoomController::on_layout`].
//! - Translate platform gesture detector callbacks into [`ZoomGesture`]s (or
//!   call the `on_*` methods directly).
//! - Call [`ZoomController::on_animation_frame`] while
//!   [`ZoomController::is_animating`] holds.
//! - Draw with [`ZoomController::render_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::{ZoomConfig, ZoomController};
//!
//! let mut zoom = ZoomController::new(ZoomConfig::default());
//!
//! // A 600x300 image in a 300x300 view: width is the binding axis.
//! zoom.on_layout(Size::new(300.0, 300.0), Size::new(600.0, 300.0))
//!     .unwrap();
//! let bounds = zoom.bounds().unwrap();
//! assert_eq!(bounds.min(), 0.5);
//!
//! // Double-tap starts a tween towards the maximum scale.
//! let mut now_ms = 0;
//! zoom.on_double_tap(Point::new(150.0, 150.0), now_ms);
//! while zoom.is_animating() {
//!     now_ms += 16;
//!     zoom.on_animation_frame(now_ms);
//! }
//! assert_eq!(zoom.scale(), bounds.max());
//!
//! // Zoomed in, drags pan the image.
//! zoom.on_drag(Vec2::new(-40.0, 0.0));
//! assert_eq!(zoom.pan(), Vec2::new(40.0, 0.0));
//!
//! let frame = zoom.render_transform().unwrap().unwrap();
//! let _content_to_view = frame.to_affine();
//! ```
//!
//! ## Design notes
//!
//! - The maximum scale takes the fit factor of the *non-binding* axis, so a
//!   fully zoomed-in image fills the view on both axes; the zoom coefficient
//!   adds overscale on top.
//! - The rendered pan is weighted by zoom progress: it has no effect at the
//!   minimum scale and full effect at the maximum scale.
//! - The anchor offset for pinches and double-taps is derived from the ratio
//!   of maximum to minimum scale, not from the scale at the start of the
//!   gesture. A pinch that starts while already zoomed in therefore shifts
//!   the pan by an amount that only depends on the scale range.
//! - With [`ClampMode::LiveScale`] (the default) the pan always satisfies the
//!   limits of the scale on screen; [`ClampMode::MaxScale`] clamps against
//!   the maximum scale instead.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`ZoomConfig`], [`ClampMode`]
//!   and [`Easing`].
//! - `tracing`: emit `tracing` events for layout changes, gestures, and
//!   rejected input.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod clamp;
mod config;
mod controller;
mod error;
mod geometry;
mod gesture;
mod modes;
mod render;
mod trace;
mod tween;

pub use bounds::ScaleBounds;
pub use clamp::{clamp_pan, pan_limits};
pub use config::ZoomConfig;
pub use controller::{ZoomController, ZoomDebugInfo};
pub use error::ZoomError;
pub use geometry::ViewportGeometry;
pub use gesture::ZoomGesture;
pub use modes::{ClampMode, Easing};
pub use render::{RenderTransform, ZoomTransform};
pub use tween::ScaleTween;
