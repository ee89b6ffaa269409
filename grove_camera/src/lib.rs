// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Camera: the pan/zoom camera over a garden's world plane.
//!
//! This crate provides a small, headless camera model:
//! - [`CameraState`]: the `{scale, x, y}` transform renderers apply.
//! - [`Viewport`]: world ↔ screen conversion, anchored zoom, panning and
//!   view fitting.
//! - [`CameraTween`] and [`Easing`]: time-based transitions driven by host
//!   frame timestamps.
//! - [`CameraController`]: the state machine tying these together
//!   (idle, panning, animating) with cursor-anchored wheel zoom.
//!
//! It does **not** own a scene graph, an event loop, or a clock. Hosts:
//! - report the measured screen size with
//!   [`CameraController::set_viewport_size`],
//! - forward wheel and pointer events,
//! - call [`CameraController::tick`] once per animation frame while
//!   [`CameraController::mode`] is [`CameraMode::Animating`],
//! - redraw whenever [`CameraController::revision`] changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use grove_camera::{CameraConfig, CameraController, CameraMode};
//!
//! let mut camera = CameraController::new(CameraConfig::default(), Size::new(1280.0, 720.0));
//!
//! // Fit the current world on first layout.
//! let world = Rect::new(0.0, 0.0, 1200.0, 900.0);
//! assert!(camera.fit(world));
//!
//! // Zoom in one wheel tick around the cursor.
//! camera.on_wheel(Point::new(400.0, 300.0), -120.0);
//!
//! // The world grew: glide to the new fit.
//! let grown = Rect::new(0.0, 0.0, 2560.0, 900.0);
//! camera.animate_fit(grown, 0.0);
//! assert_eq!(camera.mode(), CameraMode::Animating);
//! camera.tick(300.0);
//! camera.tick(600.0);
//! assert_eq!(camera.mode(), CameraMode::Idle);
//! assert_eq!(Some(camera.state()), camera.fit_target(grown));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and axis-aligned; there is no rotation.
//! - Panning is expressed in screen pixels, zoom as a scalar.
//! - Wheel zoom is synchronous and never animates.
//! - A fit never zooms in past native size and is deferred while the screen
//!   has zero area, so no infinite or NaN scale is ever published.
//! - Programmatic targets are clamped to the configured scale limits, so the
//!   wheel always moves the scale in the direction it was turned.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod pan;
mod state;
mod tween;
mod viewport;

pub use config::CameraConfig;
pub use controller::{CameraController, CameraMode, PointerTarget};
pub use state::CameraState;
pub use tween::{CameraTween, Easing};
pub use viewport::Viewport;
