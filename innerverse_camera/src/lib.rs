// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Innerverse Camera: pan, zoom and scripted moves over the map.
//!
//! [`CameraController`] is the single owner of the map's [`CameraState`]
//! (a pixel translation and a uniform scale). Four kinds of input reach it:
//! - pointer input through [`CameraController::handle_pointer`], interpreted
//!   by a [`GestureMachine`] (one pointer pans, two pinch, the wheel zooms);
//! - imperative controls: [`zoom_in`](CameraController::zoom_in),
//!   [`zoom_out`](CameraController::zoom_out) and
//!   [`reset`](CameraController::reset);
//! - the guided tour and group focus, mapped to [`Shot`]s by a
//!   [`Choreography`] table;
//! - arbitrary targets via
//!   [`apply_scripted_target`](CameraController::apply_scripted_target).
//!
//! Animated moves are advanced by the host calling
//! [`tick`](CameraController::tick) once per frame. The scale always stays
//! within the limits in [`CameraConfig`].
//!
//! ## Minimal example
//!
//! ```rust
//! use innerverse_camera::{
//!     CameraConfig, CameraController, Choreography, NarrativeStep, PointerId, PointerInput,
//! };
//! use innerverse_model::Atlas;
//! use kurbo::Point;
//!
//! let atlas = Atlas::reference();
//! let mut camera =
//!     CameraController::with_choreography(CameraConfig::default(), Choreography::from_atlas(&atlas));
//!
//! // The tour is over; the map is free to explore.
//! camera.set_narrative_step(NarrativeStep::COMPLETE);
//! camera.tick(2.0);
//!
//! let finger = PointerId(7);
//! let mut capture = ();
//! camera.handle_pointer(PointerInput::Down { pointer: finger, position: Point::new(0.0, 0.0) }, &mut capture);
//! camera.handle_pointer(PointerInput::Move { pointer: finger, position: Point::new(30.0, 0.0) }, &mut capture);
//! camera.handle_pointer(PointerInput::Up { pointer: finger }, &mut capture);
//!
//! assert_eq!(camera.state().translate.x, 30.0);
//! ```
//!
//! ## Focus and defocus
//!
//! Zooming out below [`CameraConfig::defocus_threshold`] while a group is
//! focused returns [`CameraSignal::DefocusRequested`]. The host decides
//! what to do, typically calling
//! [`set_focus(None)`](CameraController::set_focus). [`reset`](CameraController::reset)
//! never produces a signal, so it is safe to call from that handler.
//!
//! This crate is `no_std`. Diagnostics go through the [`log`] facade.

#![no_std]

mod choreography;
mod config;
mod controller;
mod gesture;
mod state;
mod tween;

pub use choreography::{Choreography, DEFAULT_SHOT_DURATION, NarrativeStep, Shot};
pub use config::CameraConfig;
pub use controller::{CameraController, CameraDebugInfo, CameraSignal};
pub use gesture::{
    GestureEffect, GestureMachine, GesturePhase, PointerCapture, PointerId, PointerInput,
};
pub use state::{CameraState, clamp_label_offset};
pub use tween::ease_out;
