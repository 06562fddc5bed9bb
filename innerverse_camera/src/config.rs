// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::state::CameraState;

/// Tuning for a [`CameraController`](crate::CameraController).
///
/// Setters normalize their input rather than rejecting it: reversed limits
/// are swapped, negative durations become zero, and values that cannot be
/// used (non-finite, or a zoom step that would not zoom) leave the previous
/// setting in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
    zoom_duration: f64,
    reset_duration: f64,
    defocus_threshold: f64,
    rest: CameraState,
    wheel_sensitivity: f64,
    pinch_sensitivity: f64,
    map_extent: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 4.0,
            zoom_step: 1.25,
            zoom_duration: 0.8,
            reset_duration: 1.5,
            defocus_threshold: 0.7,
            rest: CameraState::new(Vec2::ZERO, 0.65),
            wheel_sensitivity: 0.002,
            pinch_sensitivity: 0.005,
            map_extent: 1200.0,
        }
    }
}

impl CameraConfig {
    /// Smallest allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the scale limits, swapping them if given in reverse order.
    ///
    /// Non-positive or non-finite limits are ignored.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0) {
            return;
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min;
        self.max_scale = max;
    }

    /// Clamps `scale` into the configured limits.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.min_scale, self.max_scale)
        } else {
            self.min_scale
        }
    }

    /// Factor applied by one `zoom_in`/`zoom_out`.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets the zoom step. Must be finite and greater than one.
    pub fn set_zoom_step(&mut self, step: f64) {
        if step.is_finite() && step > 1.0 {
            self.zoom_step = step;
        }
    }

    /// Animation length of `zoom_in`/`zoom_out`, in seconds.
    #[must_use]
    pub fn zoom_duration(&self) -> f64 {
        self.zoom_duration
    }

    /// Sets the zoom animation length.
    pub fn set_zoom_duration(&mut self, seconds: f64) {
        self.zoom_duration = non_negative(seconds, self.zoom_duration);
    }

    /// Animation length of `reset`, in seconds.
    #[must_use]
    pub fn reset_duration(&self) -> f64 {
        self.reset_duration
    }

    /// Sets the reset animation length.
    pub fn set_reset_duration(&mut self, seconds: f64) {
        self.reset_duration = non_negative(seconds, self.reset_duration);
    }

    /// Scale below which a focused group asks to be released.
    #[must_use]
    pub fn defocus_threshold(&self) -> f64 {
        self.defocus_threshold
    }

    /// Sets the defocus threshold.
    pub fn set_defocus_threshold(&mut self, scale: f64) {
        if scale.is_finite() {
            self.defocus_threshold = scale;
        }
    }

    /// State `reset` returns to, with its scale clamped into the limits.
    #[must_use]
    pub fn rest(&self) -> CameraState {
        self.rest.clamped(self.min_scale, self.max_scale)
    }

    /// Sets the rest state.
    pub fn set_rest(&mut self, rest: CameraState) {
        if rest.translate.is_finite() && rest.scale.is_finite() {
            self.rest = rest;
        }
    }

    /// Scale change per wheel unit, relative to the current scale.
    #[must_use]
    pub fn wheel_sensitivity(&self) -> f64 {
        self.wheel_sensitivity
    }

    /// Sets the wheel sensitivity.
    pub fn set_wheel_sensitivity(&mut self, sensitivity: f64) {
        if sensitivity.is_finite() {
            self.wheel_sensitivity = sensitivity;
        }
    }

    /// Scale change per pixel of pinch distance.
    #[must_use]
    pub fn pinch_sensitivity(&self) -> f64 {
        self.pinch_sensitivity
    }

    /// Sets the pinch sensitivity.
    pub fn set_pinch_sensitivity(&mut self, sensitivity: f64) {
        if sensitivity.is_finite() {
            self.pinch_sensitivity = sensitivity;
        }
    }

    /// Side length of the map in view pixels at scale 1.
    ///
    /// Choreography offsets are fractions of this.
    #[must_use]
    pub fn map_extent(&self) -> f64 {
        self.map_extent
    }

    /// Sets the map extent. Must be positive and finite.
    pub fn set_map_extent(&mut self, pixels: f64) {
        if pixels.is_finite() && pixels > 0.0 {
            self.map_extent = pixels;
        }
    }
}

fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}
