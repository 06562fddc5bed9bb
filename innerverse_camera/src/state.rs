// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Pan and zoom of the map.
///
/// `translate` is in view pixels and `scale` is a uniform zoom factor, both
/// applied about the center of the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Offset of the map center from the view center, in pixels.
    pub translate: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl CameraState {
    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(translate: Vec2, scale: f64) -> Self {
        Self { translate, scale }
    }

    /// Returns this state with `scale` clamped into `[min, max]`.
    ///
    /// A non-finite scale becomes `min`.
    #[must_use]
    pub fn clamped(self, min: f64, max: f64) -> Self {
        let scale = if self.scale.is_finite() {
            self.scale.clamp(min, max)
        } else {
            min
        };
        Self { scale, ..self }
    }

    /// Linear interpolation towards `to`; `t` is not clamped.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            translate: self.translate.lerp(to.translate, t),
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Map-to-view transform for a view whose center is `view_center`.
    ///
    /// The map is scaled about its center, then moved by `translate`.
    #[must_use]
    pub fn transform(&self, view_center: Point) -> Affine {
        let c = view_center.to_vec2();
        Affine::translate(c + self.translate)
            * Affine::scale(self.scale)
            * Affine::translate(-c)
    }
}

/// Clamps a label offset to 40% of the view size on each axis.
///
/// Labels follow the map translation but must stay readable; the host applies
/// this to `translate` before positioning them. A non-finite view extent
/// counts as zero.
#[must_use]
pub fn clamp_label_offset(translate: Vec2, viewport: Size) -> Vec2 {
    let limit = |extent: f64| {
        if extent.is_finite() {
            extent.abs() * 0.4
        } else {
            0.0
        }
    };
    let max_x = limit(viewport.width);
    let max_y = limit(viewport.height);
    Vec2::new(
        translate.x.clamp(-max_x, max_x),
        translate.y.clamp(-max_y, max_y),
    )
}
