// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::state::CameraState;

/// Quadratic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// A camera move in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tween {
    from: CameraState,
    to: CameraState,
    duration: f64,
    elapsed: f64,
}

impl Tween {
    /// `duration` must be positive and finite; callers apply instant moves
    /// directly instead.
    pub(crate) fn new(from: CameraState, to: CameraState, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances by `dt` seconds and returns the eased frame.
    pub(crate) fn advance(&mut self, dt: f64) -> CameraState {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, ease_out(self.elapsed / self.duration))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Tween, ease_out};
    use crate::state::CameraState;

    #[test]
    fn ease_out_shape() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(0.5), 0.75);
        assert_eq!(ease_out(2.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
    }

    #[test]
    fn tween_lands_exactly() {
        let from = CameraState::new(Vec2::ZERO, 1.0);
        let to = CameraState::new(Vec2::new(100.0, 0.0), 2.0);
        let mut t = Tween::new(from, to, 1.0);
        let mid = t.advance(0.5);
        assert_eq!(mid.translate.x, 75.0);
        assert_eq!(mid.scale, 1.75);
        assert!(!t.is_finished());
        assert_eq!(t.advance(10.0), to);
        assert!(t.is_finished());
    }
}
