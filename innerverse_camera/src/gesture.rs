// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gestures: one pointer pans, two pointers pinch.
//!
//! [`GestureMachine`] turns raw [`PointerInput`] into pan deltas and pinch
//! distance changes. It knows nothing about the camera; the controller
//! applies what it reports.
//!
//! ```
//! use kurbo::Point;
//! use innerverse_camera::{GestureMachine, GesturePhase, PointerId, PointerInput};
//!
//! let mut gestures = GestureMachine::default();
//! let finger = PointerId(1);
//! gestures.handle(PointerInput::Down { pointer: finger, position: Point::new(10.0, 10.0) });
//! assert_eq!(gestures.phase(), GesturePhase::Panning);
//! ```

use kurbo::{Point, Vec2};

/// Identifies one pointer (mouse, pen, or a single touch) across events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Input the camera reacts to, in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// A pointer was pressed or a touch began.
    Down {
        /// Which pointer.
        pointer: PointerId,
        /// Where it went down.
        position: Point,
    },
    /// A pointer moved.
    Move {
        /// Which pointer.
        pointer: PointerId,
        /// Its new position.
        position: Point,
    },
    /// A pointer was released.
    Up {
        /// Which pointer.
        pointer: PointerId,
    },
    /// The platform took the pointer away.
    Cancel {
        /// Which pointer.
        pointer: PointerId,
    },
    /// A wheel or trackpad scroll; positive `delta_y` zooms out.
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f64,
    },
}

/// Receives capture requests for the lifetime of a gesture.
///
/// Hosts typically register window-level move/up listeners in
/// [`attach`](Self::attach) so a drag keeps tracking outside the map, and
/// remove them in [`detach`](Self::detach). Calls always come in pairs.
pub trait PointerCapture {
    /// A gesture started.
    fn attach(&mut self);
    /// The gesture ended; no pointer is down any more.
    fn detach(&mut self);
}

impl PointerCapture for () {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// Coarse state of the gesture machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// One pointer is dragging the map.
    Panning,
    /// Two pointers are pinching.
    Pinching,
}

/// What one input meant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    /// Move the map by this many pixels.
    Pan(Vec2),
    /// The pinch distance changed by this many pixels.
    Pinch(f64),
    /// A pointer left the gesture: released or cancelled.
    Released,
    /// A wheel turned.
    Wheel(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Touch {
    pointer: PointerId,
    position: Point,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Panning {
        pointer: PointerId,
        last: Point,
    },
    Pinching {
        a: Touch,
        b: Touch,
        last_distance: f64,
    },
}

/// The pan/pinch state machine.
///
/// | phase    | input                | next     | effect                 |
/// |----------|----------------------|----------|------------------------|
/// | Idle     | Down                 | Panning  |                        |
/// | Panning  | Move (same pointer)  | Panning  | `Pan(delta)`           |
/// | Panning  | Down (other pointer) | Pinching |                        |
/// | Pinching | Move (either)        | Pinching | `Pinch(distance diff)` |
/// | Pinching | Up/Cancel (either)   | Panning  | `Released`             |
/// | Panning  | Up/Cancel (same)     | Idle     | `Released`             |
/// | any      | Wheel                | same     | `Wheel(delta_y)`       |
///
/// Everything else is ignored. When a pinch drops to one pointer, panning
/// resumes from that pointer's current position so the map does not jump.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureMachine {
    gesture: Gesture,
}

impl GestureMachine {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.gesture {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Panning { .. } => GesturePhase::Panning,
            Gesture::Pinching { .. } => GesturePhase::Pinching,
        }
    }

    /// Feeds one input and returns its effect, if any.
    pub fn handle(&mut self, input: PointerInput) -> Option<GestureEffect> {
        match (self.gesture, input) {
            (_, PointerInput::Wheel { delta_y }) => Some(GestureEffect::Wheel(delta_y)),
            (Gesture::Idle, PointerInput::Down { pointer, position }) => {
                self.gesture = Gesture::Panning {
                    pointer,
                    last: position,
                };
                None
            }
            (Gesture::Panning { pointer, last }, PointerInput::Move { pointer: p, position })
                if p == pointer =>
            {
                self.gesture = Gesture::Panning {
                    pointer,
                    last: position,
                };
                Some(GestureEffect::Pan(position - last))
            }
            (Gesture::Panning { pointer, last }, PointerInput::Down { pointer: p, position })
                if p != pointer =>
            {
                let a = Touch {
                    pointer,
                    position: last,
                };
                let b = Touch {
                    pointer: p,
                    position,
                };
                self.gesture = Gesture::Pinching {
                    a,
                    b,
                    last_distance: a.position.distance(b.position),
                };
                None
            }
            (
                Gesture::Panning { pointer, .. },
                PointerInput::Up { pointer: p } | PointerInput::Cancel { pointer: p },
            ) if p == pointer => {
                self.gesture = Gesture::Idle;
                Some(GestureEffect::Released)
            }
            (
                Gesture::Pinching {
                    mut a,
                    mut b,
                    last_distance,
                },
                PointerInput::Move { pointer, position },
            ) if pointer == a.pointer || pointer == b.pointer => {
                if pointer == a.pointer {
                    a.position = position;
                } else {
                    b.position = position;
                }
                let distance = a.position.distance(b.position);
                self.gesture = Gesture::Pinching {
                    a,
                    b,
                    last_distance: distance,
                };
                Some(GestureEffect::Pinch(distance - last_distance))
            }
            (
                Gesture::Pinching { a, b, .. },
                PointerInput::Up { pointer } | PointerInput::Cancel { pointer },
            ) if pointer == a.pointer || pointer == b.pointer => {
                let remaining = if pointer == a.pointer { b } else { a };
                self.gesture = Gesture::Panning {
                    pointer: remaining.pointer,
                    last: remaining.position,
                };
                Some(GestureEffect::Released)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureEffect, GestureMachine, GesturePhase, PointerId, PointerInput};

    const A: PointerId = PointerId(1);
    const B: PointerId = PointerId(2);

    fn down(pointer: PointerId, x: f64, y: f64) -> PointerInput {
        PointerInput::Down {
            pointer,
            position: Point::new(x, y),
        }
    }

    fn moved(pointer: PointerId, x: f64, y: f64) -> PointerInput {
        PointerInput::Move {
            pointer,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn single_pointer_pans() {
        let mut g = GestureMachine::default();
        assert_eq!(g.handle(down(A, 0.0, 0.0)), None);
        assert_eq!(g.phase(), GesturePhase::Panning);
        assert_eq!(
            g.handle(moved(A, 3.0, 4.0)),
            Some(GestureEffect::Pan(Vec2::new(3.0, 4.0)))
        );
        // Another pointer's moves are not ours.
        assert_eq!(g.handle(moved(B, 50.0, 50.0)), None);
        assert_eq!(
            g.handle(PointerInput::Up { pointer: A }),
            Some(GestureEffect::Released)
        );
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn second_pointer_starts_a_pinch() {
        let mut g = GestureMachine::default();
        g.handle(down(A, 0.0, 0.0));
        g.handle(moved(A, 10.0, 0.0));
        assert_eq!(g.handle(down(B, 30.0, 0.0)), None);
        assert_eq!(g.phase(), GesturePhase::Pinching);
        // Distance 20 -> 50.
        assert_eq!(g.handle(moved(B, 60.0, 0.0)), Some(GestureEffect::Pinch(30.0)));
        // Distance 50 -> 40.
        assert_eq!(g.handle(moved(A, 20.0, 0.0)), Some(GestureEffect::Pinch(-10.0)));
        // A third pointer is ignored.
        assert_eq!(g.handle(down(PointerId(3), 0.0, 0.0)), None);
        assert_eq!(g.phase(), GesturePhase::Pinching);
    }

    #[test]
    fn lifting_one_finger_resumes_panning_without_a_jump() {
        let mut g = GestureMachine::default();
        g.handle(down(A, 0.0, 0.0));
        g.handle(down(B, 100.0, 0.0));
        g.handle(moved(B, 120.0, 10.0));
        assert_eq!(
            g.handle(PointerInput::Cancel { pointer: A }),
            Some(GestureEffect::Released)
        );
        assert_eq!(g.phase(), GesturePhase::Panning);
        // Deltas are measured from B's last known position.
        assert_eq!(
            g.handle(moved(B, 121.0, 10.0)),
            Some(GestureEffect::Pan(Vec2::new(1.0, 0.0)))
        );
        // A is gone; its release is ignored.
        assert_eq!(g.handle(PointerInput::Up { pointer: A }), None);
    }

    #[test]
    fn wheel_passes_through_in_any_phase() {
        let mut g = GestureMachine::default();
        assert_eq!(
            g.handle(PointerInput::Wheel { delta_y: -3.0 }),
            Some(GestureEffect::Wheel(-3.0))
        );
        g.handle(down(A, 0.0, 0.0));
        assert_eq!(
            g.handle(PointerInput::Wheel { delta_y: 1.0 }),
            Some(GestureEffect::Wheel(1.0))
        );
        assert_eq!(g.phase(), GesturePhase::Panning);
    }

    #[test]
    fn stray_events_in_idle_do_nothing() {
        let mut g = GestureMachine::default();
        assert_eq!(g.handle(moved(A, 1.0, 1.0)), None);
        assert_eq!(g.handle(PointerInput::Up { pointer: A }), None);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }
}
