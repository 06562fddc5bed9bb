// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use innerverse_model::GroupId;
use kurbo::Vec2;
use log::{debug, info, trace};

use crate::choreography::{Choreography, NarrativeStep};
use crate::config::CameraConfig;
use crate::gesture::{GestureEffect, GestureMachine, GesturePhase, PointerCapture, PointerInput};
use crate::state::CameraState;
use crate::tween::Tween;

/// Requests the camera makes of its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraSignal {
    /// The user zoomed out past the defocus threshold while a group was
    /// focused; the host should clear the focus.
    DefocusRequested,
}

/// Owns the map camera: user gestures, imperative zoom controls and scripted
/// moves all go through here.
///
/// The controller keeps two states. The *target* is where the camera is
/// going; the *presented* state is what to draw this frame. Animated
/// operations move the target and start a tween from the presented state,
/// replacing any tween already running. Gestures act on both at once, with no
/// latency. Every path clamps the scale into the configured limits.
///
/// ```rust
/// use innerverse_camera::{CameraController, CameraConfig};
///
/// let mut camera = CameraController::new(CameraConfig::default());
/// camera.zoom_in();
/// assert!(camera.is_animating());
/// let frame = camera.tick(1.0);
/// assert_eq!(frame.scale, 0.65 * 1.25);
/// ```
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    choreography: Choreography,
    target: CameraState,
    presented: CameraState,
    tween: Option<Tween>,
    gestures: GestureMachine,
    focus: Option<GroupId>,
    step: NarrativeStep,
    applied: Option<(Option<GroupId>, NarrativeStep)>,
}

impl CameraController {
    /// Creates a controller at rest with the reference tour table and no
    /// focus shots.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self::with_choreography(config, Choreography::reference())
    }

    /// Creates a controller at rest using `choreography` for scripted moves.
    #[must_use]
    pub fn with_choreography(config: CameraConfig, choreography: Choreography) -> Self {
        let rest = config.rest();
        Self {
            config,
            choreography,
            target: rest,
            presented: rest,
            tween: None,
            gestures: GestureMachine::default(),
            focus: None,
            step: NarrativeStep::default(),
            applied: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Both states are clamped into the new limits. If the map extent
    /// changed, the current scripted shot is re-applied at the new size.
    pub fn set_config(&mut self, config: CameraConfig) {
        let resized = config.map_extent() != self.config.map_extent();
        self.config = config;
        self.target = self.clamp(self.target);
        self.presented = self.clamp(self.presented);
        if resized && self.applied.is_some() {
            self.applied = None;
            self.apply_choreography();
        }
    }

    /// The choreography table.
    #[must_use]
    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    /// Replaces the choreography table. Takes effect on the next step or
    /// focus change.
    pub fn set_choreography(&mut self, choreography: Choreography) {
        self.choreography = choreography;
    }

    /// The frame to draw.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.presented
    }

    /// Where the camera is heading.
    #[must_use]
    pub fn target(&self) -> CameraState {
        self.target
    }

    /// Returns `true` while a tween is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Current gesture phase.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Focused group, if any.
    #[must_use]
    pub fn focus(&self) -> Option<GroupId> {
        self.focus
    }

    /// Current tour step.
    #[must_use]
    pub fn narrative_step(&self) -> NarrativeStep {
        self.step
    }

    /// Zooms in by one step, animated.
    pub fn zoom_in(&mut self) {
        let scale = self.target.scale * self.config.zoom_step();
        self.animate_to(
            CameraState { scale, ..self.target },
            self.config.zoom_duration(),
        );
    }

    /// Zooms out by one step, animated.
    ///
    /// Asks for defocus if that takes a focused view below the threshold.
    pub fn zoom_out(&mut self) -> Option<CameraSignal> {
        let scale = self.target.scale / self.config.zoom_step();
        self.animate_to(
            CameraState { scale, ..self.target },
            self.config.zoom_duration(),
        );
        self.defocus_check()
    }

    /// Animates back to the rest state.
    ///
    /// Never asks for defocus, so a host may call this while handling
    /// [`CameraSignal::DefocusRequested`].
    pub fn reset(&mut self) {
        self.animate_to(self.config.rest(), self.config.reset_duration());
    }

    /// Moves the map by `delta` pixels immediately, stopping any tween.
    pub fn pan_by(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.settle();
        self.presented.translate += delta;
        self.target = self.presented;
    }

    /// Adds `delta` to the scale immediately, stopping any tween.
    pub fn zoom_at(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.settle();
        self.presented.scale = self.config.clamp_scale(self.presented.scale + delta);
        self.target = self.presented;
    }

    /// Animates to an externally chosen state.
    ///
    /// A zero, negative or non-finite `duration` jumps there at once.
    pub fn apply_scripted_target(&mut self, translate: Vec2, scale: f64, duration: f64) {
        if !translate.is_finite() {
            return;
        }
        self.animate_to(CameraState::new(translate, scale), duration);
    }

    /// Moves to a tour step and plays its shot.
    ///
    /// Setting the step it is already on does nothing.
    pub fn set_narrative_step(&mut self, step: NarrativeStep) {
        self.step = step;
        self.apply_choreography();
    }

    /// Focuses a group (or none) and plays the matching shot.
    ///
    /// Setting the focus it already has does nothing.
    pub fn set_focus(&mut self, focus: Option<GroupId>) {
        self.focus = focus;
        self.apply_choreography();
    }

    /// Feeds one pointer event through the gesture machine.
    ///
    /// `capture` is attached when a gesture starts and detached when the last
    /// pointer leaves. Presses, moves and wheel turns are ignored during tour
    /// steps that do not allow interaction; releases are always processed so
    /// a gesture can end.
    pub fn handle_pointer(
        &mut self,
        input: PointerInput,
        capture: &mut impl PointerCapture,
    ) -> Option<CameraSignal> {
        let releases = matches!(input, PointerInput::Up { .. } | PointerInput::Cancel { .. });
        if !releases && !self.step.allows_interaction() {
            return None;
        }

        let before = self.gestures.phase();
        let effect = self.gestures.handle(input);
        let after = self.gestures.phase();
        if before != after {
            debug!("event=gesture_transition module=camera from={before:?} to={after:?}");
            if before == GesturePhase::Idle {
                capture.attach();
            } else if after == GesturePhase::Idle {
                capture.detach();
            }
        }

        match effect? {
            GestureEffect::Pan(delta) => {
                self.pan_by(delta);
                None
            }
            GestureEffect::Pinch(distance) => {
                self.zoom_at(distance * self.config.pinch_sensitivity());
                None
            }
            GestureEffect::Wheel(delta_y) => {
                let scale = self.presented.scale;
                self.zoom_at(-delta_y * self.config.wheel_sensitivity() * scale);
                self.defocus_check()
            }
            GestureEffect::Released => self.defocus_check(),
        }
    }

    /// Advances the running tween by `dt` seconds and returns the frame to
    /// draw.
    pub fn tick(&mut self, dt: f64) -> CameraState {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if let Some(tween) = &mut self.tween {
            self.presented = tween
                .advance(dt)
                .clamped(self.config.min_scale(), self.config.max_scale());
            if tween.is_finished() {
                trace!(
                    "event=tween_done module=camera scale={} x={} y={}",
                    self.presented.scale, self.presented.translate.x, self.presented.translate.y
                );
                self.tween = None;
            }
        }
        self.presented
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            presented: self.presented,
            target: self.target,
            animating: self.is_animating(),
            phase: self.gesture_phase(),
            focus: self.focus,
            step: self.step,
            min_scale: self.config.min_scale(),
            max_scale: self.config.max_scale(),
        }
    }

    fn clamp(&self, state: CameraState) -> CameraState {
        state.clamped(self.config.min_scale(), self.config.max_scale())
    }

    fn animate_to(&mut self, target: CameraState, duration: f64) {
        self.target = self.clamp(target);
        if duration.is_finite() && duration > 0.0 {
            self.tween = Some(Tween::new(self.presented, self.target, duration));
        } else {
            self.tween = None;
            self.presented = self.target;
        }
    }

    /// Freezes a running tween where it currently is.
    fn settle(&mut self) {
        if self.tween.take().is_some() {
            self.target = self.presented;
        }
    }

    fn apply_choreography(&mut self) {
        let key = (self.focus, self.step);
        if self.applied == Some(key) {
            return;
        }
        self.applied = Some(key);
        let shot = self.choreography.resolve(self.focus, self.step);
        debug!(
            "event=shot module=camera focus={:?} step={} scale={} duration={}",
            self.focus, self.step.0, shot.scale, shot.duration
        );
        let to = shot.to_state(self.config.map_extent());
        self.animate_to(to, shot.duration);
    }

    fn defocus_check(&self) -> Option<CameraSignal> {
        let focus = self.focus?;
        if self.target.scale < self.config.defocus_threshold() {
            info!(
                "event=defocus_requested module=camera group={} scale={}",
                focus.0, self.target.scale
            );
            return Some(CameraSignal::DefocusRequested);
        }
        None
    }
}

/// Debug snapshot of a [`CameraController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDebugInfo {
    /// Frame being drawn.
    pub presented: CameraState,
    /// Logical target.
    pub target: CameraState,
    /// Whether a tween is running.
    pub animating: bool,
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Focused group.
    pub focus: Option<GroupId>,
    /// Tour step.
    pub step: NarrativeStep,
    /// Lower scale limit.
    pub min_scale: f64,
    /// Upper scale limit.
    pub max_scale: f64,
}
