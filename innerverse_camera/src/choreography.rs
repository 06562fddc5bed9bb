// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted camera targets for the guided tour and group focus.

use hashbrown::HashMap;
use innerverse_model::{Atlas, Group, GroupId, Quadrant, WORLD_EXTENT};
use kurbo::Vec2;
use smallvec::SmallVec;

use crate::state::CameraState;

/// Position in the guided tour.
///
/// Steps count up from zero while the tour runs; any step at or past
/// [`NarrativeStep::COMPLETE`] means the tour is over and the map is free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NarrativeStep(pub u32);

impl NarrativeStep {
    /// The first step of the finished state.
    pub const COMPLETE: Self = Self(99);

    /// Returns `true` once the tour has finished.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self >= Self::COMPLETE
    }

    /// Returns `true` if the user may pan and zoom during this step.
    #[must_use]
    pub fn allows_interaction(self) -> bool {
        self.is_complete() || matches!(self.0, 9 | 19 | 24)
    }
}

/// A scripted camera target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    /// Translation as a fraction of the map extent.
    pub offset: Vec2,
    /// Target scale.
    pub scale: f64,
    /// Animation length in seconds.
    pub duration: f64,
}

/// Length of scripted moves that do not say otherwise.
pub const DEFAULT_SHOT_DURATION: f64 = 2.0;

const QUADRANT_REACH: f64 = 0.25;
const FOCUS_SCALE: f64 = 1.15;

impl Shot {
    /// A shot at the map center.
    #[must_use]
    pub const fn centered(scale: f64, duration: f64) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale,
            duration,
        }
    }

    /// A shot that brings `quadrant` to the middle of the view at `scale`.
    #[must_use]
    pub fn quadrant(quadrant: Quadrant, scale: f64, duration: f64) -> Self {
        Self {
            offset: -quadrant.direction() * (QUADRANT_REACH * scale),
            scale,
            duration,
        }
    }

    /// A close-up of `group`, nudged towards the centroid of its nodes.
    #[must_use]
    pub fn focus(group: &Group) -> Self {
        let half = WORLD_EXTENT / 2.0;
        let shift = (group.centroid().to_vec2() - Vec2::new(half, half)) / (2.0 * WORLD_EXTENT);
        let toward = group.quadrant().direction() * QUADRANT_REACH + shift;
        Self {
            offset: -toward * FOCUS_SCALE,
            scale: FOCUS_SCALE,
            duration: DEFAULT_SHOT_DURATION,
        }
    }

    /// The camera state this shot describes for a map of `map_extent` pixels.
    #[must_use]
    pub fn to_state(&self, map_extent: f64) -> CameraState {
        CameraState::new(self.offset * map_extent, self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct StepShot {
    first: u32,
    last: u32,
    shot: Shot,
}

/// Lookup table from `(focus, step)` to a [`Shot`].
///
/// A focused group with a registered shot always wins. Otherwise the first
/// step range containing the step decides, and anything unmatched gets the
/// default shot.
#[derive(Clone, Debug, PartialEq)]
pub struct Choreography {
    default: Shot,
    steps: SmallVec<[StepShot; 10]>,
    focus: HashMap<GroupId, Shot>,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(Shot::centered(0.65, DEFAULT_SHOT_DURATION))
    }
}

impl Choreography {
    /// An empty table that always answers `default`.
    #[must_use]
    pub fn new(default: Shot) -> Self {
        Self {
            default,
            steps: SmallVec::new(),
            focus: HashMap::new(),
        }
    }

    /// The tour's camera moves, without any focus shots.
    #[must_use]
    pub fn reference() -> Self {
        let d = DEFAULT_SHOT_DURATION;
        Self::default()
            .with_steps(9..=9, Shot::centered(0.60, d))
            .with_steps(11..=12, Shot::quadrant(Quadrant::TopLeft, 0.85, 1.5))
            .with_steps(13..=14, Shot::quadrant(Quadrant::TopRight, 0.85, 1.5))
            .with_steps(15..=16, Shot::quadrant(Quadrant::BottomRight, 0.85, 1.5))
            .with_steps(17..=18, Shot::quadrant(Quadrant::BottomLeft, 0.85, 1.5))
            .with_steps(19..=19, Shot::centered(0.65, d))
            .with_steps(22..=23, Shot::quadrant(Quadrant::TopLeft, 1.3, d))
            .with_steps(24..=24, Shot::centered(0.9, d))
            .with_steps(25..=30, Shot::centered(2.5, d))
    }

    /// [`Choreography::reference`] plus a focus shot for every group of `atlas`.
    #[must_use]
    pub fn from_atlas(atlas: &Atlas) -> Self {
        atlas
            .groups()
            .iter()
            .fold(Self::reference(), |c, g| c.with_focus(g.id(), Shot::focus(g)))
    }

    /// Adds a shot for a range of steps.
    #[must_use]
    pub fn with_steps(mut self, steps: core::ops::RangeInclusive<u32>, shot: Shot) -> Self {
        self.steps.push(StepShot {
            first: *steps.start(),
            last: *steps.end(),
            shot,
        });
        self
    }

    /// Sets the shot used while `group` is focused.
    #[must_use]
    pub fn with_focus(mut self, group: GroupId, shot: Shot) -> Self {
        self.focus.insert(group, shot);
        self
    }

    /// The shot for anything not otherwise listed.
    #[must_use]
    pub fn default_shot(&self) -> Shot {
        self.default
    }

    /// Picks the shot for the given focus and step.
    #[must_use]
    pub fn resolve(&self, focus: Option<GroupId>, step: NarrativeStep) -> Shot {
        if let Some(shot) = focus.and_then(|id| self.focus.get(&id)) {
            return *shot;
        }
        self.steps
            .iter()
            .find(|s| (s.first..=s.last).contains(&step.0))
            .map_or(self.default, |s| s.shot)
    }
}
