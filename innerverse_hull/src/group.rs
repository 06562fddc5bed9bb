// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use innerverse_model::{Atlas, Group, GroupId, WORLD_EXTENT};
use kurbo::{Affine, Point};

use crate::boundary::{Boundary, smooth_boundary};
use crate::hull::convex_hull;

/// Parameters for turning a group into outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryConfig {
    /// Side length of the world coordinate space node positions use.
    pub world_extent: f64,
    /// Outward buffer in world units.
    pub world_buffer: f64,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            world_extent: WORLD_EXTENT,
            world_buffer: 25.0,
        }
    }
}

impl BoundaryConfig {
    /// Creates a config, replacing a non-positive or non-finite extent with
    /// [`WORLD_EXTENT`].
    #[must_use]
    pub fn new(world_extent: f64, world_buffer: f64) -> Self {
        let world_extent = if world_extent.is_finite() && world_extent > 0.0 {
            world_extent
        } else {
            WORLD_EXTENT
        };
        Self {
            world_extent,
            world_buffer,
        }
    }

    /// Buffer for the normalized (0–1) clip outline.
    #[must_use]
    pub fn clip_buffer(&self) -> f64 {
        self.world_buffer / self.extent()
    }

    /// Transform mapping world coordinates into normalized coordinates.
    #[must_use]
    pub fn world_to_clip(&self) -> Affine {
        Affine::scale(1.0 / self.extent())
    }

    fn extent(&self) -> f64 {
        if self.world_extent.is_finite() && self.world_extent > 0.0 {
            self.world_extent
        } else {
            WORLD_EXTENT
        }
    }
}

/// Both outlines of one group, derived from a single hull.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupBoundary {
    /// The group these outlines belong to.
    pub group: GroupId,
    /// Hull over the node positions and the anchor, in world units.
    pub hull: Vec<Point>,
    /// Outline in world units, for drawing the region.
    pub world: Boundary,
    /// Outline in normalized units, for clipping the group's texture.
    pub clip: Boundary,
}

/// Computes the region outlines for `group`.
///
/// One hull is taken over the six node positions plus the anchor. The world
/// outline buffers it by `world_buffer`; the clip outline buffers the same
/// hull, scaled into `[0, 1]`, by [`BoundaryConfig::clip_buffer`], so the two
/// line up exactly after scaling.
#[must_use]
pub fn group_boundary(group: &Group, config: &BoundaryConfig) -> GroupBoundary {
    let hull = convex_hull(&group.boundary_points());
    let world = smooth_boundary(&hull, config.world_buffer);

    let to_clip = config.world_to_clip();
    let normalized: Vec<Point> = hull.iter().map(|&p| to_clip * p).collect();
    let clip = smooth_boundary(&normalized, config.clip_buffer());

    GroupBoundary {
        group: group.id(),
        hull,
        world,
        clip,
    }
}

/// [`group_boundary`] for every group, in atlas order.
#[must_use]
pub fn atlas_boundaries(atlas: &Atlas, config: &BoundaryConfig) -> Vec<GroupBoundary> {
    atlas
        .groups()
        .iter()
        .map(|g| group_boundary(g, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use innerverse_model::WORLD_EXTENT;

    use super::BoundaryConfig;

    #[test]
    fn default_clip_buffer_is_a_quarter() {
        assert_eq!(BoundaryConfig::default().clip_buffer(), 0.25);
    }

    #[test]
    fn bad_extent_falls_back() {
        let c = BoundaryConfig::new(0.0, 25.0);
        assert_eq!(c.world_extent, WORLD_EXTENT);
        let c = BoundaryConfig::new(f64::NAN, 10.0);
        assert_eq!(c.clip_buffer(), 0.1);

        // Fields are public; the derived values still guard.
        let c = BoundaryConfig {
            world_extent: -1.0,
            world_buffer: 50.0,
        };
        assert_eq!(c.clip_buffer(), 0.5);
    }
}
