// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Innerverse Hull: organic region outlines for node clusters.
//!
//! A group's region is drawn in three steps:
//! - [`convex_hull`] reduces the six node positions plus the group's anchor
//!   to their convex hull (Andrew's monotone chain);
//! - [`smooth_boundary`] pushes each hull vertex outward from the centroid by
//!   a buffer distance;
//! - the buffered points are joined by a closed Catmull-Rom spline, emitted
//!   as a [`kurbo::BezPath`] of cubic segments.
//!
//! [`group_boundary`] runs this twice from the same hull: once in world
//! units (0–100) for drawing the region, once in normalized units (0–1) for
//! clipping the region's texture. Both buffers come from one
//! [`BoundaryConfig`], so the outlines always coincide.
//!
//! ```rust
//! use innerverse_hull::{BoundaryConfig, atlas_boundaries};
//! use innerverse_model::Atlas;
//!
//! let atlas = Atlas::reference();
//! let regions = atlas_boundaries(&atlas, &BoundaryConfig::default());
//! assert_eq!(regions.len(), 4);
//! assert!(regions.iter().all(|r| r.world.is_closed() && r.clip.is_closed()));
//! ```
//!
//! All functions are pure; recompute whenever a group's points change.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod boundary;
mod group;
mod hull;

pub use boundary::{Boundary, buffer_outward, centroid, smooth_boundary};
pub use group::{BoundaryConfig, GroupBoundary, atlas_boundaries, group_boundary};
pub use hull::{convex_hull, cross};
