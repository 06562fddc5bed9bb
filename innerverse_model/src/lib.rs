// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Innerverse Model: the data behind the four-quadrant map.
//!
//! The map is an [`Atlas`] of [`Group`]s (domains). Every group sits in one
//! [`Quadrant`] and owns exactly six [`Node`]s plus a hull anchor point.
//! Every node carries exactly three [`Lens`] values, each either unset or a
//! number in `[-100, 100]`. Positions are [`kurbo::Point`]s in a normalized
//! 0–100 space ([`WORLD_EXTENT`]).
//!
//! This crate only stores data. Statistics live in `innerverse_stats`,
//! region outlines in `innerverse_hull`, and the camera in
//! `innerverse_camera`.
//!
//! ```rust
//! use innerverse_model::{Atlas, Lens, NodeId};
//!
//! let mut atlas = Atlas::reference();
//! assert_eq!(atlas.groups().len(), 4);
//!
//! // A user edit: node 13 ("Applied Vision") gets an Ego value.
//! assert!(atlas.set_lens(NodeId(13), Lens::Ego, Some(40.0)));
//! assert_eq!(atlas.node(NodeId(13)).and_then(|n| n.lens(Lens::Ego)), Some(40.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod atlas;
mod group;
mod lens;
mod node;
mod quadrant;

pub use atlas::Atlas;
pub use group::{Group, GroupId, NODES_PER_GROUP};
pub use lens::{LENS_MAX, LENS_MIN, Lens, normalize_lens_value};
pub use node::{Node, NodeId};
pub use quadrant::{Axis, Quadrant};

/// Side length of the normalized coordinate space node positions live in.
pub const WORLD_EXTENT: f64 = 100.0;
