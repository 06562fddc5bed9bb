// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Innerverse Stats: equilibrium and flux over lens values.
//!
//! The leaf of this crate is [`aggregate`], which turns any set of defined
//! lens values into a [`Summary`]: the arithmetic mean ("equilibrium") and
//! the population standard deviation ("flux"). An empty input is the normal
//! "nothing charted yet" state and yields `{0, 0}`.
//!
//! Everything else is a selection of values handed to [`aggregate`]:
//! - per node across its three lenses ([`node_summary`]),
//! - per group ([`group_summary`], [`group_summaries`]),
//! - per lens across the atlas ([`lens_summary`], [`lens_summaries`]) or
//!   within each group ([`lens_summaries_by_group`]),
//! - per cross-cutting axis spanning two groups ([`axis_summary`],
//!   [`axis_summaries`]).
//!
//! [`personal_spectrum`] and [`highlights`] build on those for the reading
//! panels.
//!
//! ```rust
//! use innerverse_model::{Atlas, Axis, Lens, NodeId};
//! use innerverse_stats::{axis_summary, group_summaries};
//!
//! let mut atlas = Atlas::reference();
//! atlas.set_lens(NodeId(11), Lens::Ego, Some(20.0));
//! atlas.set_lens(NodeId(21), Lens::Ego, Some(-20.0));
//!
//! let doing = axis_summary(&atlas, Axis::Doing);
//! assert_eq!(doing.equilibrium, 0.0);
//! assert_eq!(doing.flux, 20.0);
//! assert_eq!(group_summaries(&atlas).len(), 4);
//! ```
//!
//! All functions are pure and allocation is limited to the returned maps.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod composite;
mod highlights;
mod summary;

pub use composite::{
    AxisSummaries, LensSummaries, axis_summaries, axis_summary, group_lens_summaries,
    group_summaries, group_summary, lens_summaries, lens_summaries_by_group, lens_summary,
    node_summaries, node_summary, nodes_for_axis,
};
pub use highlights::{Highlight, Highlights, Spectrum, highlights, personal_spectrum};
pub use summary::{Accumulator, Summary, aggregate};
