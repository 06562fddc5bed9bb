// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregates over the subsets of an atlas the map visualizes.
//!
//! Every function here only selects values and hands them to
//! [`aggregate`]; none of them keep state, so they can be recomputed in any
//! order whenever a lens value changes.

use hashbrown::HashMap;
use innerverse_model::{Atlas, Axis, Group, GroupId, Lens, Node, NodeId};

use crate::summary::{Summary, aggregate};

/// One [`Summary`] per lens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LensSummaries {
    /// Summary of the [`Lens::Ego`] values.
    pub ego: Summary,
    /// Summary of the [`Lens::Soul`] values.
    pub soul: Summary,
    /// Summary of the [`Lens::Spirit`] values.
    pub spirit: Summary,
}

impl LensSummaries {
    /// Returns the summary for `lens`.
    #[must_use]
    pub fn get(&self, lens: Lens) -> Summary {
        match lens {
            Lens::Ego => self.ego,
            Lens::Soul => self.soul,
            Lens::Spirit => self.spirit,
        }
    }

    fn from_fn(mut f: impl FnMut(Lens) -> Summary) -> Self {
        Self {
            ego: f(Lens::Ego),
            soul: f(Lens::Soul),
            spirit: f(Lens::Spirit),
        }
    }
}

/// One [`Summary`] per cross-cutting axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisSummaries {
    /// Summary over the [`Axis::Doing`] groups.
    pub doing: Summary,
    /// Summary over the [`Axis::Being`] groups.
    pub being: Summary,
    /// Summary over the [`Axis::Seeing`] groups.
    pub seeing: Summary,
    /// Summary over the [`Axis::Feeling`] groups.
    pub feeling: Summary,
}

impl AxisSummaries {
    /// Returns the summary for `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> Summary {
        match axis {
            Axis::Doing => self.doing,
            Axis::Being => self.being,
            Axis::Seeing => self.seeing,
            Axis::Feeling => self.feeling,
        }
    }
}

/// Summary of one node across its three lenses.
#[must_use]
pub fn node_summary(node: &Node) -> Summary {
    aggregate(node.defined_values())
}

/// Summary of one group: every defined lens value of its six nodes.
#[must_use]
pub fn group_summary(group: &Group) -> Summary {
    aggregate(group.defined_values())
}

/// [`group_summary`] for every group in the atlas.
#[must_use]
pub fn group_summaries(atlas: &Atlas) -> HashMap<GroupId, Summary> {
    atlas
        .groups()
        .iter()
        .map(|g| (g.id(), group_summary(g)))
        .collect()
}

/// Summary of a single lens across every node of the atlas.
#[must_use]
pub fn lens_summary(atlas: &Atlas, lens: Lens) -> Summary {
    aggregate(atlas.nodes().filter_map(|n| n.lens(lens)))
}

/// [`lens_summary`] for all three lenses.
#[must_use]
pub fn lens_summaries(atlas: &Atlas) -> LensSummaries {
    LensSummaries::from_fn(|lens| lens_summary(atlas, lens))
}

/// Per-lens summaries restricted to one group.
#[must_use]
pub fn group_lens_summaries(group: &Group) -> LensSummaries {
    LensSummaries::from_fn(|lens| aggregate(group.nodes().iter().filter_map(|n| n.lens(lens))))
}

/// [`group_lens_summaries`] for every group in the atlas.
#[must_use]
pub fn lens_summaries_by_group(atlas: &Atlas) -> HashMap<GroupId, LensSummaries> {
    atlas
        .groups()
        .iter()
        .map(|g| (g.id(), group_lens_summaries(g)))
        .collect()
}

/// Summary of every defined value in the two groups `axis` spans.
#[must_use]
pub fn axis_summary(atlas: &Atlas, axis: Axis) -> Summary {
    aggregate(atlas.groups_on(axis).flat_map(Group::defined_values))
}

/// [`axis_summary`] for all four axes.
#[must_use]
pub fn axis_summaries(atlas: &Atlas) -> AxisSummaries {
    AxisSummaries {
        doing: axis_summary(atlas, Axis::Doing),
        being: axis_summary(atlas, Axis::Being),
        seeing: axis_summary(atlas, Axis::Seeing),
        feeling: axis_summary(atlas, Axis::Feeling),
    }
}

/// [`node_summary`] for every node in the atlas.
#[must_use]
pub fn node_summaries(atlas: &Atlas) -> HashMap<NodeId, Summary> {
    atlas.nodes().map(|n| (n.id(), node_summary(n))).collect()
}

/// Fully-defined nodes belonging to the groups `axis` spans.
pub fn nodes_for_axis(atlas: &Atlas, axis: Axis) -> impl Iterator<Item = &Node> + '_ {
    atlas
        .groups_on(axis)
        .flat_map(|g| g.nodes().iter())
        .filter(|n| n.is_fully_defined())
}
