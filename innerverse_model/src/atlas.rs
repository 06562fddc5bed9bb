// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::group::{Group, GroupId, NODES_PER_GROUP};
use crate::lens::Lens;
use crate::node::{Node, NodeId};
use crate::quadrant::{Axis, Quadrant};

/// The whole map: every group in display order.
///
/// This is the single mutable data set of the application. Derived data
/// (statistics, region outlines) is recomputed from it on demand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Atlas {
    groups: Vec<Group>,
}

impl Atlas {
    /// Creates an atlas from groups in display order.
    #[must_use]
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// The four reference domains with every lens unset.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(Vec::from([
            reference_group(
                GroupId(1),
                "External Structure",
                Quadrant::TopLeft,
                [
                    ("Systematic Design", 15.0, 25.0),
                    ("Decisive Action", 55.0, 15.0),
                    ("Applied Vision", 75.0, 40.0),
                    ("Lucid Communication", 30.0, 55.0),
                    ("Sustained Discipline", 70.0, 70.0),
                    ("Structural Support", 10.0, 75.0),
                ],
            ),
            reference_group(
                GroupId(3),
                "Relational Flow",
                Quadrant::TopRight,
                [
                    ("Social Synergy", 30.0, 20.0),
                    ("Active Harmony", 80.0, 25.0),
                    ("Reflective Listening", 55.0, 50.0),
                    ("Authentic Narrative", 20.0, 70.0),
                    ("Mentorship", 90.0, 65.0),
                    ("Radical Openness", 50.0, 85.0),
                ],
            ),
            reference_group(
                GroupId(2),
                "Inner Drive",
                Quadrant::BottomLeft,
                [
                    ("Assertive Presence", 35.0, 15.0),
                    ("Competence", 85.0, 30.0),
                    ("Resilience", 60.0, 55.0),
                    ("Inner Compass", 25.0, 50.0),
                    ("Core Sovereignty", 90.0, 80.0),
                    ("Loyalty", 45.0, 85.0),
                ],
            ),
            reference_group(
                GroupId(4),
                "Root Connection",
                Quadrant::BottomRight,
                [
                    ("Somatic Embodiment", 25.0, 25.0),
                    ("Empathic Resonance", 75.0, 15.0),
                    ("Trust", 50.0, 45.0),
                    ("Intuitive Knowing", 90.0, 55.0),
                    ("Distilled Wisdom", 30.0, 80.0),
                    ("Dreaming", 70.0, 85.0),
                ],
            ),
        ]))
    }

    /// Returns the groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Looks up a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Looks up a group by id for mutation.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id() == id)
    }

    /// Returns the first group placed in `quadrant`.
    #[must_use]
    pub fn group_in(&self, quadrant: Quadrant) -> Option<&Group> {
        self.groups.iter().find(|g| g.quadrant() == quadrant)
    }

    /// Iterates the groups spanned by `axis`, in display order.
    pub fn groups_on(&self, axis: Axis) -> impl Iterator<Item = &Group> + '_ {
        self.groups
            .iter()
            .filter(move |g| axis.contains(g.quadrant()))
    }

    /// Iterates every node of every group.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.groups.iter().flat_map(|g| g.nodes().iter())
    }

    /// Looks up a node anywhere in the atlas.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes().find(|n| n.id() == id)
    }

    /// Looks up a node anywhere in the atlas for mutation.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.groups.iter_mut().find_map(|g| g.node_mut(id))
    }

    /// Applies a user edit to one lens of one node.
    ///
    /// Returns `false` if the node does not exist; the atlas is unchanged.
    pub fn set_lens(&mut self, node: NodeId, lens: Lens, value: Option<f64>) -> bool {
        match self.node_mut(node) {
            Some(node) => {
                node.set_lens(lens, value);
                true
            }
            None => false,
        }
    }

    /// Number of nodes with every lens defined.
    #[must_use]
    pub fn defined_node_count(&self) -> usize {
        self.nodes().filter(|n| n.is_fully_defined()).count()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.groups.len() * NODES_PER_GROUP
    }
}

fn reference_group(
    id: GroupId,
    name: &str,
    quadrant: Quadrant,
    nodes: [(&str, f64, f64); NODES_PER_GROUP],
) -> Group {
    let nodes = core::array::from_fn(|i| {
        let (node_name, x, y) = nodes[i];
        // Node ids are `<group><ordinal>`, so group 3 owns nodes 31..=36.
        let ordinal = u32::try_from(i + 1).unwrap_or(u32::MAX);
        Node::new(NodeId(id.0 * 10 + ordinal), node_name, Point::new(x, y))
    });
    Group::new(id, name, quadrant, nodes)
}
