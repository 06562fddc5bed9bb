// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::node::{Node, NodeId};
use crate::quadrant::Quadrant;

/// Number of nodes in every group.
pub const NODES_PER_GROUP: usize = 6;

/// Stable identity of a [`Group`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

/// A domain: six nodes sharing one rendered region in a map quadrant.
///
/// The anchor is an extra point outside the node cluster. It takes part in
/// hull construction only and biases the region towards the map center.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    id: GroupId,
    name: String,
    quadrant: Quadrant,
    nodes: [Node; NODES_PER_GROUP],
    anchor: Point,
}

impl Group {
    /// Creates a group anchored at [`Quadrant::default_anchor`].
    #[must_use]
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        quadrant: Quadrant,
        nodes: [Node; NODES_PER_GROUP],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quadrant,
            nodes,
            anchor: quadrant.default_anchor(),
        }
    }

    /// Replaces the hull anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns the group identity.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quadrant this group occupies.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the hull anchor.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Moves the hull anchor.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Returns the nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[Node; NODES_PER_GROUP] {
        &self.nodes
    }

    /// Returns mutable access to the nodes. The count cannot change.
    pub fn nodes_mut(&mut self) -> &mut [Node; NODES_PER_GROUP] {
        &mut self.nodes
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Looks up a node by id for mutation.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    /// Iterates node positions.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(Node::position)
    }

    /// Node positions followed by the anchor: the input of region synthesis.
    #[must_use]
    pub fn boundary_points(&self) -> [Point; NODES_PER_GROUP + 1] {
        core::array::from_fn(|i| self.nodes.get(i).map_or(self.anchor, Node::position))
    }

    /// Mean position of the nodes (the anchor is not included).
    #[must_use]
    pub fn centroid(&self) -> Point {
        let sum = self
            .points()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / NODES_PER_GROUP as f64).to_point()
    }

    /// Iterates every defined lens value of every node.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().flat_map(Node::defined_values)
    }
}
