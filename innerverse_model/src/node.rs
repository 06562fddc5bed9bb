// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

use crate::lens::{Lens, normalize_lens_value};

/// Stable identity of a [`Node`] within an atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A point-entity on the map carrying exactly three lens values.
///
/// Positions live in the normalized 0–100 space of the owning group. Each
/// lens is either defined (a value in `[-100, 100]`) or unset.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    position: Point,
    lenses: [Option<f64>; Lens::COUNT],
}

impl Node {
    /// Creates a node with all lenses unset.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            lenses: [None; Lens::COUNT],
        }
    }

    /// Builder-style variant of [`Node::set_lens`].
    #[must_use]
    pub fn with_lens(mut self, lens: Lens, value: f64) -> Self {
        self.set_lens(lens, Some(value));
        self
    }

    /// Returns the node identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the position in 0–100 group space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the node. Boundaries derived from the owning group must be
    /// recomputed afterwards.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the value of `lens`, or `None` when it is unset.
    #[must_use]
    pub fn lens(&self, lens: Lens) -> Option<f64> {
        self.lenses[lens.index()]
    }

    /// Returns all three lens slots in storage order.
    #[must_use]
    pub fn lenses(&self) -> [Option<f64>; Lens::COUNT] {
        self.lenses
    }

    /// Sets or clears `lens`, returning the previous value.
    ///
    /// Values are normalized with [`normalize_lens_value`].
    pub fn set_lens(&mut self, lens: Lens, value: Option<f64>) -> Option<f64> {
        let slot = &mut self.lenses[lens.index()];
        core::mem::replace(slot, value.and_then(normalize_lens_value))
    }

    /// Clears `lens`.
    pub fn clear_lens(&mut self, lens: Lens) {
        self.lenses[lens.index()] = None;
    }

    /// Iterates the defined lens values in lens order.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.lenses.iter().flatten().copied()
    }

    /// Returns `true` when every lens has a value.
    #[must_use]
    pub fn is_fully_defined(&self) -> bool {
        self.lenses.iter().all(Option::is_some)
    }
}
