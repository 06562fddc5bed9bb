// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// One of the four cells of the map grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left cell.
    TopLeft,
    /// Upper-right cell.
    TopRight,
    /// Lower-left cell.
    BottomLeft,
    /// Lower-right cell.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in grid reading order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Unit direction from the map center towards this quadrant.
    ///
    /// Screen convention: `+y` points down.
    #[must_use]
    pub const fn direction(self) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::new(-1.0, -1.0),
            Self::TopRight => Vec2::new(1.0, -1.0),
            Self::BottomLeft => Vec2::new(-1.0, 1.0),
            Self::BottomRight => Vec2::new(1.0, 1.0),
        }
    }

    /// Default hull anchor for a group in this quadrant.
    ///
    /// The anchor sits in the corner of the group's local 0–100 space that
    /// faces the map center, which pulls the region outline towards it.
    #[must_use]
    pub const fn default_anchor(self) -> Point {
        match self {
            Self::TopLeft => Point::new(85.0, 85.0),
            Self::TopRight => Point::new(15.0, 85.0),
            Self::BottomLeft => Point::new(85.0, 15.0),
            Self::BottomRight => Point::new(15.0, 15.0),
        }
    }

    /// Returns `true` for the two left-hand quadrants.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Returns `true` for the two upper quadrants.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Cross-cutting energies; each one spans two neighbouring quadrants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left column.
    Doing,
    /// Right column.
    Being,
    /// Top row.
    Seeing,
    /// Bottom row.
    Feeling,
}

impl Axis {
    /// All axes.
    pub const ALL: [Self; 4] = [Self::Doing, Self::Being, Self::Seeing, Self::Feeling];

    /// The two quadrants this axis spans.
    #[must_use]
    pub const fn quadrants(self) -> [Quadrant; 2] {
        match self {
            Self::Doing => [Quadrant::TopLeft, Quadrant::BottomLeft],
            Self::Being => [Quadrant::TopRight, Quadrant::BottomRight],
            Self::Seeing => [Quadrant::TopLeft, Quadrant::TopRight],
            Self::Feeling => [Quadrant::BottomLeft, Quadrant::BottomRight],
        }
    }

    /// Returns `true` if `quadrant` belongs to this axis.
    #[must_use]
    pub const fn contains(self, quadrant: Quadrant) -> bool {
        match self {
            Self::Doing => quadrant.is_left(),
            Self::Being => !quadrant.is_left(),
            Self::Seeing => quadrant.is_top(),
            Self::Feeling => !quadrant.is_top(),
        }
    }
}
