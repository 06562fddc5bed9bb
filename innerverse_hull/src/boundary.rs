// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed, buffered outlines through a hull.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Vec2};

/// A closed, smooth outline passing through a set of buffered anchor points.
///
/// Produced by [`smooth_boundary`]. The anchors are the hull vertices pushed
/// outward from their centroid; the path is a periodic Catmull-Rom spline
/// through them expressed as cubic Béziers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Boundary {
    anchors: Vec<Point>,
    path: BezPath,
}

impl Boundary {
    /// The empty boundary, produced for degenerate input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Buffered points the curve passes through, in hull order.
    #[must_use]
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// The closed outline.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consumes the boundary, returning its path.
    #[must_use]
    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Returns `true` if the path ends with a `ClosePath` element.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.path.elements().last(), Some(PathEl::ClosePath))
    }
}

/// Mean of `points`, or `None` when empty.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / points.len() as f64).to_point())
}

/// Moves each point `distance` units away from `center`.
///
/// A point sitting exactly on `center` has no outward direction and stays
/// where it is.
#[must_use]
pub fn buffer_outward(points: &[Point], center: Point, distance: f64) -> Vec<Point> {
    points
        .iter()
        .map(|&p| {
            let dir = p - center;
            let len = dir.hypot();
            if len > 0.0 {
                p + dir * (distance / len)
            } else {
                p
            }
        })
        .collect()
}

/// Builds a smooth closed outline around `hull`, expanded by `buffer`.
///
/// Each hull vertex is pushed `buffer` units away from the hull's centroid,
/// then the buffered points are joined with a periodic Catmull-Rom spline.
/// Segment `i` runs from point `i` to point `i + 1` with control points
/// `p1 + (p2 - p0) / 6` and `p2 - (p3 - p1) / 6`, indices wrapping around.
///
/// Fewer than three points yield an empty [`Boundary`].
///
/// ```rust
/// use kurbo::Point;
/// use innerverse_hull::smooth_boundary;
///
/// let hull = [
///     Point::new(10.0, 10.0),
///     Point::new(90.0, 10.0),
///     Point::new(50.0, 90.0),
/// ];
/// let boundary = smooth_boundary(&hull, 10.0);
/// assert!(boundary.is_closed());
/// assert_eq!(boundary.anchors().len(), 3);
///
/// assert!(smooth_boundary(&hull[..2], 10.0).is_empty());
/// ```
#[must_use]
pub fn smooth_boundary(hull: &[Point], buffer: f64) -> Boundary {
    if hull.len() < 3 {
        return Boundary::empty();
    }
    let Some(center) = centroid(hull) else {
        return Boundary::empty();
    };
    let anchors = buffer_outward(hull, center, buffer);
    let path = catmull_rom_closed(&anchors);
    Boundary { anchors, path }
}

fn catmull_rom_closed(points: &[Point]) -> BezPath {
    let n = points.len();
    let at = |i: usize| points[i % n];

    let mut path = BezPath::new();
    path.move_to(points[0]);
    for i in 0..n {
        let p0 = at(i + n - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);
        path.curve_to(p1 + (p2 - p0) / 6.0, p2 - (p3 - p1) / 6.0, p2);
    }
    path.close_path();
    path
}
