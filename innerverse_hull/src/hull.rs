// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;
use smallvec::SmallVec;

// Groups feed seven points; keep that case off the heap.
type Chain = SmallVec<[Point; 8]>;

/// Cross product of `a - o` and `b - o`.
///
/// Positive for a counter-clockwise turn `o → a → b` (in y-up axes), zero
/// when the three points are collinear.
#[must_use]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a - o).cross(b - o)
}

/// Convex hull of `points` using Andrew's monotone chain.
///
/// Points with a non-finite coordinate are skipped. The rest are stably
/// sorted by `x`, then `y`. Each half chain is built
/// independently, popping its last point while the last three points do not
/// make a counter-clockwise turn, so collinear points on an edge are
/// dropped. The two chains are joined with their duplicated end points
/// removed.
///
/// The result is a subset of the input in a deterministic order:
/// counter-clockwise with `y` pointing up, which is clockwise on screen.
/// Inputs with fewer than three distinct finite points are returned as
/// those finite points, in input order.
///
/// ```rust
/// use kurbo::Point;
/// use innerverse_hull::convex_hull;
///
/// let pts = [
///     Point::new(10.0, 10.0),
///     Point::new(90.0, 10.0),
///     Point::new(50.0, 90.0),
///     Point::new(50.0, 50.0), // interior
/// ];
/// let hull = convex_hull(&pts);
/// assert_eq!(hull.len(), 3);
/// assert!(!hull.contains(&Point::new(50.0, 50.0)));
/// ```
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Chain = points.iter().copied().filter(|p| p.is_finite()).collect();
    if distinct_count_below_three(&sorted) {
        return sorted.into_vec();
    }

    sorted.sort_by(|a, b| by_x_then_y(*a, *b));

    let mut forward = half_chain(sorted.iter().copied());
    let mut backward = half_chain(sorted.iter().rev().copied());
    // Each chain ends where the other starts.
    forward.pop();
    backward.pop();

    forward.into_iter().chain(backward).collect()
}

fn half_chain(points: impl Iterator<Item = Point>) -> Chain {
    let mut chain = Chain::new();
    for p in points {
        while let [.., o, a] = chain[..] {
            if cross(o, a, p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

fn by_x_then_y(a: Point, b: Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

fn distinct_count_below_three(points: &[Point]) -> bool {
    let Some((&first, rest)) = points.split_first() else {
        return true;
    };
    let Some(second) = rest.iter().copied().find(|p| *p != first) else {
        return true;
    };
    rest.iter().all(|p| *p == first || *p == second)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{convex_hull, cross};

    #[test]
    fn cross_sign_matches_turn_direction() {
        let o = Point::ZERO;
        assert!(cross(o, Point::new(1.0, 0.0), Point::new(0.0, 1.0)) > 0.0);
        assert!(cross(o, Point::new(0.0, 1.0), Point::new(1.0, 0.0)) < 0.0);
        assert_eq!(cross(o, Point::new(1.0, 1.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn tiny_inputs_pass_through() {
        assert!(convex_hull(&[]).is_empty());
        let one = [Point::new(3.0, 4.0)];
        assert_eq!(convex_hull(&one), one);
        let two = [Point::new(5.0, 5.0), Point::new(1.0, 1.0)];
        assert_eq!(convex_hull(&two), two);
    }

    #[test]
    fn repeated_points_count_as_one() {
        let pts = [Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(1.0, 1.0)];
        assert_eq!(convex_hull(&pts), pts);
    }

    #[test]
    fn square_with_interior_and_edge_points() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 0.0), // on an edge, dropped
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn input_order_does_not_change_output() {
        let a = [
            Point::new(15.0, 25.0),
            Point::new(55.0, 15.0),
            Point::new(75.0, 40.0),
            Point::new(30.0, 55.0),
            Point::new(70.0, 70.0),
            Point::new(10.0, 75.0),
            Point::new(85.0, 85.0),
        ];
        let mut b: Vec<Point> = a.iter().rev().copied().collect();
        b.rotate_left(3);
        assert_eq!(convex_hull(&a), convex_hull(&b));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let grid = |i: u32| Point::new(f64::from(i % 8) * 10.0, f64::from(i / 8) * 10.0);
        let clean: Vec<Point> = (0..64).map(grid).collect();
        // Every fifth point from index 4 is broken; none of them is a corner.
        let broken: Vec<Point> = (0..64)
            .map(|i| match (i >= 4 && (i - 4) % 5 == 0, i % 3) {
                (false, _) => grid(i),
                (true, 0) => Point::new(f64::NAN, f64::from(i)),
                (true, 1) => Point::new(f64::from(i), f64::INFINITY),
                (true, _) => Point::new(f64::NEG_INFINITY, f64::NAN),
            })
            .collect();

        let hull = convex_hull(&broken);
        assert!(hull.iter().all(|p| p.is_finite()));
        assert_eq!(hull, convex_hull(&clean));
        assert_eq!(hull.len(), 4);

        let mostly_bad = [
            Point::new(f64::NAN, 0.0),
            Point::new(1.0, 2.0),
            Point::new(f64::INFINITY, 1.0),
        ];
        assert_eq!(convex_hull(&mostly_bad), [Point::new(1.0, 2.0)]);
    }

    #[test]
    fn collinear_points_collapse_to_endpoints() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        assert_eq!(convex_hull(&pts), [Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
    }
}
