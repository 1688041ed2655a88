//! Distance estimates for A*.
//!
//! Movement is 8-directional: an orthogonal step costs [`STRAIGHT_COST`] and
//! a diagonal step costs [`DIAGONAL_COST`]. [`diagonal`] is exact on an empty
//! grid under that model, so it never overestimates. Squared distances must
//! not be used as estimates; they are not admissible.

use gridnav_core::Point;

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: f32 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f32 = 1.4;

#[inline]
fn deltas(a: Point, b: Point) -> (f32, f32) {
    ((a.x - b.x).abs() as f32, (a.y - b.y).abs() as f32)
}

/// Octile distance for 8-way movement:
/// `S * (dx + dy) + (D - 2S) * min(dx, dy)`.
#[inline]
pub fn diagonal(a: Point, b: Point) -> f32 {
    let (dx, dy) = deltas(a, b);
    STRAIGHT_COST * (dx + dy) + (DIAGONAL_COST - 2.0 * STRAIGHT_COST) * dx.min(dy)
}

/// Manhattan (L1) distance, for 4-way movement.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f32 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Euclidean (L2) distance, for any-angle movement.
#[inline]
pub fn euclid(a: Point, b: Point) -> f32 {
    let (dx, dy) = deltas(a, b);
    (dx * dx + dy * dy).sqrt()
}

/// Heuristic used by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// [`diagonal`]. Admissible and consistent for 8-way movement.
    #[default]
    Diagonal,

    /// [`manhattan`]. Overestimates diagonal moves, so paths found with it
    /// may be longer than optimal; it usually expands fewer cells.
    Manhattan,

    /// [`euclid`]. Meant for any-angle movement; since `DIAGONAL_COST` is
    /// below √2 it slightly overestimates diagonal runs on this grid.
    Euclid,

    /// Always 0. Turns A* into Dijkstra's algorithm.
    Zero,
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f32 {
        match self {
            Heuristic::Diagonal => diagonal(from, to),
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclid => euclid(from, to),
            Heuristic::Zero => 0.0,
        }
    }

    /// Whether the estimate never exceeds the true cost under 8-way
    /// movement, which is what makes A* return shortest paths.
    #[must_use]
    pub const fn is_admissible(self) -> bool {
        matches!(self, Heuristic::Diagonal | Heuristic::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn diagonal_matches_the_octile_formula() {
        let o = Point::ZERO;
        assert!((diagonal(o, Point::new(3, 0)) - 3.0).abs() < EPS);
        assert!((diagonal(o, Point::new(2, 2)) - 2.8).abs() < EPS);
        // three diagonal steps, then two straight ones
        assert!((diagonal(o, Point::new(5, -3)) - (3.0 * 1.4 + 2.0)).abs() < EPS);
        assert_eq!(diagonal(Point::new(4, 4), Point::new(4, 4)), 0.0);
    }

    #[test]
    fn estimates_are_symmetric() {
        let a = Point::new(2, 9);
        let b = Point::new(-4, 1);
        for h in [
            Heuristic::Diagonal,
            Heuristic::Manhattan,
            Heuristic::Euclid,
            Heuristic::Zero,
        ] {
            assert_eq!(h.estimate(a, b), h.estimate(b, a), "{h:?}");
        }
    }

    #[test]
    fn other_metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(manhattan(a, b), 7.0);
        assert!((euclid(a, b) - 5.0).abs() < EPS);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
    }

    #[test]
    fn only_diagonal_and_zero_are_admissible() {
        // On an open grid the octile distance is the true cost.
        for x in -6..=6 {
            for y in -6..=6 {
                let p = Point::new(x, y);
                let exact = diagonal(Point::ZERO, p);
                if x != 0 && y != 0 {
                    assert!(manhattan(Point::ZERO, p) > exact);
                } else {
                    assert!((euclid(Point::ZERO, p) - exact).abs() < EPS);
                }
            }
        }
        // pure diagonal runs: 1.4142 per step > 1.4
        for n in 1..=6 {
            let p = Point::new(n, n);
            assert!(euclid(Point::ZERO, p) > diagonal(Point::ZERO, p));
        }
        assert!(Heuristic::Diagonal.is_admissible());
        assert!(Heuristic::Zero.is_admissible());
        assert!(!Heuristic::Euclid.is_admissible());
        assert!(!Heuristic::Manhattan.is_admissible());
    }
}
