//! 8-way movement: neighbour offsets and step costs.

use gridnav_core::{PathGrid, Point};

use crate::heuristic::{DIAGONAL_COST, STRAIGHT_COST};

/// A single move on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub offset: Point,
    pub cost: f32,
}

impl Step {
    const fn straight(dx: i32, dy: i32) -> Self {
        Self {
            offset: Point::new(dx, dy),
            cost: STRAIGHT_COST,
        }
    }

    const fn diagonal(dx: i32, dy: i32) -> Self {
        Self {
            offset: Point::new(dx, dy),
            cost: DIAGONAL_COST,
        }
    }
}

/// The eight moves, orthogonal first. Neighbours are relaxed in this order,
/// which decides between equally short paths.
pub const STEPS: [Step; 8] = [
    Step::straight(-1, 0),
    Step::straight(1, 0),
    Step::straight(0, -1),
    Step::straight(0, 1),
    Step::diagonal(-1, 1),
    Step::diagonal(1, 1),
    Step::diagonal(-1, -1),
    Step::diagonal(1, -1),
];

/// The eight neighbours of `p` with the cost of moving there. Points
/// outside any grid are included; callers filter them.
#[inline]
pub fn neighbors(p: Point) -> impl Iterator<Item = (Point, f32)> {
    STEPS.iter().map(move |s| (p + s.offset, s.cost))
}

/// Cost of moving between two 8-adjacent points, or `None` if they are not
/// adjacent.
#[inline]
pub fn step_cost(from: Point, to: Point) -> Option<f32> {
    let d = to - from;
    STEPS.iter().find(|s| s.offset == d).map(|s| s.cost)
}

/// Total move cost of a sequence of cell indices on `grid`.
///
/// Returns `None` if two consecutive cells are not 8-adjacent. Empty and
/// single-cell sequences cost 0.
///
/// # Panics
///
/// Panics if an index lies outside the grid.
pub fn path_cost(grid: &PathGrid, path: &[usize]) -> Option<f32> {
    path.windows(2)
        .map(|w| step_cost(grid.point(w[0]), grid.point(w[1])))
        .sum()
}
