//! The [`PathGrid`] type: a flat 2D grid of [`GridCell`]s answering
//! passability queries.
//!
//! Cells are stored row-major: the cell at `(x, y)` lives at index
//! `y * width + x`. Searches refer to cells by this index.

use crate::area::AreaMask;
use crate::cell::GridCell;
use crate::geom::{Point, Range};

/// A 2D grid of terrain cells.
///
/// The grid is populated through the setters and then borrowed immutably
/// by any number of searches. Coordinate-taking accessors panic on points
/// outside the grid, like slice indexing; use [`try_index`](Self::try_index)
/// or [`contains`](Self::contains) to check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGrid {
    cells: Vec<GridCell>,
    width: usize,
    height: usize,
}

impl PathGrid {
    /// Create a new grid of the given dimensions with every cell zeroed
    /// (impassable).
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, or if either does not fit the
    /// `i32` coordinate space.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "grid dimensions exceed the coordinate space"
        );
        Self {
            cells: vec![GridCell::default(); width * height],
            width,
            height,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn try_index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Flat index of `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn index(&self, p: Point) -> usize {
        match self.try_index(p) {
            Some(i) => i,
            None => panic!(
                "point {p} is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Coordinates of the cell at flat index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn point(&self, idx: usize) -> Point {
        assert!(
            idx < self.cells.len(),
            "index {idx} is outside the {}x{} grid",
            self.width,
            self.height
        );
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The cell at `p`.
    #[inline]
    #[track_caller]
    pub fn cell(&self, p: Point) -> GridCell {
        self.cells[self.index(p)]
    }

    /// The cell at flat index `idx`.
    #[inline]
    #[track_caller]
    pub fn cell_at(&self, idx: usize) -> GridCell {
        self.cells[idx]
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Replace the cell at `p`.
    #[inline]
    #[track_caller]
    pub fn set_cell(&mut self, p: Point, cell: GridCell) {
        let i = self.index(p);
        self.cells[i] = cell;
    }

    /// Clearance of the cell at `p`.
    #[inline]
    #[track_caller]
    pub fn clearance(&self, p: Point) -> u32 {
        self.cell(p).clearance
    }

    /// Set the clearance of the cell at `p`.
    #[inline]
    #[track_caller]
    pub fn set_clearance(&mut self, p: Point, clearance: u32) {
        let i = self.index(p);
        self.cells[i].clearance = clearance;
    }

    /// Terrain mask of the cell at `p`.
    #[inline]
    #[track_caller]
    pub fn area(&self, p: Point) -> AreaMask {
        self.cell(p).area
    }

    /// Set the terrain mask of the cell at `p`.
    #[inline]
    #[track_caller]
    pub fn set_area(&mut self, p: Point, area: AreaMask) {
        let i = self.index(p);
        self.cells[i].area = area;
    }

    /// Whether a unit of `size` able to cross `capabilities` may enter `p`.
    ///
    /// True iff the cell shares at least one terrain bit with
    /// `capabilities` and its clearance is at least `size`.
    #[inline]
    #[track_caller]
    pub fn is_passable(&self, p: Point, capabilities: AreaMask, size: u32) -> bool {
        self.cell(p).admits(capabilities, size)
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: GridCell) {
        self.cells.fill(cell);
    }

    /// Set every cell of `rng` that lies inside the grid to `cell`.
    pub fn fill_range(&mut self, rng: Range, cell: GridCell) {
        for p in self.bounds().intersect(rng) {
            let i = self.index(p);
            self.cells[i] = cell;
        }
    }

    /// Row-major iterator over `(Point, GridCell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, GridCell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error as _;

    #[derive(serde::Serialize)]
    struct GridRef<'a> {
        width: usize,
        height: usize,
        cells: &'a [GridCell],
    }

    #[derive(serde::Deserialize)]
    struct GridOwned {
        width: usize,
        height: usize,
        cells: Vec<GridCell>,
    }

    impl serde::Serialize for PathGrid {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            GridRef {
                width: self.width,
                height: self.height,
                cells: &self.cells,
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for PathGrid {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let g = GridOwned::deserialize(deserializer)?;
            if g.width == 0 || g.height == 0 {
                return Err(D::Error::custom("grid dimensions must be positive"));
            }
            if g.width.checked_mul(g.height) != Some(g.cells.len()) {
                return Err(D::Error::custom(format!(
                    "expected {}x{} cells, got {}",
                    g.width,
                    g.height,
                    g.cells.len()
                )));
            }
            Ok(PathGrid {
                cells: g.cells,
                width: g.width,
                height: g.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LAND: AreaMask = AreaMask::bit(0);
    const SEA: AreaMask = AreaMask::bit(1);
    const MOUNTAIN: AreaMask = AreaMask::bit(2);
    const IMPASSABLE: AreaMask = AreaMask::bit(63);

    #[test]
    fn new_grid_is_impassable() {
        let g = PathGrid::new(4, 3);
        assert_eq!(g.len(), 12);
        for (p, cell) in g.iter() {
            assert_eq!(cell, GridCell::default());
            assert!(!g.is_passable(p, AreaMask::ALL, 0));
        }
    }

    #[test]
    fn clearance_is_stored() {
        let mut g = PathGrid::new(20, 20);
        g.set_clearance(Point::new(0, 1), 20);
        assert_eq!(g.clearance(Point::new(0, 1)), 20);
        assert_eq!(g.clearance(Point::new(1, 0)), 0);
    }

    #[test]
    fn area_is_stored() {
        let mut g = PathGrid::new(20, 20);
        g.set_area(Point::new(19, 19), AreaMask(20));
        assert_eq!(g.area(Point::new(19, 19)), AreaMask(20));
    }

    #[test]
    fn index_mapping_is_a_bijection() {
        let g = PathGrid::new(7, 5);
        for (i, (p, _)) in g.iter().enumerate() {
            assert_eq!(g.index(p), i);
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(3, 2)), 2 * 7 + 3);
        assert_eq!(g.point(20), Point::new(6, 2));
    }

    #[test]
    fn try_index_rejects_outside_points() {
        let g = PathGrid::new(6, 5);
        assert_eq!(g.try_index(Point::new(-1, 0)), None);
        assert_eq!(g.try_index(Point::new(0, -1)), None);
        assert_eq!(g.try_index(Point::new(6, 0)), None);
        assert_eq!(g.try_index(Point::new(0, 5)), None);
        assert_eq!(g.try_index(Point::new(5, 4)), Some(29));
    }

    #[test]
    #[should_panic(expected = "outside the 6x5 grid")]
    fn accessor_panics_outside() {
        let g = PathGrid::new(6, 5);
        g.clearance(Point::new(6, 0));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_width_panics() {
        PathGrid::new(0, 3);
    }

    #[test]
    fn fill_range_clips_to_grid() {
        let mut g = PathGrid::new(5, 5);
        let wall = GridCell::new(3, LAND);
        g.fill_range(Range::new(3, 3, 10, 10), wall);
        assert_eq!(g.cell(Point::new(4, 4)), wall);
        assert_eq!(g.cell(Point::new(3, 3)), wall);
        assert_eq!(g.cell(Point::new(2, 4)), GridCell::default());
        let filled = g.iter().filter(|(_, c)| *c == wall).count();
        assert_eq!(filled, 4);
    }

    #[test]
    fn fill_column() {
        let mut g = PathGrid::new(6, 5);
        g.fill(GridCell::new(1, LAND));
        g.fill_range(g.bounds().column(3), GridCell::default());
        for y in 0..5 {
            assert!(!g.is_passable(Point::new(3, y), LAND, 0));
            assert!(g.is_passable(Point::new(2, y), LAND, 1));
        }
    }

    #[rstest]
    // terrain compatibility
    #[case(LAND, 1, SEA, 1, false)]
    #[case(LAND, 1, LAND, 1, true)]
    #[case(LAND, 1, LAND | SEA, 1, true)]
    #[case(LAND, 1, MOUNTAIN | SEA, 1, false)]
    #[case(IMPASSABLE, 1, MOUNTAIN | SEA | LAND, 1, false)]
    // clearance threshold
    #[case(LAND, 1, LAND, 3, false)]
    #[case(LAND, 2, LAND, 3, false)]
    #[case(LAND, 3, LAND, 3, true)]
    #[case(MOUNTAIN, 4, MOUNTAIN, 2, true)]
    #[case(LAND, 0, LAND, 0, true)]
    #[case(AreaMask::NONE, 5, AreaMask::ALL, 0, false)]
    fn passability_truth_table(
        #[case] cell_area: AreaMask,
        #[case] cell_clearance: u32,
        #[case] unit_caps: AreaMask,
        #[case] unit_size: u32,
        #[case] expected: bool,
    ) {
        let p = Point::new(19, 19);
        let mut g = PathGrid::new(20, 20);
        g.set_area(p, cell_area);
        g.set_clearance(p, cell_clearance);
        assert_eq!(g.is_passable(p, unit_caps, unit_size), expected);
        assert_eq!(
            g.is_passable(p, unit_caps, unit_size),
            (g.area(p).0 & unit_caps.0) != 0 && g.clearance(p) >= unit_size
        );
    }
}
