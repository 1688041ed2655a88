//! A* search over a [`PathGrid`].
//!
//! The search runs from the finish cell back towards the start cell. Moves
//! and estimates are symmetric, so following parent links from the start
//! already walks towards the finish and the path needs no reversal.

use gridnav_core::{AreaMask, PathGrid, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::heap::{BinaryHeap, HeapKind};
use crate::heuristic::Heuristic;
use crate::neighbors::neighbors;
use crate::open_set::{CellRecord, OpenSet};

/// Size and terrain capabilities of the unit a path is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    /// Minimum clearance a cell needs to admit the unit.
    pub size: u32,
    /// Terrain types the unit can cross.
    pub capabilities: AreaMask,
}

impl Unit {
    /// Create a unit description.
    #[inline]
    pub const fn new(size: u32, capabilities: AreaMask) -> Self {
        Self { size, capabilities }
    }
}

/// Counters kept while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Cells whose neighbours were relaxed.
    pub(crate) expanded: usize,
    /// Entries pushed on the frontier.
    pub(crate) pushed: usize,
    /// Queued cells re-queued after a shorter route was found.
    pub(crate) requeued: usize,
    /// Pops of cells that were already expanded.
    pub(crate) stale: usize,
}

/// A* pathfinder with a fixed configuration.
///
/// Holds no per-search state; one value can serve any number of searches,
/// on any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    /// Create a pathfinder.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a shortest path for `unit` from `start` to `finish`.
    ///
    /// On success the path holds flat cell indices beginning with `start`
    /// and ending with the cell adjacent to `finish`; `finish` itself is not
    /// included, so `start == finish` yields an empty path. The finish cell
    /// is not tested for passability; every other cell on the path is.
    ///
    /// Returns `Ok(None)` when no route exists under the unit's size and
    /// capabilities.
    ///
    /// # Errors
    ///
    /// - [`SearchError::OutOfBounds`] if `start` or `finish` is outside the
    ///   grid.
    /// - [`SearchError::BudgetExhausted`] if the configured expansion
    ///   budget runs out.
    /// - [`SearchError::Heap`] or [`SearchError::UnknownCell`] if the
    ///   frontier and the open set disagree, which indicates a bug.
    pub fn find_path(
        &self,
        grid: &PathGrid,
        start: Point,
        finish: Point,
        unit: Unit,
    ) -> Result<Option<Vec<usize>>, SearchError> {
        let start_idx = checked_index(grid, start)?;
        let finish_idx = checked_index(grid, finish)?;

        log::debug!(
            "searching {start} -> {finish} for size {} with {:?}",
            unit.size,
            unit.capabilities
        );

        let mut search = Search::new(grid, &self.config, unit, start_idx, finish_idx);
        let result = search.run();

        let stats = search.stats;
        match &result {
            Ok(Some(path)) => log::debug!(
                "path of {} cells found; expanded {}, pushed {}, requeued {}, stale {}, discovered {}",
                path.len(),
                stats.expanded,
                stats.pushed,
                stats.requeued,
                stats.stale,
                search.open.discovered()
            ),
            Ok(None) => log::debug!(
                "no path {start} -> {finish}; expanded {}, discovered {}",
                stats.expanded,
                search.open.discovered()
            ),
            Err(e) => log::warn!("search {start} -> {finish} aborted: {e}"),
        }
        result
    }
}

/// Compute a shortest path with the default configuration.
///
/// See [`AStar::find_path`] for the path convention and errors.
///
/// ```
/// use gridnav_core::{AreaMask, GridCell, PathGrid, Point};
/// use gridnav_paths::{find_path, Unit};
///
/// let mut grid = PathGrid::new(4, 1);
/// grid.fill(GridCell::new(1, AreaMask::bit(0)));
///
/// let unit = Unit::new(1, AreaMask::bit(0));
/// let path = find_path(&grid, Point::new(0, 0), Point::new(3, 0), unit).unwrap();
/// assert_eq!(path, Some(vec![0, 1, 2]));
/// ```
pub fn find_path(
    grid: &PathGrid,
    start: Point,
    finish: Point,
    unit: Unit,
) -> Result<Option<Vec<usize>>, SearchError> {
    AStar::default().find_path(grid, start, finish, unit)
}

fn checked_index(grid: &PathGrid, p: Point) -> Result<usize, SearchError> {
    grid.try_index(p).ok_or(SearchError::OutOfBounds {
        point: p,
        width: grid.width(),
        height: grid.height(),
    })
}

// ---------------------------------------------------------------------------
// Per-search state
// ---------------------------------------------------------------------------

/// State of one search. Dropped when the search returns, whichever way.
struct Search<'g> {
    grid: &'g PathGrid,
    heuristic: Heuristic,
    max_expansions: Option<usize>,
    unit: Unit,
    /// Where the unit stands; the search's target.
    start: Point,
    start_idx: usize,
    /// Where the unit wants to go; the search's origin.
    finish_idx: usize,
    open: OpenSet,
    frontier: BinaryHeap<CellRecord>,
    stats: SearchStats,
}

impl<'g> Search<'g> {
    fn new(
        grid: &'g PathGrid,
        config: &SearchConfig,
        unit: Unit,
        start_idx: usize,
        finish_idx: usize,
    ) -> Self {
        Self {
            grid,
            heuristic: config.heuristic(),
            max_expansions: config.max_expansions(),
            unit,
            start: grid.point(start_idx),
            start_idx,
            finish_idx,
            open: OpenSet::new(grid.len()),
            frontier: BinaryHeap::new(HeapKind::Min),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self) -> Result<Option<Vec<usize>>, SearchError> {
        self.seed();

        while let Some(current) = self.frontier.pop() {
            let cell = current.cell;
            let record = self
                .open
                .close(cell)
                .ok_or(SearchError::UnknownCell(cell))?;
            if record.expanded {
                log::trace!("cell {cell} popped again after expansion");
                self.stats.stale += 1;
                continue;
            }

            if cell == self.start_idx {
                return Ok(Some(self.reconstruct()));
            }

            if self.max_expansions == Some(self.stats.expanded) {
                return Err(SearchError::BudgetExhausted {
                    expanded: self.stats.expanded,
                });
            }

            log::trace!("expanding cell {cell} at distance {}", record.distance);
            self.expand(cell, record.distance)?;
            self.stats.expanded += 1;
        }

        Ok(None)
    }

    fn seed(&mut self) {
        let origin = self.grid.point(self.finish_idx);
        self.open.relax(self.finish_idx, 0.0, None);
        self.push(self.finish_idx, self.heuristic.estimate(origin, self.start));
    }

    fn push(&mut self, cell: usize, priority: f32) {
        self.frontier.push(CellRecord { priority, cell });
        self.stats.pushed += 1;
    }

    /// Relax the eight neighbours of `cell`, which is `distance` away from
    /// the origin.
    fn expand(&mut self, cell: usize, distance: f32) -> Result<(), SearchError> {
        let here = self.grid.point(cell);

        for (next, cost) in neighbors(here) {
            let Some(ni) = self.grid.try_index(next) else {
                continue;
            };
            let candidate = distance + cost;

            let known = self.open.get(ni);
            if let Some(rec) = known {
                if rec.expanded || candidate >= rec.distance {
                    continue;
                }
            }

            if !self
                .grid
                .cell_at(ni)
                .admits(self.unit.capabilities, self.unit.size)
            {
                continue;
            }

            if known.is_some() {
                self.frontier.remove(&CellRecord::probe(ni))?;
                self.stats.requeued += 1;
            }

            self.open.relax(ni, candidate, Some(cell));
            self.push(ni, candidate + self.heuristic.estimate(next, self.start));
        }

        Ok(())
    }

    /// Follow parent links from the start up to, not including, the
    /// origin.
    fn reconstruct(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut cell = Some(self.start_idx);
        while let Some(c) = cell {
            if c == self.finish_idx {
                break;
            }
            path.push(c);
            cell = self.open.get(c).and_then(|rec| rec.parent);
        }
        path
    }
}
