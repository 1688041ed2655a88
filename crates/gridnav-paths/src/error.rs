//! Error types for heap and search operations.
//!
//! "No path" is not an error: [`find_path`](crate::find_path) reports it as
//! `Ok(None)`. The variants here signal misuse or internal inconsistency.

use gridnav_core::Point;

/// Errors raised by [`BinaryHeap`](crate::BinaryHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HeapError {
    /// [`remove`](crate::BinaryHeap::remove) was asked for an element that
    /// was never inserted or has already been removed.
    #[error("item is not present in the heap")]
    NotFound,
}

/// Errors raised by an A* search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The start or finish point lies outside the grid.
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// The frontier and the open set disagree about which cells are queued.
    #[error("frontier out of sync with open set: {0}")]
    Heap(#[from] HeapError),

    /// The frontier yielded a cell the open set never recorded.
    #[error("frontier yielded cell {0} that the open set never recorded")]
    UnknownCell(usize),

    /// The configured expansion budget ran out before the search finished.
    #[error("search budget exhausted after expanding {expanded} cells")]
    BudgetExhausted {
        /// Number of cells expanded before giving up.
        expanded: usize,
    },
}

impl SearchError {
    /// Returns `true` if the search stopped on its expansion budget.
    #[must_use]
    pub const fn is_budget_exhausted(&self) -> bool {
        matches!(self, Self::BudgetExhausted { .. })
    }
}
