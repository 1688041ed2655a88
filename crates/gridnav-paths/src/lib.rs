//! Clearance-aware A* pathfinding on uniform 8-connected grids.
//!
//! This crate searches a [`PathGrid`](gridnav_core::PathGrid) for the
//! shortest route a unit of a given size and terrain capability can take:
//!
//! - **A\*** shortest-path search ([`find_path`], [`AStar::find_path`])
//! - **Binary heap** frontier with removal by identity ([`BinaryHeap`])
//! - **Heuristics** for 8-way, 4-way and any-angle movement ([`Heuristic`])
//!
//! Every search allocates its own open set and frontier and drops them on
//! return, so a grid can be shared by concurrent searches.
//!
//! # Path convention
//!
//! A returned path lists flat cell indices from the start cell up to the
//! cell adjacent to the finish; the finish cell itself is not included.
//!
//! ```
//! use gridnav_core::{AreaMask, GridCell, PathGrid, Point};
//! use gridnav_paths::{find_path, Unit};
//!
//! let mut grid = PathGrid::new(6, 5);
//! grid.fill(GridCell::new(1, AreaMask::bit(0)));
//! for y in 0..=3 {
//!     grid.set_clearance(Point::new(3, y), 0);
//! }
//!
//! let unit = Unit::new(1, AreaMask::bit(0));
//! let path = find_path(&grid, Point::new(2, 0), Point::new(5, 4), unit)?;
//! assert_eq!(path, Some(vec![2, 8, 14, 20, 27, 28]));
//! # Ok::<(), gridnav_paths::SearchError>(())
//! ```

mod astar;
mod config;
mod error;
mod heap;
mod heuristic;
mod neighbors;
mod open_set;

pub use astar::{AStar, Unit, find_path};
pub use config::SearchConfig;
pub use error::{HeapError, SearchError};
pub use heap::{BinaryHeap, HeapItem, HeapKind};
pub use heuristic::{DIAGONAL_COST, Heuristic, STRAIGHT_COST, diagonal, euclid, manhattan};
pub use neighbors::{STEPS, Step, neighbors, path_cost, step_cost};
pub use open_set::{CellRecord, OpenSetRecord};
