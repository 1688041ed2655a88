//! **gridnav-core**: grid terrain model for clearance-aware pathfinding.
//!
//! This crate provides the data side of *gridnav*: geometry primitives, the
//! terrain capability mask, and a flat grid of cells that answers
//! passability queries for units of a given size and terrain capability.
//! Searches live in `gridnav-paths`.

pub mod area;
pub mod cell;
pub mod geom;
pub mod grid;

pub use area::AreaMask;
pub use cell::GridCell;
pub use geom::{Point, Range};
pub use grid::PathGrid;
