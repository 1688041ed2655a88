//! The [`GridCell`] type: static terrain data for one grid position.

use crate::area::AreaMask;

/// Terrain data of a single cell.
///
/// The default cell has zero clearance and no terrain bits, so it is
/// impassable for every unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Free space around the cell, compared against a unit's size.
    pub clearance: u32,
    /// Terrain types this cell belongs to.
    pub area: AreaMask,
}

impl GridCell {
    /// Create a cell from its clearance and terrain mask.
    #[inline]
    pub const fn new(clearance: u32, area: AreaMask) -> Self {
        Self { clearance, area }
    }

    /// Set the clearance (builder).
    #[inline]
    pub const fn with_clearance(mut self, clearance: u32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Set the terrain mask (builder).
    #[inline]
    pub const fn with_area(mut self, area: AreaMask) -> Self {
        self.area = area;
        self
    }

    /// Whether a unit of `size` with `capabilities` may stand on this cell.
    ///
    /// Terrain compatibility (a shared bit) and clearance are independent
    /// filters; both must hold.
    #[inline]
    pub const fn admits(self, capabilities: AreaMask, size: u32) -> bool {
        self.area.intersects(capabilities) && self.clearance >= size
    }
}
