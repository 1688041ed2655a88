//! Terrain capability bitmask: [`AreaMask`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// 64-bit set of terrain types.
///
/// A cell stores the terrain types it belongs to; a unit stores the terrain
/// types it can traverse. The two are compatible when they share at least
/// one bit. Bit meanings are chosen by the caller.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaMask(pub u64);

impl AreaMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u64::MAX);

    /// Mask with only bit `n` set.
    ///
    /// # Panics
    ///
    /// Panics if `n >= 64`.
    #[inline]
    pub const fn bit(n: u32) -> Self {
        assert!(n < 64, "area bit out of range");
        Self(1 << n)
    }

    /// Whether the two masks share at least one bit.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for AreaMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaMask({:#x})", self.0)
    }
}

impl From<u64> for AreaMask {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl BitOr for AreaMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AreaMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AreaMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND: AreaMask = AreaMask::bit(0);
    const SEA: AreaMask = AreaMask::bit(1);
    const MOUNTAIN: AreaMask = AreaMask::bit(2);

    #[test]
    fn intersects_needs_a_shared_bit() {
        assert!(LAND.intersects(LAND | SEA));
        assert!(!LAND.intersects(SEA | MOUNTAIN));
        assert!(!AreaMask::NONE.intersects(AreaMask::ALL));
        assert!(AreaMask::bit(63).intersects(AreaMask::ALL));
    }

    #[test]
    fn contains_and_ops() {
        let mut m = LAND;
        m |= SEA;
        assert!(m.contains(LAND));
        assert!(!m.contains(LAND | MOUNTAIN));
        assert_eq!(m & SEA, SEA);
        assert!((m & MOUNTAIN).is_empty());
        assert_eq!(format!("{:?}", m), "AreaMask(0x3)");
    }
}
