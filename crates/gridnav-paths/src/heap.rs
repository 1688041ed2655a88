//! Array-backed binary heap with removal of arbitrary elements.
//!
//! Unlike [`std::collections::BinaryHeap`], this heap can locate and remove
//! any element by identity, which A* uses to re-queue a cell whose best
//! distance improved. Orientation (min or max) is chosen at construction.

use std::cmp::Ordering;

use crate::error::HeapError;

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapKind {
    /// Smallest priority at the root.
    #[default]
    Min,
    /// Largest priority at the root.
    Max,
}

impl HeapKind {
    /// The ordering a child must have against its parent to move above it.
    #[inline]
    const fn rising(self) -> Ordering {
        match self {
            HeapKind::Min => Ordering::Less,
            HeapKind::Max => Ordering::Greater,
        }
    }
}

/// An element that can be stored in a [`BinaryHeap`].
///
/// Order and identity are separate: two elements may share an identity
/// while carrying different priorities (a stale and a fresh entry for the
/// same cell), and [`BinaryHeap::remove`] matches on identity only.
pub trait HeapItem {
    /// Compare priorities.
    fn cmp_priority(&self, other: &Self) -> Ordering;

    /// Whether `self` and `other` denote the same item.
    fn same_item(&self, other: &Self) -> bool;
}

macro_rules! impl_heap_item_for_ints {
    ($($t:ty),*) => {
        $(
            impl HeapItem for $t {
                #[inline]
                fn cmp_priority(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn same_item(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_heap_item_for_ints!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A binary heap over a flat `Vec`.
///
/// Every parent outranks or ties both of its children under the heap's
/// [`HeapKind`]. Elements only move past neighbours they strictly outrank,
/// so equal priorities are never swapped.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    nodes: Vec<T>,
    kind: HeapKind,
}

impl<T: HeapItem> BinaryHeap<T> {
    /// Create an empty heap.
    pub fn new(kind: HeapKind) -> Self {
        Self {
            nodes: Vec::new(),
            kind,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(kind: HeapKind, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            kind,
        }
    }

    /// Build a heap from `items` in O(n), taking ownership of the vector.
    ///
    /// Every internal node is sifted down, from the last one back to the
    /// root; leaves are already valid one-element heaps.
    pub fn from_vec(kind: HeapKind, items: Vec<T>) -> Self {
        let mut heap = Self { nodes: items, kind };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// The heap's orientation.
    #[inline]
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// The root element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Insert `item`. O(log n).
    pub fn push(&mut self, item: T) {
        self.nodes.push(item);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the root element. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let root = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Remove the first element with the same identity as `item` and
    /// return it. O(n) to locate, O(log n) to repair.
    ///
    /// The last element is moved into the hole and may need to travel
    /// either towards the root or towards the leaves.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotFound`] if no element matches.
    pub fn remove(&mut self, item: &T) -> Result<T, HeapError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.same_item(item))
            .ok_or(HeapError::NotFound)?;
        let removed = self.nodes.swap_remove(pos);
        if pos < self.nodes.len() && self.sift_up(pos) == pos {
            self.sift_down(pos);
        }
        Ok(removed)
    }

    /// Iterate over the elements in storage (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    /// Consume the heap, returning its backing vector in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Whether `a` belongs strictly above `b`.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a.cmp_priority(b) == self.kind.rising()
    }

    /// Move the element at `i` up while it outranks its parent. Returns its
    /// final position.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(&self.nodes[i], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
        i
    }

    /// Move the element at `i` down while a child outranks it. Returns its
    /// final position.
    fn sift_down(&mut self, mut i: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.outranks(&self.nodes[right], &self.nodes[left]) {
                right
            } else {
                left
            };
            if !self.outranks(&self.nodes[child], &self.nodes[i]) {
                break;
            }
            self.nodes.swap(i, child);
            i = child;
        }
        i
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| !self.outranks(&self.nodes[i], &self.nodes[(i - 1) / 2]))
    }
}

impl<T: HeapItem> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new(HeapKind::default())
    }
}

impl<T: HeapItem> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
