use std::cmp::Ordering;

use crate::heap::HeapItem;

/// Search bookkeeping for one discovered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenSetRecord {
    /// Best known cost from the cell the search started from.
    pub distance: f32,
    /// Cell this one was reached from; `None` for the search origin.
    pub parent: Option<usize>,
    /// Whether the cell has been popped and expanded (the closed set).
    pub expanded: bool,
}

/// Frontier entry: a cell index with its A* priority.
///
/// Ordered by `priority`, identified by `cell`, so a stale entry can be
/// removed with a probe that only knows the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRecord {
    pub priority: f32,
    pub cell: usize,
}

impl CellRecord {
    /// A record that matches any entry for `cell`, whatever its priority.
    #[inline]
    pub const fn probe(cell: usize) -> Self {
        Self {
            priority: 0.0,
            cell,
        }
    }
}

impl HeapItem for CellRecord {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority)
    }

    #[inline]
    fn same_item(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

/// Records for every cell discovered by one search, indexed by cell.
///
/// Slots start empty and are filled the first time a cell is reached; a
/// filled slot is never cleared while the search runs.
#[derive(Debug)]
pub(crate) struct OpenSet {
    records: Vec<Option<OpenSetRecord>>,
    discovered: usize,
}

impl OpenSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            records: vec![None; len],
            discovered: 0,
        }
    }

    /// Number of cells with a record.
    #[inline]
    pub(crate) fn discovered(&self) -> usize {
        self.discovered
    }

    #[inline]
    pub(crate) fn get(&self, cell: usize) -> Option<OpenSetRecord> {
        self.records[cell]
    }

    /// Record `distance` and `parent` for `cell`, creating the record if
    /// needed. The `expanded` flag is left as it was.
    pub(crate) fn relax(&mut self, cell: usize, distance: f32, parent: Option<usize>) {
        if let Some(rec) = self.records[cell].as_mut() {
            rec.distance = distance;
            rec.parent = parent;
            return;
        }
        self.records[cell] = Some(OpenSetRecord {
            distance,
            parent,
            expanded: false,
        });
        self.discovered += 1;
    }

    /// Mark `cell` as expanded and return its record as it was before.
    /// `None` if the cell was never discovered.
    pub(crate) fn close(&mut self, cell: usize) -> Option<OpenSetRecord> {
        let rec = self.records[cell].as_mut()?;
        let before = *rec;
        rec.expanded = true;
        Some(before)
    }
}
