//! Shared helpers for the gridnav demos: ASCII maps in, ASCII routes out.
//!
//! Map legend:
//!
//! | Char | Terrain | Clearance |
//! |---|---|---|
//! | `.` | land | 2 |
//! | `,` | land | 1 (a narrow passage) |
//! | `~` | water | 2 |
//! | `=` | land and water (a ford) | 2 |
//! | `#` | none | 0 (wall) |

use gridnav_core::{AreaMask, GridCell, PathGrid, Point};

pub const LAND: AreaMask = AreaMask::bit(0);
pub const WATER: AreaMask = AreaMask::bit(1);

/// Errors raised while reading an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown tile {ch:?} at {pos}")]
    UnknownTile { ch: char, pos: Point },
}

fn tile(ch: char) -> Option<GridCell> {
    let cell = match ch {
        '.' => GridCell::new(2, LAND),
        ',' => GridCell::new(1, LAND),
        '~' => GridCell::new(2, WATER),
        '=' => GridCell::new(2, LAND | WATER),
        '#' => GridCell::default(),
        _ => return None,
    };
    Some(cell)
}

/// Build a grid from an ASCII map. Blank lines around the map are ignored.
pub fn parse_map(map: &str) -> Result<PathGrid, MapError> {
    let rows: Vec<&str> = map
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    let expected = rows.first().ok_or(MapError::Empty)?.chars().count();

    let mut grid = PathGrid::new(expected, rows.len());
    for (y, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != expected {
            return Err(MapError::Ragged { row: y, len, expected });
        }
        for (x, ch) in row.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let cell = tile(ch).ok_or(MapError::UnknownTile { ch, pos })?;
            grid.set_cell(pos, cell);
        }
    }
    Ok(grid)
}

/// Draw `grid` with `path` marked as `*`, its start as `S` and the finish
/// as `F`.
pub fn render(grid: &PathGrid, path: &[usize], finish: Point) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height());
    for (p, cell) in grid.iter() {
        let idx = grid.index(p);
        let ch = if p == finish {
            'F'
        } else if path.first() == Some(&idx) {
            'S'
        } else if path.contains(&idx) {
            '*'
        } else if cell.area.is_empty() {
            '#'
        } else if cell.area.contains(LAND | WATER) {
            '='
        } else if cell.area.contains(WATER) {
            '~'
        } else if cell.clearance < 2 {
            ','
        } else {
            '.'
        };
        out.push(ch);
        if p.x as usize == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}
