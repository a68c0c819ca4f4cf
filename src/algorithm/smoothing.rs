//! Majority-rule cellular automaton smoothing
//!
//! Each generation reads a frozen snapshot of the grid and writes into a
//! freshly cloned buffer, so no cell sees a neighbor that was already updated
//! in the same pass. The outer ring is never rewritten.

use tracing::trace;

use crate::io::configuration::{NEIGHBOR_RANGE, OPEN_NEIGHBOR_THRESHOLD, WALL_NEIGHBOR_THRESHOLD};
use crate::spatial::{CaveGrid, Cell};

/// Count wall cells in the Chebyshev neighborhood of radius `range`
///
/// The center cell is excluded. Positions outside the grid count as walls,
/// so only the part of the window that overlaps the grid is visited. A
/// negative `range` is an empty neighborhood.
pub fn count_neighbor_walls(grid: &CaveGrid, x: i32, y: i32, range: i32) -> usize {
    if range < 0 {
        return 0;
    }
    let side = 2 * u64::from(range.unsigned_abs()) + 1;
    let window = (side * side - 1) as usize;

    let (x, y, range) = (i64::from(x), i64::from(y), i64::from(range));
    let (width, height) = (grid.width() as i64, grid.height() as i64);
    let mut open = 0;
    for ny in (y - range).max(0)..=(y + range).min(height - 1) {
        for nx in (x - range).max(0)..=(x + range).min(width - 1) {
            if (nx, ny) != (x, y) && !grid.get(nx as i32, ny as i32).is_wall() {
                open += 1;
            }
        }
    }
    window - open
}

/// Next state of a cell given its wall neighbor count
///
/// Counts between the two thresholds keep the current state.
pub const fn apply_majority_rule(current: Cell, wall_neighbors: usize) -> Cell {
    if wall_neighbors >= WALL_NEIGHBOR_THRESHOLD {
        Cell::Wall
    } else if wall_neighbors <= OPEN_NEIGHBOR_THRESHOLD {
        Cell::Open
    } else {
        current
    }
}

/// Run one smoothing generation and return the number of cells that changed
pub fn smooth_step(grid: &mut CaveGrid) -> usize {
    let mut next = grid.clone();
    let mut changed = 0;

    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let current = grid.get(x as i32, y as i32);
            let walls = count_neighbor_walls(grid, x as i32, y as i32, NEIGHBOR_RANGE);
            let updated = apply_majority_rule(current, walls);
            if updated != current {
                next.set(x, y, updated);
                changed += 1;
            }
        }
    }

    *grid = next;
    changed
}

/// Apply `iterations` smoothing generations
pub fn smooth(grid: &mut CaveGrid, iterations: usize) {
    smooth_observed(grid, iterations, |_, _| {});
}

/// Apply `iterations` smoothing generations, calling `observer` after each one
///
/// The observer receives the 1-based generation number and the updated grid.
pub fn smooth_observed<F>(grid: &mut CaveGrid, iterations: usize, mut observer: F)
where
    F: FnMut(usize, &CaveGrid),
{
    for iteration in 1..=iterations {
        let changed = smooth_step(grid);
        trace!(iteration, changed, walls = grid.wall_count(), "smoothing pass");
        observer(iteration, grid);
    }
}
