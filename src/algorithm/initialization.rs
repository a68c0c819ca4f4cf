//! Random noise fill with a solid wall border

use tracing::debug;

use crate::algorithm::random::RandomSource;
use crate::spatial::{CaveGrid, Cell};

/// Fill the grid with boundary walls and random interior noise
///
/// Border cells are always walls and consume no random draws. Each interior
/// cell becomes a wall when its draw falls below `wall_probability`. Cells are
/// visited row by row from the top, which fixes the draw order for a seed.
pub fn initialize(grid: &mut CaveGrid, rng: &mut RandomSource, wall_probability: f64) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = if grid.is_border(x, y) || rng.next_unit() < wall_probability {
                Cell::Wall
            } else {
                Cell::Open
            };
            grid.set(x, y, cell);
        }
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        wall_probability,
        walls = grid.wall_count(),
        "initialized cave noise"
    );
}
