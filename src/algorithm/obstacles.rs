//! Best-effort placement of circular wall obstacles

use tracing::trace;

use crate::algorithm::random::RandomSource;
use crate::io::configuration::{
    MIN_OBSTACLE_GRID_DIMENSION, OBSTACLE_MARGIN, OBSTACLE_MAX_RADIUS, OBSTACLE_MIN_RADIUS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{CaveGrid, Cell};

/// Outcome of an obstacle placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObstacleReport {
    /// Number of draws attempted
    pub requested: usize,
    /// Draws whose center was open and produced a disc
    pub placed: usize,
    /// Draws whose center was already a wall
    pub skipped: usize,
}

/// Stamp `count` filled wall discs at random interior positions
///
/// Each draw picks a center in `[5, width - 5] x [5, height - 5]` and a radius
/// in `1..=3`, in that order. A draw landing on a wall is skipped without a
/// replacement draw, so fewer than `count` discs may be placed.
///
/// # Errors
///
/// Returns an error if `count` is non-zero and the grid is narrower or
/// shorter than ten cells, which leaves no valid center positions
pub fn add_obstacles(
    grid: &mut CaveGrid,
    rng: &mut RandomSource,
    count: usize,
) -> Result<ObstacleReport> {
    let mut report = ObstacleReport {
        requested: count,
        ..ObstacleReport::default()
    };
    if count == 0 {
        return Ok(report);
    }

    let (width, height) = (grid.width(), grid.height());
    if width < MIN_OBSTACLE_GRID_DIMENSION || height < MIN_OBSTACLE_GRID_DIMENSION {
        return Err(invalid_parameter(
            "obstacle_count",
            &count,
            &format!(
                "obstacles need a grid of at least {MIN_OBSTACLE_GRID_DIMENSION}x{MIN_OBSTACLE_GRID_DIMENSION}, got {width}x{height}"
            ),
        ));
    }

    for _ in 0..count {
        let cx = rng.next_in_range(OBSTACLE_MARGIN, width - OBSTACLE_MARGIN);
        let cy = rng.next_in_range(OBSTACLE_MARGIN, height - OBSTACLE_MARGIN);
        let radius = rng.next_in_range(OBSTACLE_MIN_RADIUS, OBSTACLE_MAX_RADIUS);

        if grid.get(cx as i32, cy as i32).is_wall() {
            trace!(cx, cy, radius, "obstacle skipped, center is a wall");
            report.skipped += 1;
            continue;
        }

        stamp_disc(grid, cx as i32, cy as i32, radius as i32);
        trace!(cx, cy, radius, "obstacle placed");
        report.placed += 1;
    }

    Ok(report)
}

/// Set every in-bounds cell within `radius` of `(cx, cy)` to a wall
///
/// Offsets satisfy `dx² + dy² <= radius²`; off-grid positions are dropped.
/// Only offsets that can reach the grid are visited.
pub fn stamp_disc(grid: &mut CaveGrid, cx: i32, cy: i32, radius: i32) {
    if radius < 0 {
        return;
    }
    let radius_squared = i64::from(radius) * i64::from(radius);
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let (width, height) = (grid.width() as i64, grid.height() as i64);

    let rows = (cy - i64::from(radius)).max(0)..=(cy + i64::from(radius)).min(height - 1);
    let columns = (cx - i64::from(radius)).max(0)..=(cx + i64::from(radius)).min(width - 1);
    for y in rows {
        for x in columns.clone() {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius_squared {
                grid.set(x as usize, y as usize, Cell::Wall);
            }
        }
    }
}
