//! Algorithm constants and runtime configuration defaults

// Default generation parameters, matching the reference 50x25 demo map
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default map width in cells
pub const DEFAULT_WIDTH: usize = 50;
/// Default map height in cells
pub const DEFAULT_HEIGHT: usize = 25;
/// Probability that an interior cell starts as a wall
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.45;
/// Number of smoothing generations applied after initialization
pub const DEFAULT_SMOOTH_ITERATIONS: usize = 5;
/// Number of obstacle draws attempted after smoothing
pub const DEFAULT_OBSTACLE_COUNT: usize = 8;

// Majority rule thresholds. A count strictly between them leaves the cell unchanged
/// Wall neighbor count at or above which a cell becomes a wall
pub const WALL_NEIGHBOR_THRESHOLD: usize = 5;
/// Wall neighbor count at or below which a cell becomes open
pub const OPEN_NEIGHBOR_THRESHOLD: usize = 3;
/// Chebyshev radius of the smoothing neighborhood
pub const NEIGHBOR_RANGE: i32 = 1;

/// Distance from the grid edge to the nearest permitted obstacle center
pub const OBSTACLE_MARGIN: usize = 5;
/// Smallest obstacle disc radius
pub const OBSTACLE_MIN_RADIUS: usize = 1;
/// Largest obstacle disc radius
pub const OBSTACLE_MAX_RADIUS: usize = 3;
/// Smallest width and height for which obstacles can be placed
pub const MIN_OBSTACLE_GRID_DIMENSION: usize = 2 * OBSTACLE_MARGIN;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// File stem used for generated maps
pub const DEFAULT_OUTPUT_NAME: &str = "cave";
/// Pixels per cell in PNG and GIF output
pub const DEFAULT_PNG_SCALE: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Multiplier applied to the delay of the final GIF frame
pub const FINAL_FRAME_HOLD: u32 = 5;

// Rendering palette
/// Glyph used for wall cells in text output
pub const WALL_GLYPH: char = '#';
/// Glyph used for open cells in text output
pub const OPEN_GLYPH: char = '.';
/// RGBA color used for wall cells in image output
pub const WALL_COLOR: [u8; 4] = [40, 36, 48, 255];
/// RGBA color used for open cells in image output
pub const OPEN_COLOR: [u8; 4] = [214, 200, 170, 255];
