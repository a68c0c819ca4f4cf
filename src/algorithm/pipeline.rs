//! Generation pipeline composing initialization, smoothing and obstacle carving

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::initialization::initialize;
use crate::algorithm::obstacles::{ObstacleReport, add_obstacles};
use crate::algorithm::random::RandomSource;
use crate::algorithm::smoothing::smooth_observed;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OBSTACLE_COUNT, DEFAULT_SEED, DEFAULT_SMOOTH_ITERATIONS,
    DEFAULT_WALL_PROBABILITY, DEFAULT_WIDTH, MAX_GRID_DIMENSION, MIN_OBSTACLE_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::visualization::{GenerationStage, VisualizationCapture};
use crate::spatial::CaveGrid;

/// Parameters controlling a single generation run
///
/// Missing fields in a parameter file fall back to the defaults in
/// [`crate::io::configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParameters {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Seed for the shared random source
    pub seed: u64,
    /// Probability that an interior cell starts as a wall
    pub wall_probability: f64,
    /// Number of smoothing generations
    pub smooth_iterations: usize,
    /// Number of obstacle draws
    pub obstacle_count: usize,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            smooth_iterations: DEFAULT_SMOOTH_ITERATIONS,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
        }
    }
}

impl GenerationParameters {
    /// Parameters for the given size and seed with default tuning
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    /// Check parameter preconditions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero or exceeds the maximum grid dimension
    /// - The wall probability is not a finite value in `[0, 1]`
    /// - Obstacles are requested on a grid smaller than 10x10
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("exceeds maximum grid dimension {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(invalid_parameter(
                "wall_probability",
                &self.wall_probability,
                &"must lie in [0, 1]",
            ));
        }

        if self.obstacle_count > 0
            && (self.width < MIN_OBSTACLE_GRID_DIMENSION
                || self.height < MIN_OBSTACLE_GRID_DIMENSION)
        {
            return Err(invalid_parameter(
                "obstacle_count",
                &self.obstacle_count,
                &format!(
                    "obstacles need a grid of at least {MIN_OBSTACLE_GRID_DIMENSION}x{MIN_OBSTACLE_GRID_DIMENSION}"
                ),
            ));
        }

        Ok(())
    }
}

/// Wall counts and obstacle outcome of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Wall cells after the noise fill
    pub walls_after_initialization: usize,
    /// Wall cells after the last smoothing generation
    pub walls_after_smoothing: usize,
    /// Wall cells in the finished map
    pub walls_after_obstacles: usize,
    /// Obstacle placement outcome
    pub obstacles: ObstacleReport,
}

/// Cave generator owning the grid and random source for one run
///
/// Stages always run in the order initialize, smooth, carve obstacles, all
/// drawing from the same random source.
pub struct CaveGenerator {
    parameters: GenerationParameters,
    grid: CaveGrid,
    rng: RandomSource,
    /// Optional stage capture for GIF export
    pub visualization: Option<VisualizationCapture>,
}

impl CaveGenerator {
    /// Create a generator after validating the parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation. No grid is
    /// allocated in that case.
    pub fn new(parameters: GenerationParameters) -> Result<Self> {
        parameters.validate()?;

        Ok(Self {
            parameters,
            grid: CaveGrid::new(parameters.width, parameters.height),
            rng: RandomSource::new(parameters.seed),
            visualization: None,
        })
    }

    /// Parameters this generator was built with
    pub const fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    /// Access the current grid
    pub const fn grid(&self) -> &CaveGrid {
        &self.grid
    }

    /// Consume the generator and return its grid
    pub fn into_grid(self) -> CaveGrid {
        self.grid
    }

    /// Enable snapshot recording of every pipeline stage
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(
            self.parameters.smooth_iterations + 2,
        ));
    }

    /// Run the full pipeline on the owned grid
    ///
    /// # Errors
    ///
    /// Returns an error if obstacle placement rejects the grid size
    pub fn run(&mut self) -> Result<GenerationReport> {
        let params = self.parameters;

        initialize(&mut self.grid, &mut self.rng, params.wall_probability);
        let walls_after_initialization = self.grid.wall_count();
        self.capture(GenerationStage::Initialized);

        let visualization = &mut self.visualization;
        smooth_observed(&mut self.grid, params.smooth_iterations, |iteration, grid| {
            if let Some(viz) = visualization.as_mut() {
                viz.record(GenerationStage::Smoothed { iteration }, grid);
            }
        });
        let walls_after_smoothing = self.grid.wall_count();
        debug!(
            iterations = params.smooth_iterations,
            walls = walls_after_smoothing,
            "smoothing complete"
        );

        let obstacles = add_obstacles(&mut self.grid, &mut self.rng, params.obstacle_count)?;
        let walls_after_obstacles = self.grid.wall_count();
        self.capture(GenerationStage::ObstaclesPlaced);
        debug!(
            requested = obstacles.requested,
            placed = obstacles.placed,
            skipped = obstacles.skipped,
            walls = walls_after_obstacles,
            "obstacles carved"
        );

        Ok(GenerationReport {
            walls_after_initialization,
            walls_after_smoothing,
            walls_after_obstacles,
            obstacles,
        })
    }

    fn capture(&mut self, stage: GenerationStage) {
        if let Some(viz) = self.visualization.as_mut() {
            viz.record(stage, &self.grid);
        }
    }
}

/// Generate a finished cave map
///
/// # Errors
///
/// Returns an error if the parameters fail validation
pub fn generate(parameters: &GenerationParameters) -> Result<CaveGrid> {
    let mut generator = CaveGenerator::new(*parameters)?;
    generator.run()?;
    Ok(generator.into_grid())
}
