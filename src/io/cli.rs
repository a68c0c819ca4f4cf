//! Command-line interface for generating and exporting cave maps

use crate::algorithm::pipeline::{CaveGenerator, GenerationParameters};
use crate::io::configuration::{DEFAULT_OUTPUT_NAME, DEFAULT_PNG_SCALE, GIF_FRAME_DELAY_MS};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::export_grid_as_json;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::render_ascii;
use crate::io::settings::load_parameters;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "cavetown")]
#[command(
    author,
    version,
    about = "Generate cave maps with cellular-automaton smoothing"
)]
/// Command-line arguments for the cave generation tool
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Map width in cells
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Map height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Probability that an interior cell starts as a wall
    #[arg(short = 'p', long)]
    pub wall_probability: Option<f64>,

    /// Number of smoothing passes
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Number of obstacle placement attempts
    #[arg(short, long)]
    pub obstacles: Option<usize>,

    /// TOML file with generation parameters (flags take precedence)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of maps to generate with consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Directory receiving the generated files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// File stem for generated files
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Also write a PNG image of each map
    #[arg(long)]
    pub png: bool,

    /// Pixels per cell in PNG and GIF output
    #[arg(long, default_value_t = DEFAULT_PNG_SCALE)]
    pub scale: u32,

    /// Write an animated GIF of the generation stages
    #[arg(long)]
    pub visualize: bool,

    /// Print each map to stdout using '#' and '.'
    #[arg(long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum tracing level selected by the verbosity flags
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Combine defaults, the optional parameter file and explicit flags
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter file cannot be read or parsed, or
    /// the combined parameters fail validation
    pub fn resolve_parameters(&self) -> Result<GenerationParameters> {
        let mut params = match &self.config {
            Some(path) => load_parameters(path)?,
            None => GenerationParameters::default(),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(wall_probability) = self.wall_probability {
            params.wall_probability = wall_probability;
        }
        if let Some(iterations) = self.iterations {
            params.smooth_iterations = iterations;
        }
        if let Some(obstacles) = self.obstacles {
            params.obstacle_count = obstacles;
        }

        params.validate()?;
        Ok(params)
    }

    /// Output path for a map with the given seed and extension
    ///
    /// Single-map runs use the bare stem; batches append the seed.
    pub fn output_path(&self, seed: u64, extension: &str) -> PathBuf {
        let file_name = if self.count > 1 {
            format!("{}_{seed}.{extension}", self.name)
        } else {
            format!("{}.{extension}", self.name)
        };
        self.out_dir.join(file_name)
    }
}

/// Orchestrates generation and export of one or more maps
pub struct MapProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MapProcessor {
    /// Create a new map processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export maps according to CLI arguments
    ///
    /// Returns the paths of the JSON files written.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter resolution, generation or any export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one map must be generated",
            ));
        }

        let base = self.cli.resolve_parameters()?;
        let mut written = Vec::with_capacity(self.cli.count);

        for offset in 0..self.cli.count {
            let params = GenerationParameters {
                seed: base.seed.wrapping_add(offset as u64),
                ..base
            };
            written.push(self.process_map(params)?);
        }

        self.progress_manager.finish();
        Ok(written)
    }

    // Allow print for rendering maps to the terminal
    #[allow(clippy::print_stdout)]
    fn process_map(&mut self, params: GenerationParameters) -> Result<PathBuf> {
        self.progress_manager.start_map(params.seed);

        let mut generator = CaveGenerator::new(params)?;
        if self.cli.visualize {
            generator.enable_visualization();
        }
        let report = generator.run()?;
        info!(
            seed = params.seed,
            placed = report.obstacles.placed,
            skipped = report.obstacles.skipped,
            walls = report.walls_after_obstacles,
            "map generated"
        );

        let json_path = self.cli.output_path(params.seed, "json");
        export_grid_as_json(generator.grid(), &json_path)?;

        if self.cli.png {
            let png_path = self.cli.output_path(params.seed, "png");
            export_grid_as_png(generator.grid(), &png_path, self.cli.scale)?;
        }

        if let Some(viz) = &generator.visualization {
            let gif_path = self.cli.output_path(params.seed, "gif");
            viz.export_gif(&gif_path, GIF_FRAME_DELAY_MS, self.cli.scale)?;
        }

        if self.cli.print {
            print!("{}", render_ascii(generator.grid()));
        }

        self.progress_manager.complete_map();
        Ok(json_path)
    }
}
