//! Frame capture and GIF generation for generation stage visualization

use std::fmt;
use std::path::Path;

use image::{Delay, Frame};
use tracing::trace;

use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{CaveError, Result, WithPath, ensure_parent_dir};
use crate::io::image::render_image;
use crate::spatial::CaveGrid;

/// Point in the pipeline at which a frame was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Border walls and random noise are in place
    Initialized,
    /// A smoothing generation has completed
    Smoothed {
        /// 1-based generation number
        iteration: usize,
    },
    /// Obstacle discs have been stamped
    ObstaclesPlaced,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
            Self::Smoothed { iteration } => write!(f, "smoothing pass {iteration}"),
            Self::ObstaclesPlaced => write!(f, "obstacles placed"),
        }
    }
}

/// Grid snapshot taken at a pipeline stage
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// Stage the snapshot belongs to
    pub stage: GenerationStage,
    /// Grid contents at that stage
    pub grid: CaveGrid,
}

/// Captures grid snapshots for visualization
///
/// Records the grid after initialization, after every smoothing pass and
/// after obstacle placement so the run can be replayed as an animation
#[derive(Debug, Clone, Default)]
pub struct VisualizationCapture {
    pub(crate) frames: Vec<CapturedFrame>,
}

impl VisualizationCapture {
    /// Create an empty capture sized for the expected number of frames
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Records a snapshot of the grid at the given stage
    pub fn record(&mut self, stage: GenerationStage, grid: &CaveGrid) {
        trace!(%stage, walls = grid.wall_count(), "stage captured");
        self.frames.push(CapturedFrame {
            stage,
            grid: grid.clone(),
        });
    }

    /// Returns all recorded snapshots
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Returns the total number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured snapshots as an animated GIF
    ///
    /// Every snapshot becomes one frame shown for `frame_delay_ms`. The last
    /// frame is held longer so the finished map stays visible before looping.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - `scale` is zero or too large for the grid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32, scale: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(crate::io::error::invalid_parameter(
                "visualization",
                &"empty",
                &"No generation stages captured for visualization",
            ));
        }

        let last = self.frames.len() - 1;
        let mut frames = Vec::with_capacity(self.frames.len());
        for (index, captured) in self.frames.iter().enumerate() {
            let delay = if index == last {
                frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD)
            } else {
                frame_delay_ms
            };
            frames.push(Frame::from_parts(
                render_image(&captured.grid, scale)?,
                0,
                0,
                Delay::from_numer_denom_ms(delay, 1),
            ));
        }

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| CaveError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
