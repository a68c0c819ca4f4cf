//! PNG export of finished cave maps

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{OPEN_COLOR, WALL_COLOR};
use crate::io::error::{CaveError, Result, ensure_parent_dir, invalid_parameter};
use crate::spatial::CaveGrid;

/// Rasterize the grid with each cell drawn as a `scale` x `scale` square
///
/// # Errors
///
/// Returns an error if `scale` is zero or the image dimensions overflow `u32`
pub fn render_image(grid: &CaveGrid, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &"must be at least one pixel per cell",
        ));
    }

    let pixel_width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(scale));
    let pixel_height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(scale));
    let (Some(pixel_width), Some(pixel_height)) = (pixel_width, pixel_height) else {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!(
                "a {}x{} grid at this scale exceeds the image size limit",
                grid.width(),
                grid.height()
            ),
        ));
    };

    Ok(RgbaImage::from_fn(pixel_width, pixel_height, |px, py| {
        let cell = grid.get((px / scale) as i32, (py / scale) as i32);
        if cell.is_wall() {
            Rgba(WALL_COLOR)
        } else {
            Rgba(OPEN_COLOR)
        }
    }))
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or too large for the grid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &CaveGrid, output_path: &Path, scale: u32) -> Result<()> {
    let img = render_image(grid, scale)?;

    ensure_parent_dir(output_path)?;

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| CaveError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
