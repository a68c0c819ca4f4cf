//! JSON export and import of finished cave maps
//!
//! The document carries the map size and a row-major `grid` of 0 (open) and
//! 1 (wall) values, one array per row from the top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::error::{CaveError, Result, WithPath, ensure_parent_dir, invalid_grid};
use crate::spatial::CaveGrid;

/// Serializable form of a cave map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExport {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Cell values, `height` rows of `width` entries
    pub grid: Vec<Vec<u8>>,
}

impl From<&CaveGrid> for GridExport {
    fn from(grid: &CaveGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            grid: grid.to_bit_rows(),
        }
    }
}

impl GridExport {
    /// Convert back into a grid, checking the declared dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the row count or any row length disagrees with the
    /// declared size, or a cell value is not 0 or 1
    pub fn into_grid(self) -> Result<CaveGrid> {
        if self.grid.len() != self.height {
            return Err(invalid_grid(&format!(
                "declared height {} but found {} rows",
                self.height,
                self.grid.len()
            )));
        }
        if let Some((y, row)) = self
            .grid
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.width)
        {
            return Err(invalid_grid(&format!(
                "declared width {} but row {y} has {} cells",
                self.width,
                row.len()
            )));
        }

        let grid = CaveGrid::from_bit_rows(&self.grid)?;
        if grid.width() == self.width {
            Ok(grid)
        } else {
            // An empty row list cannot carry a width
            Ok(CaveGrid::new(self.width, self.height))
        }
    }
}

/// Serialize the grid as a pretty-printed JSON document
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn grid_to_json(grid: &CaveGrid) -> Result<String> {
    serde_json::to_string_pretty(&GridExport::from(grid)).map_err(|e| CaveError::Serialization {
        path: PathBuf::from("<memory>"),
        source: e,
    })
}

/// Parse a grid from a JSON document
///
/// # Errors
///
/// Returns an error if the document is not valid JSON of the export shape or
/// its contents fail the dimension checks
pub fn grid_from_json(json: &str) -> Result<CaveGrid> {
    let export: GridExport =
        serde_json::from_str(json).map_err(|e| CaveError::Serialization {
            path: PathBuf::from("<memory>"),
            source: e,
        })?;
    export.into_grid()
}

/// Write the grid to `output_path` as JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn export_grid_as_json(grid: &CaveGrid, output_path: &Path) -> Result<()> {
    let mut json = grid_to_json(grid)?;
    json.push('\n');

    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, json).with_path(output_path, "write export")
}

/// Read a grid previously written by [`export_grid_as_json`]
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid grid
pub fn load_grid_from_json(input_path: &Path) -> Result<CaveGrid> {
    let json = std::fs::read_to_string(input_path).with_path(input_path, "read export")?;
    grid_from_json(&json).map_err(|e| match e {
        CaveError::Serialization { source, .. } => CaveError::Serialization {
            path: input_path.to_path_buf(),
            source,
        },
        other => other,
    })
}
