//! Text rendering of cave maps, one character per cell

use std::fmt;

use crate::spatial::CaveGrid;

impl fmt::Display for CaveGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in &row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the grid with `#` for walls and `.` for open cells
///
/// Every row, including the last, ends with a newline.
pub fn render_ascii(grid: &CaveGrid) -> String {
    grid.to_string()
}
