//! Cave grid storage with wall-sentinel boundary handling
//!
//! The grid is a fixed-size rectangle of [`Cell`]s addressed as `(x, y)` with
//! `x` running along a row and `y` selecting the row. Storage is an ndarray
//! `Array2` of shape `(height, width)`, so iteration is row-major from the top.
//! Any coordinate outside the rectangle reads as [`Cell::Wall`], which lets
//! neighbor counting and obstacle stamping work without special edge cases.

use ndarray::Array2;

use crate::io::configuration::{OPEN_GLYPH, WALL_GLYPH};
use crate::io::error::{Result, invalid_grid};

/// State of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Traversable floor
    #[default]
    Open,
    /// Impassable rock
    Wall,
}

impl Cell {
    /// Check if the cell is a wall
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Export value of the cell (1 = wall, 0 = open)
    pub const fn as_bit(self) -> u8 {
        match self {
            Self::Wall => 1,
            Self::Open => 0,
        }
    }

    /// Parse an export value, rejecting anything other than 0 and 1
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Open),
            1 => Some(Self::Wall),
            _ => None,
        }
    }

    /// Character used when rendering the cell as text
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => WALL_GLYPH,
            Self::Open => OPEN_GLYPH,
        }
    }

    /// Parse a rendered character
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            WALL_GLYPH => Some(Self::Wall),
            OPEN_GLYPH => Some(Self::Open),
            _ => None,
        }
    }
}

/// Rectangular cave map with fixed dimensions
///
/// Dimensions are set at construction and never change. Writes outside the
/// grid are ignored and reads outside it return [`Cell::Wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaveGrid {
    /// Cell states indexed by `[y, x]`
    cells: Array2<Cell>,
}

impl CaveGrid {
    /// Create a grid of open cells
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Open)
    }

    /// Create a grid with every cell set to `cell`
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            cells: Array2::from_elem((height, width), cell),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check if a signed coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Read a cell, treating every off-grid coordinate as a wall
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if !self.contains(x, y) {
            return Cell::Wall;
        }
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(Cell::Wall)
    }

    /// Export value at a coordinate (1 = wall, 0 = open, off-grid = 1)
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        self.get(x, y).as_bit()
    }

    /// Write a cell, returning whether the coordinate was inside the grid
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        self.cells.get_mut([y, x]).is_some_and(|slot| {
            *slot = cell;
            true
        })
    }

    /// Check if a coordinate lies on the outer ring of the grid
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width() || y + 1 == self.height()
    }

    /// Total number of wall cells
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_wall()).count()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Cell>> {
        self.cells.outer_iter()
    }

    /// Grid as nested export values, one vector per row
    pub fn to_bit_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    /// Build a grid from nested export values
    ///
    /// # Errors
    ///
    /// Returns an error if rows have differing lengths or contain values
    /// other than 0 and 1
    pub fn from_bit_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid_grid(&format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &bit) in row.iter().enumerate() {
                let cell = Cell::from_bit(bit).ok_or_else(|| {
                    invalid_grid(&format!("cell ({x}, {y}) has value {bit}, expected 0 or 1"))
                })?;
                cells.push(cell);
            }
        }

        Self::from_cells(width, rows.len(), cells)
    }

    /// Parse a grid rendered with `#` for walls and `.` for open cells
    ///
    /// Blank lines and trailing whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if lines have differing lengths or contain other characters
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = Vec::with_capacity(width * lines.len());

        for (y, line) in lines.iter().enumerate() {
            let before = cells.len();
            for (x, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or_else(|| {
                    invalid_grid(&format!("unexpected character '{glyph}' at ({x}, {y})"))
                })?;
                cells.push(cell);
            }
            if cells.len() - before != width {
                return Err(invalid_grid(&format!(
                    "line {y} has {} cells, expected {width}",
                    cells.len() - before
                )));
            }
        }

        Self::from_cells(width, lines.len(), cells)
    }

    fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        Array2::from_shape_vec((height, width), cells)
            .map(|cells| Self { cells })
            .map_err(|e| invalid_grid(&e))
    }
}
