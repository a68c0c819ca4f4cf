//! Spatial data structures for cave maps
//!
//! This module contains the fixed-size cave grid and its cell type.

/// Grid storage, boundary sentinel and text parsing
pub mod grid;

pub use grid::{CaveGrid, Cell};
