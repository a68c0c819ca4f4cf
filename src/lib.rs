//! Cave map generation using cellular-automaton smoothing of seeded noise
//!
//! A map starts as random wall noise inside a solid border, is smoothed by a
//! majority-rule cellular automaton and finally receives circular wall
//! obstacles. A seed fully determines the result.

#![forbid(unsafe_code)]

/// Generation stages: noise fill, smoothing, obstacle carving and the pipeline
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cave grid storage and cell states
pub mod spatial;

pub use algorithm::pipeline::{CaveGenerator, GenerationParameters, generate};
pub use io::error::{CaveError, Result};
pub use spatial::{CaveGrid, Cell};
