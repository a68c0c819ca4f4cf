//! Input, output and configuration
//!
//! Everything outside the generation stages lives here: constants, errors,
//! parameter files, exports and the command-line front end.

/// Command-line parsing and batch map processing
pub mod cli;
/// Default parameters, rule thresholds and output constants
pub mod configuration;
/// Error type and path context helpers
pub mod error;
/// JSON grid export and import
pub mod export;
/// PNG rendering of finished maps
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// Text rendering with `#` and `.`
pub mod render;
/// TOML parameter files
pub mod settings;
/// Stage snapshots and GIF export
pub mod visualization;
