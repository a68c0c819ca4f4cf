//! Generation parameter files in TOML form
//!
//! Any subset of the [`GenerationParameters`] fields may be given; missing
//! fields keep their defaults and unknown keys are rejected.
//!
//! ```toml
//! width = 80
//! height = 40
//! seed = 7
//! wall_probability = 0.48
//! ```

use std::path::Path;

use crate::algorithm::pipeline::GenerationParameters;
use crate::io::error::{CaveError, Result, WithPath};

/// Parse parameters from TOML text, naming `origin` in any error
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or holds unknown or
/// mistyped fields
pub fn parse_parameters(text: &str, origin: &Path) -> Result<GenerationParameters> {
    toml::from_str(text).map_err(|e| CaveError::ConfigParse {
        path: origin.to_path_buf(),
        source: e,
    })
}

/// Load parameters from a TOML file
///
/// The values are not validated here; callers validate after applying any
/// command-line overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_parameters(path: &Path) -> Result<GenerationParameters> {
    let text = std::fs::read_to_string(path).with_path(path, "read parameters")?;
    parse_parameters(&text, path)
}
