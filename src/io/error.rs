//! Error types and context management for generation and export operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all cave generation operations
#[derive(Debug)]
pub enum CaveError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Imported grid data is malformed
    ///
    /// Occurs when a text or JSON grid has ragged rows, a row count that
    /// disagrees with the declared height, or cell values other than 0 and 1
    InvalidGridData {
        /// Description of what's wrong with the grid data
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode a PNG or GIF image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Path of the document being written or read
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Parameter file could not be parsed
    ConfigParse {
        /// Path to the parameter file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

impl fmt::Display for CaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGridData { reason } => {
                write!(f, "Invalid grid data: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse parameter file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidGridData { .. } => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, CaveError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`CaveError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CaveError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CaveError {
    CaveError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid data error
pub fn invalid_grid(reason: &impl ToString) -> CaveError {
    CaveError::InvalidGridData {
        reason: reason.to_string(),
    }
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns [`CaveError::FileSystem`] if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")
        }
        _ => Ok(()),
    }
}
