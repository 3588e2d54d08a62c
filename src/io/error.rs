//! Error types for configuration, generation setup and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
///
/// Local contradictions during generation are not errors; a blocked cell is
/// a normal outcome reported as an empty entry in the output.
#[derive(Debug)]
pub enum AlgorithmError {
    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A pre-collapsed cell lies outside the grid
    PrecollapsedOutOfBounds {
        /// Column of the placement
        x: usize,
        /// Row of the placement
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// A tile id does not name any expanded tile variant
    UnknownTileId {
        /// The unrecognized id
        id: String,
    },

    /// Placement text could not be parsed
    InvalidPlacement {
        /// The text as given
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Tile configuration file could not be parsed
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Failed to save a rendered chunk to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PrecollapsedOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pre-collapsed cell ({x}, {y}) is outside the {width}x{height} grid"
                )
            }
            Self::UnknownTileId { id } => {
                write!(f, "Unknown tile id '{id}'")
            }
            Self::InvalidPlacement { input, reason } => {
                write!(f, "Invalid placement '{input}': {reason}")
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse tile configuration '{}': {source}",
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid placement error
pub fn invalid_placement(input: &str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidPlacement {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
