//! Error types and context management for tiling operations

use crate::spatial::coordinate::Coordinate;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// A search or path buffer could not grow
    ///
    /// Fatal for the whole run: no partial tiling is reported.
    ResourceExhausted {
        /// Buffer whose growth failed
        operation: &'static str,
        /// Number of elements the buffer needed to hold
        requested: usize,
    },

    /// Input line contains a character outside digits and blanks
    InvalidCharacter {
        /// 1-based input line number
        line: usize,
        /// The offending character
        character: char,
    },

    /// Input coordinate does not fit into 32 bits
    CoordinateOverflow {
        /// 1-based input line number
        line: usize,
    },

    /// Input line does not hold exactly two coordinates
    WrongArgumentCount {
        /// 1-based input line number
        line: usize,
        /// Number of coordinates found on the line
        found: usize,
    },

    /// The same tile appears more than once in the input
    DuplicateTile {
        /// Coordinate given twice
        coordinate: Coordinate,
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

    /// Writing the tiling to its destination failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the rendered tiling to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted {
                operation,
                requested,
            } => {
                write!(
                    f,
                    "Not enough memory available: {operation} could not grow to {requested} entries"
                )
            }
            Self::InvalidCharacter { line, character } => {
                write!(f, "Line {line}: '{}' is not an allowed character", character.escape_default())
            }
            Self::CoordinateOverflow { line } => {
                write!(f, "Line {line}: coordinate is not below 2^32")
            }
            Self::WrongArgumentCount { line, found } => {
                write!(f, "Line {line}: expected exactly 2 coordinates, found {found}")
            }
            Self::DuplicateTile { coordinate } => {
                write!(f, "Tile {coordinate} is given more than once")
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
            Self::Output { source } => {
                write!(f, "Failed to write tiling: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Enriches parser errors with the input line they came from
pub trait WithContext<T> {
    /// Stamp a 1-based line number into line-aware errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line number applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_line(self, line_number: usize) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TilingError::InvalidCharacter { line, .. }
                | TilingError::CoordinateOverflow { line }
                | TilingError::WrongArgumentCount { line, .. } => *line = line_number,
                _ => {}
            }
            error
        })
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create a resource exhaustion error for a buffer that failed to grow
pub const fn resource_exhausted(operation: &'static str, requested: usize) -> TilingError {
    TilingError::ResourceExhausted {
        operation,
        requested,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
