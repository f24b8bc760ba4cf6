//! Error taxonomy for configuration, placement invariants and checkpoint export

use crate::spatial::Coordinate;
use std::fmt;
use std::path::PathBuf;

/// Broad class of an [`AlgorithmError`], deciding whether a run must abort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before the placement loop starts
    Configuration,
    /// A logic defect detected during placement
    Invariant,
    /// Writing a checkpoint image failed
    Export,
}

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Configuration value failed to parse or validate
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The colour cube cannot exactly fill the grid
    DimensionMismatch {
        /// Quantization levels per channel
        depth: usize,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// Distance function name is not registered
    UnknownDistance {
        /// Name as supplied by the configuration
        name: String,
    },

    /// Override key does not name a known setting
    UnknownSetting {
        /// Key as supplied on the command line
        key: String,
    },

    /// Settings file could not be read
    ConfigRead {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Settings file is not valid YAML for the settings schema
    ConfigParse {
        /// Path to the settings file, if the text came from disk
        path: Option<PathBuf>,
        /// Underlying parse error
        source: serde_yaml::Error,
    },

    /// A second colour was committed to a filled cell
    CellOccupied {
        /// Target of the rejected write
        coordinate: Coordinate,
        /// Placement index, when known
        index: Option<usize>,
    },

    /// No candidate cell remained while colours were still queued
    FrontierExhausted {
        /// Placement index that found no candidate
        index: usize,
    },

    /// Frontier still held cells after the last colour was placed
    FrontierNotEmpty {
        /// Number of frontier cells left over
        remaining: usize,
    },

    /// Completion was requested while colours were still queued
    SequenceNotExhausted {
        /// Number of colours not yet placed
        remaining: usize,
    },

    /// Failed to encode or save a checkpoint image
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

    /// The background export worker stopped unexpectedly
    ExportWorker {
        /// Description of the failure
        reason: String,
    },
}

impl AlgorithmError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. }
            | Self::DimensionMismatch { .. }
            | Self::UnknownDistance { .. }
            | Self::UnknownSetting { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. } => ErrorKind::Configuration,
            Self::CellOccupied { .. }
            | Self::FrontierExhausted { .. }
            | Self::FrontierNotEmpty { .. }
            | Self::SequenceNotExhausted { .. } => ErrorKind::Invariant,
            Self::ImageExport { .. } | Self::FileSystem { .. } | Self::ExportWorker { .. } => {
                ErrorKind::Export
            }
        }
    }

    /// Whether the run has to abort on this error
    pub const fn is_fatal(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Export)
    }
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
            Self::DimensionMismatch {
                depth,
                width,
                height,
            } => {
                write!(
                    f,
                    "Colour depth {depth} yields {depth}^3 colours but the grid is {width}x{height}"
                )
            }
            Self::UnknownDistance { name } => {
                write!(f, "Unknown colour distance '{name}'")
            }
            Self::UnknownSetting { key } => {
                write!(f, "Unknown setting '{key}'")
            }
            Self::ConfigRead { path, source } => {
                write!(
                    f,
                    "Failed to read settings file '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigParse { path, source } => match path {
                Some(path) => write!(
                    f,
                    "Failed to parse settings file '{}': {source}",
                    path.display()
                ),
                None => write!(f, "Failed to parse settings: {source}"),
            },
            Self::CellOccupied { coordinate, index } => match index {
                Some(index) => write!(
                    f,
                    "Placement {index} targets already filled cell {coordinate}"
                ),
                None => write!(f, "Cell {coordinate} is already filled"),
            },
            Self::FrontierExhausted { index } => {
                write!(f, "Frontier exhausted before placement {index}")
            }
            Self::FrontierNotEmpty { remaining } => {
                write!(
                    f,
                    "Frontier still holds {remaining} cells after the last placement"
                )
            }
            Self::SequenceNotExhausted { remaining } => {
                write!(f, "{remaining} colours were never placed")
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
            Self::ExportWorker { reason } => {
                write!(f, "Checkpoint export worker failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::ConfigRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the current placement index to errors raised below the engine
pub trait WithPlacement<T> {
    /// Record `index` on errors that carry a placement index
    ///
    /// # Errors
    ///
    /// Propagates the original error with the index applied
    fn at_placement(self, index: usize) -> Result<T>;
}

impl<T> WithPlacement<T> for Result<T> {
    fn at_placement(self, index: usize) -> Self {
        self.map_err(|mut error| {
            if let AlgorithmError::CellOccupied { index: slot, .. } = &mut error {
                *slot = Some(index);
            }
            error
        })
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
