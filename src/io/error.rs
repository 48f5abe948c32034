//! Error types for histogram construction, divergence scoring and the evaluation driver

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnodiError {
    /// Patch size cannot be used on the given image
    ///
    /// Occurs when the patch size is zero, exceeds either image dimension,
    /// or would need a histogram too large to allocate
    InvalidPatchSize {
        /// Requested patch side length
        patch_size: usize,
        /// Image height
        rows: usize,
        /// Image width
        cols: usize,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Histogram sums to zero and cannot be normalized
    DegenerateHistogram {
        /// Position of the histogram in its input list
        index: usize,
        /// Number of bins in the histogram
        length: usize,
    },

    /// Not enough samples for a pairwise statistic
    InsufficientSamples {
        /// Minimum number of samples the operation needs
        required: usize,
        /// Number of samples actually supplied
        provided: usize,
    },

    /// Histograms compared element-wise have different lengths
    LengthMismatch {
        /// Length of the first histogram
        expected: usize,
        /// Length of the offending histogram
        found: usize,
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

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
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

impl fmt::Display for AnodiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPatchSize {
                patch_size,
                rows,
                cols,
                reason,
            } => {
                write!(
                    f,
                    "Invalid patch size {patch_size} for {rows}x{cols} image: {reason}"
                )
            }
            Self::DegenerateHistogram { index, length } => {
                write!(
                    f,
                    "Histogram {index} ({length} bins) sums to zero and cannot be normalized"
                )
            }
            Self::InsufficientSamples { required, provided } => {
                write!(
                    f,
                    "Insufficient samples: {provided} provided, at least {required} required"
                )
            }
            Self::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Histogram length mismatch: expected {expected} bins, found {found}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for AnodiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnodiError>;

impl From<image::ImageError> for AnodiError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AnodiError {
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
) -> AnodiError {
    AnodiError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
