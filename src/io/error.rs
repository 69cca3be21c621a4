//! Error types for loading, compositing and writing grid images

use std::fmt;
use std::path::PathBuf;

/// Main error type for all compositing operations
#[derive(Debug)]
pub enum GriddyError {
    /// No input paths were supplied
    NoInputs,

    /// More input paths were supplied than the compositor accepts
    TooManyInputs {
        /// Number of paths supplied
        count: usize,
        /// Maximum number of paths accepted
        max: usize,
    },

    /// Every configured input failed to decode
    NoImagesLoaded {
        /// Number of inputs that were attempted
        attempted: usize,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Failed to encode the composed canvas
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoder error
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

    /// Layout or canvas parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A blit source does not fit the destination canvas
    ///
    /// Raised when either:
    /// - The source rectangle extends past the canvas edge
    /// - The source buffer length does not match its stated dimensions
    BlitOutOfBounds {
        /// Destination origin (x, y)
        origin: (u32, u32),
        /// Source dimensions (width, height)
        source_dimensions: (u32, u32),
        /// Canvas dimensions (width, height)
        canvas_dimensions: (u32, u32),
    },

    /// The output format cannot hold a canvas of this size
    CanvasTooLarge {
        /// Canvas dimensions (width, height)
        dimensions: (u32, u32),
        /// Largest side the output format accepts
        limit: u32,
        /// Output path whose extension selected the format
        path: PathBuf,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GriddyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputs => write!(f, "No input images provided!"),
            Self::TooManyInputs { count, max } => {
                write!(f, "Too many input images: {count} given, at most {max} allowed")
            }
            Self::NoImagesLoaded { attempted } => {
                write!(f, "None of the {attempted} input images could be loaded")
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BlitOutOfBounds {
                origin,
                source_dimensions,
                canvas_dimensions,
            } => {
                write!(
                    f,
                    "Cannot place {}x{} image at x={}, y={} on {}x{} canvas",
                    source_dimensions.0,
                    source_dimensions.1,
                    origin.0,
                    origin.1,
                    canvas_dimensions.0,
                    canvas_dimensions.1
                )
            }
            Self::CanvasTooLarge {
                dimensions,
                limit,
                path,
            } => {
                write!(
                    f,
                    "Canvas of {}x{} exceeds the {limit} pixel side limit for '{}'",
                    dimensions.0,
                    dimensions.1,
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for GriddyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for compositing results
pub type Result<T> = std::result::Result<T, GriddyError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GriddyError {
    GriddyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GriddyError {
    GriddyError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
