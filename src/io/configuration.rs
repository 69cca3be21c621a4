//! Compositing constants and runtime configuration defaults

/// Channels per pixel in every decoded image and in the output canvas (RGB8)
pub const CHANNELS: usize = 3;

// Enforced explicitly so an oversized argument list fails instead of growing unbounded
/// Maximum number of input image paths accepted on the command line
pub const MAX_INPUTS: usize = 255;

// Default values for configurable parameters
/// Requested number of output columns when `-x` is not given
pub const DEFAULT_COLUMNS: u32 = 1;

/// Output encoding quality when `-q` is not given
pub const DEFAULT_QUALITY: u8 = 90;

/// Output path when `-o` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "output.jpg";

/// Lowest accepted output quality
pub const MIN_QUALITY: u8 = 1;

/// Highest accepted output quality
pub const MAX_QUALITY: u8 = 100;

// Progress bar display settings
/// Width of the decode progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
