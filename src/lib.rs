//! Compose a set of raster images into a single grid-tiled output image
//!
//! Inputs are decoded as RGB8, every grid cell is sized to the largest input,
//! and each image is copied to the top-left corner of its cell on a zero-filled
//! canvas, row-major in input order. The canvas is then encoded once.

#![forbid(unsafe_code)]

/// Command-line handling, image I/O, progress and error types
pub mod io;
/// Grid layout computation and canvas blitting
pub mod spatial;

pub use io::error::{GriddyError, Result};
