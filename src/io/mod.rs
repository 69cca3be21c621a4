//! Command-line handling, image decoding/encoding, progress and error types

/// Argument parsing and the load, compose and write pipeline
pub mod cli;
/// Compositing constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Decoding of input images and encoding of the output canvas
pub mod image;
/// Progress display for the decode pass
pub mod progress;
