//! Grid layout and pixel placement
//!
//! This module contains the compositing core:
//! - Tile sizing and grid shape computation
//! - The zero-filled canvas and its strided blit

/// Zero-filled canvas and strided image copy
pub mod canvas;
/// Tile size, grid shape and cell placement
pub mod grid;

pub use canvas::Canvas;
pub use grid::{GridLayout, Placement, RowPolicy};
