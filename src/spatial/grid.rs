//! Grid layout computation for uniform tile placement
//!
//! Every tile is sized to the largest loaded image, so any image fits inside its
//! cell when placed at the cell's top-left corner. Cells are filled row-major in
//! input order.

use crate::io::error::{Result, computation_error, invalid_parameter};

/// How the row count treats a final row that is only partially filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RowPolicy {
    /// Only complete rows are laid out; images past `rows * columns` are dropped
    #[default]
    Truncate,
    /// A partial last row is added so every image gets a cell
    Extend,
}

/// Tile size, grid shape and resulting canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of every cell in pixels
    pub tile_width: u32,
    /// Height of every cell in pixels
    pub tile_height: u32,
    /// Effective number of columns
    pub columns: u32,
    /// Number of rows
    pub rows: u32,
    /// Canvas width (`tile_width * columns`)
    pub width: u32,
    /// Canvas height (`tile_height * rows`)
    pub height: u32,
}

/// Destination of one placed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the image among the images handed to the compositor
    pub slot: usize,
    /// Grid column of the cell
    pub column: u32,
    /// Grid row of the cell
    pub row: u32,
    /// Canvas x coordinate of the cell origin
    pub x: u32,
    /// Canvas y coordinate of the cell origin
    pub y: u32,
}

impl GridLayout {
    /// Compute the layout for images of the given `(width, height)` dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dimensions` is empty or `requested_columns` is zero
    /// - The largest image has a zero width or height
    /// - The canvas dimensions overflow `u32`
    pub fn new(
        dimensions: &[(u32, u32)],
        requested_columns: u32,
        policy: RowPolicy,
    ) -> Result<Self> {
        if requested_columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &requested_columns,
                &"must be at least 1",
            ));
        }
        if dimensions.is_empty() {
            return Err(invalid_parameter(
                "images",
                &0,
                &"at least one image is required",
            ));
        }

        let tile_width = dimensions.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let tile_height = dimensions.iter().map(|&(_, h)| h).max().unwrap_or(0);
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "tile",
                &format!("{tile_width}x{tile_height}"),
                &"tile dimensions must be non-zero",
            ));
        }

        let count = u32::try_from(dimensions.len())
            .map_err(|err| computation_error("grid shape", &err))?;
        let columns = requested_columns.min(count);
        let rows = match policy {
            RowPolicy::Truncate => count / columns,
            RowPolicy::Extend => count.div_ceil(columns),
        };

        let width = tile_width.checked_mul(columns).ok_or_else(|| {
            computation_error(
                "canvas width",
                &format!("{tile_width} * {columns} overflows u32"),
            )
        })?;
        let height = tile_height.checked_mul(rows).ok_or_else(|| {
            computation_error(
                "canvas height",
                &format!("{tile_height} * {rows} overflows u32"),
            )
        })?;

        Ok(Self {
            tile_width,
            tile_height,
            columns,
            rows,
            width,
            height,
        })
    }

    /// Number of cells in the grid
    pub const fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Placement of the `slot`-th image, or `None` when the grid has no cell left for it
    pub const fn placement(&self, slot: usize) -> Option<Placement> {
        if slot >= self.capacity() {
            return None;
        }
        let column = (slot % self.columns as usize) as u32;
        let row = (slot / self.columns as usize) as u32;
        Some(Placement {
            slot,
            column,
            row,
            x: column * self.tile_width,
            y: row * self.tile_height,
        })
    }
}
