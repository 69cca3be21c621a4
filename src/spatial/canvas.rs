//! Zero-filled RGB canvas with strided image blits

use crate::io::configuration::CHANNELS;
use crate::io::error::{GriddyError, Result, computation_error};
use crate::spatial::grid::{GridLayout, Placement};
use image::RgbImage;

/// Owned RGB8 pixel buffer that images are copied into
///
/// Pixels are stored row-major with a stride of `width * CHANNELS` bytes.
/// Bytes not covered by any blit keep their initial value of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a zero-initialized canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer size overflows `usize`
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                computation_error(
                    "canvas allocation",
                    &format!("{width}x{height} canvas is too large"),
                )
            })?;

        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel bytes
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB value at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        match self.pixels.get(start..start + CHANNELS) {
            Some(&[r, g, b]) => Some([r, g, b]),
            _ => None,
        }
    }

    /// Copy a tightly packed RGB8 image into the canvas with its top-left corner at `(x, y)`
    ///
    /// Each source row of `src_width * CHANNELS` bytes is written at the matching
    /// destination row, whose stride is the canvas width. Nothing is blended.
    ///
    /// # Errors
    ///
    /// Returns [`GriddyError::BlitOutOfBounds`] if the source buffer length does not
    /// match `src_width * src_height * CHANNELS` or the rectangle does not fit the
    /// canvas. The canvas is left untouched in that case.
    pub fn blit(
        &mut self,
        src: &[u8],
        src_width: u32,
        src_height: u32,
        x: u32,
        y: u32,
    ) -> Result<()> {
        let out_of_bounds = || GriddyError::BlitOutOfBounds {
            origin: (x, y),
            source_dimensions: (src_width, src_height),
            canvas_dimensions: (self.width, self.height),
        };

        let fits_horizontally = u64::from(x) + u64::from(src_width) <= u64::from(self.width);
        let fits_vertically = u64::from(y) + u64::from(src_height) <= u64::from(self.height);
        let row_len = src_width as usize * CHANNELS;
        if !fits_horizontally || !fits_vertically || src.len() != row_len * src_height as usize {
            return Err(out_of_bounds());
        }
        if row_len == 0 {
            return Ok(());
        }

        let dst_stride = self.width as usize * CHANNELS;
        let dst_offset = x as usize * CHANNELS;
        for (row, src_row) in src.chunks_exact(row_len).enumerate() {
            let start = (y as usize + row) * dst_stride + dst_offset;
            let dst_row = self
                .pixels
                .get_mut(start..start + row_len)
                .ok_or_else(out_of_bounds)?;
            dst_row.copy_from_slice(src_row);
        }

        Ok(())
    }
}

/// Allocate a canvas for `layout` and blit `images` into their cells in order
///
/// Images beyond the layout's capacity are not placed; the returned placements
/// list only the images that were copied.
///
/// # Errors
///
/// Returns an error if the canvas cannot be allocated or an image is larger than
/// the layout's tile size
pub fn compose<'a, I>(layout: &GridLayout, images: I) -> Result<(Canvas, Vec<Placement>)>
where
    I: IntoIterator<Item = &'a RgbImage>,
{
    let mut canvas = Canvas::new(layout.width, layout.height)?;
    let mut placements = Vec::with_capacity(layout.capacity());

    for (slot, image) in images.into_iter().enumerate() {
        let Some(placement) = layout.placement(slot) else {
            break;
        };
        if image.width() > layout.tile_width || image.height() > layout.tile_height {
            return Err(GriddyError::BlitOutOfBounds {
                origin: (placement.x, placement.y),
                source_dimensions: image.dimensions(),
                canvas_dimensions: (canvas.width(), canvas.height()),
            });
        }
        canvas.blit(
            image.as_raw(),
            image.width(),
            image.height(),
            placement.x,
            placement.y,
        )?;
        placements.push(placement);
    }

    Ok((canvas, placements))
}
