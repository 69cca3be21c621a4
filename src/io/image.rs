//! RGB8 decoding of input images and encoding of the composed canvas

use crate::io::error::{GriddyError, Result};
use crate::spatial::Canvas;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageFormat, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A successfully decoded input image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Position of the path among all configured inputs, including ones that failed
    pub index: usize,
    /// Path the image was decoded from
    pub path: PathBuf,
    /// Decoded pixels, always three channels
    pub pixels: RgbImage,
}

impl LoadedImage {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode the image at `path` as three-channel RGB8
///
/// # Errors
///
/// Returns [`GriddyError::ImageLoad`] if the file is missing, unreadable or in
/// an unsupported format
pub fn load_rgb(path: &Path, index: usize) -> Result<LoadedImage> {
    let load_error = |source| GriddyError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    // Sniff the content so a mislabelled extension still decodes
    let decoded = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)
        .and_then(ImageReader::decode)
        .map_err(load_error)?;

    Ok(LoadedImage {
        index,
        path: path.to_path_buf(),
        pixels: decoded.into_rgb8(),
    })
}

/// Format the canvas is written in, chosen from the output extension
///
/// Paths without a recognised extension are written as JPEG.
pub fn output_format(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path).unwrap_or(ImageFormat::Jpeg)
}

/// Largest width or height the encoder for `format` accepts, if it has a limit
pub const fn max_side(format: ImageFormat) -> Option<u32> {
    match format {
        ImageFormat::Jpeg => Some(u16::MAX as u32),
        ImageFormat::WebP => Some(16_383),
        ImageFormat::Png | ImageFormat::Bmp => Some(i32::MAX as u32),
        _ => None,
    }
}

/// Check that a `width` x `height` canvas can be written to `output_path`
///
/// Run before the canvas is allocated so an unwritable size fails without
/// reserving its buffer.
///
/// # Errors
///
/// Returns [`GriddyError::CanvasTooLarge`] if either side exceeds the limit of
/// the format selected by the output extension
pub fn ensure_encodable(width: u32, height: u32, output_path: &Path) -> Result<()> {
    match max_side(output_format(output_path)) {
        Some(limit) if width > limit || height > limit => Err(GriddyError::CanvasTooLarge {
            dimensions: (width, height),
            limit,
            path: output_path.to_path_buf(),
        }),
        _ => Ok(()),
    }
}

/// Encode the canvas to `output_path`
///
/// JPEG output uses `quality`, expected in 1-100 as the command line enforces;
/// lossless formats ignore it.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - The encoder rejects the canvas (for example a zero-sized canvas)
pub fn save_canvas(canvas: &Canvas, output_path: &Path, quality: u8) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GriddyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let export_error = |source| GriddyError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    };

    match output_format(output_path) {
        ImageFormat::Jpeg => {
            let file = File::create(output_path).map_err(|e| GriddyError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "create file",
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            JpegEncoder::new_with_quality(&mut writer, quality)
                .write_image(
                    canvas.as_raw(),
                    canvas.width(),
                    canvas.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(export_error)?;
            writer.flush().map_err(|e| GriddyError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "flush file",
                source: e,
            })?;
        }
        format => {
            image::save_buffer_with_format(
                output_path,
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgb8,
                format,
            )
            .map_err(export_error)?;
        }
    }

    log::debug!(
        "Encoded {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        output_path.display()
    );

    Ok(())
}
