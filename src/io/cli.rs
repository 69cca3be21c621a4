//! Command-line interface for composing input images into one grid image

use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_OUTPUT_PATH, DEFAULT_QUALITY, MAX_INPUTS, MAX_QUALITY, MIN_QUALITY,
};
use crate::io::error::{GriddyError, Result};
use crate::io::image::{LoadedImage, ensure_encodable, load_rgb, save_canvas};
use crate::io::progress::LoadProgress;
use crate::spatial::canvas::compose;
use crate::spatial::grid::{GridLayout, RowPolicy};
use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "griddy")]
#[command(
    author,
    version,
    about = "Compose input images into a single grid-tiled output image"
)]
/// Command-line arguments for the grid compositor
pub struct Cli {
    /// Number of output columns
    #[arg(
        short = 'x',
        value_name = "VALUE",
        default_value_t = DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub columns: u32,

    /// Add an input image path
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Select the output image path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Select the output quality (1-100)
    #[arg(
        short,
        long,
        value_name = "VALUE",
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_QUALITY)..=i64::from(MAX_QUALITY))
    )]
    pub quality: u8,

    /// How to lay out images that do not fill a complete last row
    #[arg(long, value_enum, default_value_t = RowPolicy::Truncate)]
    pub rows: RowPolicy,

    /// Suppress the progress bar and per-image placement lines
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Check whether `-h` or `--help` appears anywhere after the program name
    ///
    /// Help wins over every other argument, including malformed ones, so this
    /// runs on the raw argument list before parsing.
    pub fn help_requested<I, T>(args: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        args.into_iter()
            .skip(1)
            .any(|arg| matches!(arg.as_ref().to_str(), Some("-h" | "--help")))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check the input list before any file is touched
    ///
    /// # Errors
    ///
    /// Returns an error if no inputs were given or more than [`MAX_INPUTS`] were given
    pub fn validate(&self) -> Result<()> {
        let count = self.inputs.len();
        if count == 0 {
            return Err(GriddyError::NoInputs);
        }
        if count > MAX_INPUTS {
            return Err(GriddyError::TooManyInputs {
                count,
                max: MAX_INPUTS,
            });
        }
        Ok(())
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Path the canvas was written to
    pub output: PathBuf,
    /// Layout the canvas was built with
    pub layout: GridLayout,
    /// Inputs copied onto the canvas
    pub placed: usize,
    /// Inputs that failed to decode
    pub skipped: usize,
    /// Decoded inputs that had no grid cell left
    pub dropped: usize,
}

/// Runs the load, compose and write pipeline for one set of arguments
pub struct Compositor {
    cli: Cli,
}

impl Compositor {
    /// Create a new compositor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load every input, compose the grid and write the output image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input list is empty or too long
    /// - None of the inputs can be decoded
    /// - The canvas dimensions overflow or exceed the output format's limit
    /// - The output image cannot be written
    // Allow print for user feedback on placement and the final summary
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<Summary> {
        self.cli.validate()?;

        let progress = LoadProgress::new(self.cli.inputs.len(), self.cli.should_show_progress());
        let images = self.load_images(&progress);
        progress.finish();

        let skipped = self.cli.inputs.len() - images.len();
        if images.is_empty() {
            return Err(GriddyError::NoImagesLoaded {
                attempted: self.cli.inputs.len(),
            });
        }

        let dimensions: Vec<(u32, u32)> = images
            .iter()
            .map(|image| (image.width(), image.height()))
            .collect();
        let layout = GridLayout::new(&dimensions, self.cli.columns, self.cli.rows)?;
        log::debug!(
            "Tile size {}x{}, grid {}x{}",
            layout.tile_width,
            layout.tile_height,
            layout.columns,
            layout.rows
        );
        ensure_encodable(layout.width, layout.height, &self.cli.output)?;

        let (canvas, placements) = compose(&layout, images.iter().map(|image| &image.pixels))?;

        if !self.cli.quiet {
            for placement in &placements {
                if let Some(image) = images.get(placement.slot) {
                    println!(
                        "Copy image {} to x={}, y={}",
                        image.index, placement.x, placement.y
                    );
                }
            }
        }
        for image in images.get(placements.len()..).unwrap_or(&[]) {
            println!(
                "No grid cell left for image {} '{}'",
                image.index,
                image.path.display()
            );
        }

        save_canvas(&canvas, &self.cli.output, self.cli.quality)?;
        println!(
            "Write output to '{}' (cols={}, rows={}, w={}, h={})",
            self.cli.output.display(),
            layout.columns,
            layout.rows,
            layout.width,
            layout.height
        );

        Ok(Summary {
            output: self.cli.output.clone(),
            layout,
            placed: placements.len(),
            skipped,
            dropped: images.len() - placements.len(),
        })
    }

    fn load_images(&self, progress: &LoadProgress) -> Vec<LoadedImage> {
        let mut images = Vec::with_capacity(self.cli.inputs.len());

        for (index, path) in self.cli.inputs.iter().enumerate() {
            progress.start(path);
            match load_rgb(path, index) {
                Ok(image) => images.push(image),
                Err(err) => {
                    log::debug!("{err}");
                    progress.report(&format!(
                        "Unable to load image from path '{}'",
                        path.display()
                    ));
                }
            }
            progress.advance();
        }

        images
    }
}
