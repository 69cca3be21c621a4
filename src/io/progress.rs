//! Progress display for the decode pass

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "Loading [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many inputs have been decoded
///
/// The bar draws to stderr. Lines written through [`LoadProgress::report`]
/// go to stdout without tearing the bar.
pub struct LoadProgress {
    bar: ProgressBar,
}

impl LoadProgress {
    /// Create a progress display for `total` inputs, hidden when `visible` is false
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(LOAD_STYLE.clone());
        Self { bar }
    }

    /// Show the file currently being decoded
    pub fn start(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark one input as handled, whether it decoded or not
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Print a diagnostic line to stdout while the bar is suspended
    // Allow print for user feedback on skipped inputs
    #[allow(clippy::print_stdout)]
    pub fn report(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
