//! Progress display helpers.

use indicatif::{ProgressBar, ProgressStyle};

/// Byte-progress bar for a dataset archive download.
///
/// The length starts at 0 and is set once the server announces a
/// content length.
pub fn download_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    bar
}
