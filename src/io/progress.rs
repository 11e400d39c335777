//! Progress display for long matching runs

use crate::io::configuration::PROGRESS_MIN_TILES;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len} tiles")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tiles the matching covers while the engine runs
///
/// Small regions finish before a bar is worth drawing, so no bar is created
/// below [`PROGRESS_MIN_TILES`] tiles.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress display for a region of `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        let bar = (tile_count >= PROGRESS_MIN_TILES).then(|| {
            let bar = ProgressBar::new(tile_count as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_message("matching");
            bar
        });

        Self { bar }
    }

    /// Create a manager that never draws anything
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Report the number of matched tiles
    pub fn update(&self, matched_tiles: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(matched_tiles as u64);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
