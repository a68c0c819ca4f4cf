//! Progress display for batch map generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maps of a batch have been generated
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl ProgressManager {
    /// Create a visible progress bar for `map_count` maps
    pub fn new(map_count: usize) -> Self {
        let bar = ProgressBar::new(map_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, completed: 0 }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(map_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(map_count as u64);
        Self { bar, completed: 0 }
    }

    /// Show which seed is being generated
    pub fn start_map(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Mark the current map as written
    pub fn complete_map(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Number of maps completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All maps generated");
    }
}
