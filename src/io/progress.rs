//! Progress display for multi-chunk generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CHUNK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Chunks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the chunks of one run
///
/// Stays hidden for single-chunk runs, where a bar would only add noise.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager for `chunk_count` chunks
    pub fn new(chunk_count: usize) -> Self {
        let bar = (chunk_count > 1).then(|| {
            let bar = ProgressBar::new(chunk_count as u64);
            bar.set_style(CHUNK_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Test whether a bar is being displayed
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Announce the chunk being generated
    pub fn start_chunk(&self, chunk_x: i32, chunk_y: i32) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("({chunk_x}, {chunk_y})"));
        }
    }

    /// Mark the current chunk as done
    pub fn complete_chunk(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Current completed chunk count
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
