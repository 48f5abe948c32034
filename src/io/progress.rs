//! Progress tracking for histogram construction across files and sample groups

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch evaluations
///
/// Shows one bar per sample group of the current file (rolling over the most
/// recent groups) and adds a file-level batch bar when many files are queued
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    group_bars: Vec<ProgressBar>,
    file_count: usize,
    current_file: String,
    /// Stores (`label`, `done`, `total`) for rolling window display
    group_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static GROUP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            group_bars: Vec::new(),
            file_count: 0,
            current_file: String::new(),
            group_states: Vec::new(),
        }
    }

    /// Initialize progress bars for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..MAX_INDIVIDUAL_PROGRESS_BARS {
            let pb = ProgressBar::new(0);
            pb.set_style(GROUP_STYLE.clone());
            self.group_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced at initialization
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Begin a new file, clearing the group bars of the previous one
    pub fn start_file(&mut self, path: &Path) {
        self.current_file = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.group_states.clear();
        self.update_bars();
    }

    /// Register a sample group of `total` images
    ///
    /// Returns the group index used by [`Self::advance_group`]
    pub fn start_group(&mut self, label: &str, total: usize) -> usize {
        let name = if self.current_file.is_empty() {
            label.to_string()
        } else {
            format!("{} {label}", self.current_file)
        };
        self.group_states.push((name, 0, total));
        self.update_bars();
        self.group_states.len() - 1
    }

    /// Record one more histogram built in a group
    pub fn advance_group(&mut self, group: usize) {
        if let Some(state) = self.group_states.get_mut(group) {
            state.1 = (state.1 + 1).min(state.2);
        }
        self.update_bars();
    }

    /// Mark the current file as finished
    pub fn complete_file(&mut self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        for state in &mut self.group_states {
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent groups, clearing unused bars
    fn update_bars(&self) {
        let start_idx = self
            .group_states
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = self.group_states.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, done, total)) in visible.iter().enumerate() {
            if let Some(bar) = self.group_bars.get(bar_idx) {
                bar.set_length(*total as u64);
                bar.set_position(*done as u64);
                bar.set_message(format!("{done}/{total}"));
                bar.set_prefix(name.clone());
            }
        }

        for bar in self.group_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
