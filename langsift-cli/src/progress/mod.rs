//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use langsift_core::RunObserver;
use std::path::Path;

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_processed(&self, filename: &str, records: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename}: {records} record(s)"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

impl RunObserver for ProgressReporter {
    fn files_found(&mut self, count: usize) {
        self.init_files(count as u64);
    }

    fn file_completed(&mut self, path: &Path, records: usize) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.file_processed(&name, records);
    }
}
