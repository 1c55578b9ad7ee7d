//! Progress tracking for benchmark runs

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use weissbench_types::{format_size, BenchmarkObserver, BenchmarkResult, CompressionAlgorithm};

/// Progress bar driven by benchmark events
///
/// Clones share the same bar, so the CLI can keep one handle while the
/// benchmark thread owns another.
#[derive(Debug, Clone)]
pub struct BenchmarkProgress {
    progress_bar: Option<ProgressBar>,
}

impl BenchmarkProgress {
    /// Create a tracker; nothing is drawn in quiet mode
    pub fn new(quiet: bool) -> Self {
        let progress_bar = if quiet {
            None
        } else {
            let pb = ProgressBar::new(0);
            if let Ok(bar_style) = ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len} ({elapsed})")
            {
                pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏  "));
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        };

        Self { progress_bar }
    }

    /// Stop drawing and remove the bar after a failed run
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    fn print_line(&self, line: String) {
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl BenchmarkObserver for BenchmarkProgress {
    fn on_start(&self, input: &Path, original_size: u64, runs: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_length(runs as u64);
            pb.set_position(0);
            pb.set_message(format!(
                "{} ({})",
                input.display(),
                format_size(original_size)
            ));
        }
    }

    fn on_algorithm_start(&self, algorithm: CompressionAlgorithm) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Compressing with {}", algorithm));
        }
    }

    fn on_result(&self, result: &BenchmarkResult, reported: bool) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
            let note = if reported { "" } else { " (reference only)" };
            self.print_line(format!(
                "  {} {:<6} {} in {:.4}s{}",
                style("✓").green(),
                result.algorithm(),
                format_size(result.compressed_size()),
                result.compression_time(),
                style(note).dim()
            ));
        }
    }

    fn on_complete(&self, results: &[BenchmarkResult]) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
        tracing::debug!("Progress finished after {} results", results.len());
    }
}
