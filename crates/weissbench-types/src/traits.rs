//! Core traits for weissbench operations
//!
//! Cancellation and progress observation are passed explicitly into the
//! benchmark instead of living in process-wide state.

use crate::{BenchmarkResult, CompressionAlgorithm, Error, FileSize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Trait for operation cancellation
pub trait Cancellable {
    /// Cancel the operation
    fn cancel(&self);

    /// Check if the operation is cancelled
    fn is_cancelled(&self) -> bool;
}

/// Shared cancellation flag
///
/// Clones observe the same flag, so a signal handler can hold one clone while
/// the benchmark polls another.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not raised
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `Err(Error::Cancelled)` if the flag is raised
    pub fn check(&self) -> Result<(), Error> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Cancellable for CancelFlag {
    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Receives benchmark progress events
///
/// All methods default to doing nothing.
pub trait BenchmarkObserver: Send + Sync {
    /// The benchmark is about to measure `runs` algorithm runs, including an
    /// unrequested reference run
    fn on_start(&self, _input: &Path, _original_size: FileSize, _runs: usize) {}

    /// An algorithm run is starting
    fn on_algorithm_start(&self, _algorithm: CompressionAlgorithm) {}

    /// An algorithm run finished; `reported` is false for an unrequested reference run
    fn on_result(&self, _result: &BenchmarkResult, _reported: bool) {}

    /// Every run finished; `results` holds only the reported runs
    fn on_complete(&self, _results: &[BenchmarkResult]) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BenchmarkObserver for NoopObserver {}
