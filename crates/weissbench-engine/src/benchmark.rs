//! Benchmark orchestration
//!
//! Runs the requested variants one after another against a single input,
//! measuring the reference first and scoring every other variant against it.

use crate::input::{original_size, validate_input};
use crate::scorer::WeissmanScorer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use weissbench_compression::{CompressorFactory, CompressorOptions};
use weissbench_types::{
    AlgorithmSelection, Alpha, BenchmarkObserver, BenchmarkResult, CompressionAlgorithm, FileSize,
    NoopObserver, Result,
};

/// Compression benchmark over one input path
#[derive(Debug, Clone)]
pub struct CompressionBenchmark {
    input: PathBuf,
    options: CompressorOptions,
    scorer: WeissmanScorer,
}

impl CompressionBenchmark {
    /// Create a benchmark for `input`, which must exist
    pub fn new<P: AsRef<Path>>(input: P) -> Result<Self> {
        let input = validate_input(input.as_ref())?;
        Ok(Self {
            input,
            options: CompressorOptions::default(),
            scorer: WeissmanScorer::default(),
        })
    }

    /// Use the given codec, scratch and cancellation options
    #[must_use]
    pub fn with_options(mut self, options: CompressorOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the given scaling constant
    #[must_use]
    pub fn with_alpha(mut self, alpha: Alpha) -> Self {
        self.scorer = WeissmanScorer::new(alpha);
        self
    }

    /// The input being measured
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The scorer applied to non-reference results
    pub fn scorer(&self) -> &WeissmanScorer {
        &self.scorer
    }

    /// Measure every requested algorithm
    pub fn run(&self, algorithms: &[CompressionAlgorithm]) -> Result<Vec<BenchmarkResult>> {
        self.run_with_observer(algorithms, &NoopObserver)
    }

    /// Measure every requested algorithm, reporting progress to `observer`
    ///
    /// Duplicate requests are measured once. Results come back with the
    /// reference first when it was requested, then in request order. Any
    /// failure aborts the whole run and no partial results are returned.
    pub fn run_with_observer(
        &self,
        algorithms: &[CompressionAlgorithm],
        observer: &dyn BenchmarkObserver,
    ) -> Result<Vec<BenchmarkResult>> {
        if algorithms.is_empty() {
            debug!("No algorithms requested, skipping benchmark");
            return Ok(Vec::new());
        }

        self.options.cancel.check()?;

        let selection = AlgorithmSelection::new(algorithms.iter().copied());
        let reference_requested = selection.contains_reference();
        let original_size = original_size(&self.input)?;
        let runs = selection.len() + usize::from(!reference_requested);

        info!(
            "Benchmarking {} ({} bytes) with {} algorithm runs",
            self.input.display(),
            original_size,
            runs
        );
        observer.on_start(&self.input, original_size, runs);

        let reference_algorithm = CompressionAlgorithm::REFERENCE;
        observer.on_algorithm_start(reference_algorithm);
        let reference = self
            .measure(reference_algorithm, original_size)?
            .with_score(1.0);
        info!(
            "Reference {}: ratio {:.2}, time {:.4} seconds",
            reference_algorithm,
            reference.compression_ratio(),
            reference.compression_time()
        );
        observer.on_result(&reference, reference_requested);

        let mut results = Vec::with_capacity(selection.len());
        if reference_requested {
            results.push(reference.clone());
        }

        for &algorithm in selection.algorithms() {
            if algorithm.is_reference() {
                continue;
            }

            observer.on_algorithm_start(algorithm);
            let result = self.measure(algorithm, original_size)?;
            let score = self.scorer.score(&reference, &result);
            let result = result.with_score(score);

            debug!("{} scored {:.4}", algorithm, score);
            observer.on_result(&result, true);
            results.push(result);
        }

        info!("Benchmark completed with {} results", results.len());
        observer.on_complete(&results);

        Ok(results)
    }

    fn measure(
        &self,
        algorithm: CompressionAlgorithm,
        original_size: FileSize,
    ) -> Result<BenchmarkResult> {
        let compressor = CompressorFactory::create(algorithm, &self.options);
        let outcome = compressor.compress(&self.input)?;

        Ok(BenchmarkResult::measured(
            algorithm,
            original_size,
            outcome.compressed_size,
            outcome.elapsed,
        ))
    }
}
