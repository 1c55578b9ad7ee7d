//! Benchmark orchestrator and Weissman scorer for weissbench
//!
//! This crate drives the compression variants against one input and turns the
//! raw measurements into comparable results.
//!
//! # Features
//!
//! - **Sequential measurement**: variants run strictly one after another so
//!   no run competes with another for CPU or disk
//! - **Reference baseline**: gzip is always measured first, reported only when
//!   requested, and scored 1.0 by definition
//! - **Weissman scoring**: every other variant is scored from its ratio and
//!   time relative to the reference
//! - **Progress reporting**: a [`BenchmarkObserver`](weissbench_types::BenchmarkObserver)
//!   receives lifecycle events
//!
//! # Examples
//!
//! ```rust,no_run
//! use weissbench_engine::CompressionBenchmark;
//! use weissbench_types::{sort_by_score, CompressionAlgorithm};
//!
//! # fn example() -> weissbench_types::Result<()> {
//! let benchmark = CompressionBenchmark::new("data/corpus")?;
//! let mut results = benchmark.run(&CompressionAlgorithm::ALL)?;
//! sort_by_score(&mut results);
//!
//! for result in &results {
//!     println!("{}: {:.4}", result.algorithm(), result.weissman_score());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod benchmark;
pub mod input;
pub mod scorer;

pub use benchmark::CompressionBenchmark;
pub use input::{original_size, validate_input};
pub use scorer::{weissman_score, WeissmanScorer};
