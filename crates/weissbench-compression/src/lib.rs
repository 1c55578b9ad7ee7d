//! Compression variants measured by weissbench
//!
//! This crate implements the five benchmarked variants behind one interface:
//!
//! - **Stream codecs**: gzip, bzip2 and xz compress a file's bytes directly
//!   and a directory as a tar stream
//! - **Archives**: zip (DEFLATE entries) and uncompressed tar
//! - **Scratch artifacts**: every output goes to a temporary file that is
//!   deleted on success, failure and cancellation
//! - **Cancellation**: input reads stop as soon as the shared flag is raised
//!
//! # Examples
//!
//! ```rust,no_run
//! use weissbench_compression::{CompressorFactory, CompressorOptions};
//! use weissbench_types::CompressionAlgorithm;
//! use std::path::Path;
//!
//! let options = CompressorOptions::default();
//! let gzip = CompressorFactory::create(CompressionAlgorithm::Gzip, &options);
//!
//! let outcome = gzip.compress(Path::new("data.bin"))?;
//! println!("{} bytes in {:?}", outcome.compressed_size, outcome.elapsed);
//! # Ok::<(), weissbench_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod archive;
pub mod reader;
pub mod scratch;

// Re-export main types
pub use algorithms::{
    Bzip2Compressor, CompressionOutcome, Compressor, CompressorFactory, CompressorOptions,
    GzipCompressor, LzmaCompressor, TarCompressor, ZipCompressor,
};
pub use reader::CancellableReader;
pub use scratch::{ScratchArtifact, SCRATCH_PREFIX};
