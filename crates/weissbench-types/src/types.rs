//! Core data types for weissbench
//!
//! This module provides the algorithm identifiers, the user-facing algorithm
//! selection, and the per-run measurement record shared by every crate.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File size in bytes
pub type FileSize = u64;

/// Compression algorithms that can be benchmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompressionAlgorithm {
    /// DEFLATE in a gzip container
    Gzip,
    /// Burrows-Wheeler bzip2
    Bzip2,
    /// LZMA2 in an xz container
    Lzma,
    /// ZIP archive with DEFLATE entries
    Zip,
    /// Uncompressed tar archive
    Tar,
}

impl CompressionAlgorithm {
    /// The baseline every other algorithm is scored against
    pub const REFERENCE: Self = Self::Gzip;

    /// Every supported algorithm, in display order
    pub const ALL: [Self; 5] = [Self::Gzip, Self::Bzip2, Self::Lzma, Self::Zip, Self::Tar];

    /// Stable token used on the command line and in exports
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Lzma => "lzma",
            Self::Zip => "zip",
            Self::Tar => "tar",
        }
    }

    /// Whether this is the reference algorithm
    pub fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }

    /// File extension of the produced artifact
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gzip => ".gz",
            Self::Bzip2 => ".bz2",
            Self::Lzma => ".xz",
            Self::Zip => ".zip",
            Self::Tar => ".tar",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::Gzip => "DEFLATE stream (directories as tar.gz)",
            Self::Bzip2 => "bzip2 stream (directories as tar.bz2)",
            Self::Lzma => "xz/LZMA2 stream (directories as tar.xz)",
            Self::Zip => "ZIP archive with DEFLATE entries",
            Self::Tar => "tar archive without compression",
        }
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == token)
            .ok_or_else(|| Error::config(format!("Unsupported compression algorithm: {}", s)))
    }
}

/// An ordered, duplicate-free set of algorithms requested by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmSelection(Vec<CompressionAlgorithm>);

impl AlgorithmSelection {
    /// Token meaning "every supported algorithm"
    pub const ALL_TOKEN: &'static str = "all";

    /// Select every supported algorithm
    pub fn all() -> Self {
        Self(CompressionAlgorithm::ALL.to_vec())
    }

    /// Build a selection, keeping the first occurrence of each algorithm
    pub fn new<I: IntoIterator<Item = CompressionAlgorithm>>(algorithms: I) -> Self {
        let mut selected = Vec::new();
        for algorithm in algorithms {
            if !selected.contains(&algorithm) {
                selected.push(algorithm);
            }
        }
        Self(selected)
    }

    /// Parse user tokens; each token may itself be a comma-separated list.
    ///
    /// `all` anywhere selects every algorithm. Unknown tokens are a
    /// configuration error.
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut algorithms = Vec::new();
        for token in tokens {
            for part in token.as_ref().split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                if part.eq_ignore_ascii_case(Self::ALL_TOKEN) {
                    return Ok(Self::all());
                }
                algorithms.push(part.parse()?);
            }
        }
        Ok(Self::new(algorithms))
    }

    /// Selected algorithms in request order
    pub fn algorithms(&self) -> &[CompressionAlgorithm] {
        &self.0
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected algorithms
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the reference algorithm was requested
    pub fn contains_reference(&self) -> bool {
        self.0.contains(&CompressionAlgorithm::REFERENCE)
    }
}

impl FromStr for AlgorithmSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tokens([s])
    }
}

impl From<AlgorithmSelection> for Vec<CompressionAlgorithm> {
    fn from(selection: AlgorithmSelection) -> Self {
        selection.0
    }
}

/// Measurement of one algorithm against one input
///
/// Everything except the Weissman score is fixed at construction; the score
/// is assigned once the reference measurement is known.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkResult {
    algorithm: CompressionAlgorithm,
    original_size: FileSize,
    compressed_size: FileSize,
    compression_ratio: f64,
    compression_time: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    weissman_score: f64,
}

impl BenchmarkResult {
    /// Build a result from a fresh measurement; the score starts at zero
    pub fn measured(
        algorithm: CompressionAlgorithm,
        original_size: FileSize,
        compressed_size: FileSize,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            compression_time: elapsed.as_secs_f64(),
            weissman_score: 0.0,
        }
    }

    /// Build a result from already-known values, e.g. when reading an export
    pub fn from_parts(
        algorithm: CompressionAlgorithm,
        original_size: FileSize,
        compressed_size: FileSize,
        compression_ratio: f64,
        compression_time: f64,
        weissman_score: f64,
    ) -> Self {
        Self {
            algorithm,
            original_size,
            compressed_size,
            compression_ratio,
            compression_time,
            weissman_score,
        }
    }

    /// Algorithm that produced this measurement
    pub fn algorithm(&self) -> CompressionAlgorithm {
        self.algorithm
    }

    /// Size of the input in bytes
    pub fn original_size(&self) -> FileSize {
        self.original_size
    }

    /// Size of the compressed artifact in bytes
    pub fn compressed_size(&self) -> FileSize {
        self.compressed_size
    }

    /// original / compressed, or zero when nothing was produced
    pub fn compression_ratio(&self) -> f64 {
        self.compression_ratio
    }

    /// Wall-clock compression time in seconds
    pub fn compression_time(&self) -> f64 {
        self.compression_time
    }

    /// Weissman score relative to the reference algorithm
    pub fn weissman_score(&self) -> f64 {
        self.weissman_score
    }

    /// Replace the Weissman score
    pub fn with_score(mut self, score: f64) -> Self {
        self.weissman_score = score;
        self
    }
}

/// original / compressed, with zero for an empty artifact
pub fn compression_ratio(original_size: FileSize, compressed_size: FileSize) -> f64 {
    if compressed_size == 0 {
        0.0
    } else {
        original_size as f64 / compressed_size as f64
    }
}

/// Sort results by descending Weissman score
pub fn sort_by_score(results: &mut [BenchmarkResult]) {
    results.sort_by(|a, b| b.weissman_score.total_cmp(&a.weissman_score));
}

/// Format a byte count with binary thresholds (B, KB, MB, GB)
pub fn format_size(bytes: FileSize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.2} KB", size / KB)
    } else if size < GB {
        format!("{:.2} MB", size / MB)
    } else {
        format!("{:.2} GB", size / GB)
    }
}
