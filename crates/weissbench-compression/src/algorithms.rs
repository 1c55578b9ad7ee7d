//! Compression variant implementations
//!
//! Every variant compresses a file or directory into a scratch artifact and
//! reports the artifact's size on disk together with the wall-clock time spent
//! producing it. Only the compression itself is timed: creating the scratch
//! file, reading its size and deleting it happen outside the measured interval.

use crate::archive::{append_input, stream_input, write_zip};
use crate::scratch::ScratchArtifact;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;
use weissbench_types::{
    CancelFlag, Cancellable, CodecLevels, CompressionAlgorithm, Error, FileSize, Result,
    ScratchConfig,
};

/// Measurement produced by one variant run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOutcome {
    /// Size of the compressed artifact on disk, in bytes
    pub compressed_size: FileSize,
    /// Wall-clock time spent compressing
    pub elapsed: Duration,
}

impl CompressionOutcome {
    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Trait for compression variant implementations
pub trait Compressor {
    /// Compress the file or directory at `input` and measure the result
    fn compress(&self, input: &Path) -> Result<CompressionOutcome>;

    /// Get the algorithm type
    fn algorithm_type(&self) -> CompressionAlgorithm;
}

/// Settings shared by every variant
#[derive(Debug, Clone, Default)]
pub struct CompressorOptions {
    /// Codec levels
    pub levels: CodecLevels,
    /// Scratch artifact placement
    pub scratch: ScratchConfig,
    /// Cancellation flag polled while reading input
    pub cancel: CancelFlag,
}

impl CompressorOptions {
    /// Options with default levels and scratch placement, observing `cancel`
    pub fn with_cancel(cancel: CancelFlag) -> Self {
        Self {
            cancel,
            ..Self::default()
        }
    }
}

/// Compressor implementation factory
pub struct CompressorFactory;

impl CompressorFactory {
    /// Create a compressor for the specified algorithm
    pub fn create(
        algorithm: CompressionAlgorithm,
        options: &CompressorOptions,
    ) -> Box<dyn Compressor + Send + Sync> {
        let options = options.clone();
        match algorithm {
            CompressionAlgorithm::Gzip => Box::new(GzipCompressor::new(options)),
            CompressionAlgorithm::Bzip2 => Box::new(Bzip2Compressor::new(options)),
            CompressionAlgorithm::Lzma => Box::new(LzmaCompressor::new(options)),
            CompressionAlgorithm::Zip => Box::new(ZipCompressor::new(options)),
            CompressionAlgorithm::Tar => Box::new(TarCompressor::new(options)),
        }
    }

    /// Get all available algorithms
    pub fn all_algorithms() -> Vec<CompressionAlgorithm> {
        CompressionAlgorithm::ALL.to_vec()
    }
}

/// Sink handed to a variant's writer: the scratch artifact behind a buffer
type ArtifactSink<'a> = BufWriter<&'a File>;

/// Run `write` against a fresh scratch artifact and measure it
///
/// The artifact is deleted before returning, whether `write` succeeded or not.
fn measure<F>(
    algorithm: CompressionAlgorithm,
    input: &Path,
    options: &CompressorOptions,
    write: F,
) -> Result<CompressionOutcome>
where
    F: FnOnce(ArtifactSink<'_>) -> io::Result<()>,
{
    options.cancel.check()?;

    let artifact = ScratchArtifact::create(&options.scratch, algorithm)?;
    let sink = BufWriter::new(artifact.file());

    let start = Instant::now();
    let written = write(sink);
    let elapsed = start.elapsed();

    if let Err(e) = written {
        return Err(codec_error(algorithm, input, &e, &options.cancel));
    }

    let compressed_size = artifact.size_on_disk()?;
    artifact.release()?;

    debug!(
        "{} compression of {} completed: {} bytes in {:.4} seconds",
        algorithm,
        input.display(),
        compressed_size,
        elapsed.as_secs_f64()
    );

    Ok(CompressionOutcome {
        compressed_size,
        elapsed,
    })
}

fn codec_error(
    algorithm: CompressionAlgorithm,
    input: &Path,
    error: &io::Error,
    cancel: &CancelFlag,
) -> Error {
    if cancel.is_cancelled() {
        Error::Cancelled
    } else {
        Error::compression(format!(
            "{} failed on {}: {}",
            algorithm,
            input.display(),
            error
        ))
    }
}

/// gzip (DEFLATE) stream compressor
#[derive(Debug, Clone, Default)]
pub struct GzipCompressor {
    options: CompressorOptions,
}

impl GzipCompressor {
    /// Create a new gzip compressor
    pub fn new(options: CompressorOptions) -> Self {
        Self { options }
    }
}

impl Compressor for GzipCompressor {
    fn compress(&self, input: &Path) -> Result<CompressionOutcome> {
        let level = flate2::Compression::new(self.options.levels.gzip.get());
        let cancel = &self.options.cancel;

        measure(self.algorithm_type(), input, &self.options, |sink| {
            let encoder = flate2::write::GzEncoder::new(sink, level);
            stream_input(input, encoder, cancel)?.finish()?.flush()
        })
    }

    fn algorithm_type(&self) -> CompressionAlgorithm {
        CompressionAlgorithm::Gzip
    }
}

/// bzip2 stream compressor
#[derive(Debug, Clone, Default)]
pub struct Bzip2Compressor {
    options: CompressorOptions,
}

impl Bzip2Compressor {
    /// Create a new bzip2 compressor
    pub fn new(options: CompressorOptions) -> Self {
        Self { options }
    }
}

impl Compressor for Bzip2Compressor {
    fn compress(&self, input: &Path) -> Result<CompressionOutcome> {
        // bzip2 has no level 0
        let level = bzip2::Compression::new(self.options.levels.bzip2.get().max(1));
        let cancel = &self.options.cancel;

        measure(self.algorithm_type(), input, &self.options, |sink| {
            let encoder = bzip2::write::BzEncoder::new(sink, level);
            stream_input(input, encoder, cancel)?.finish()?.flush()
        })
    }

    fn algorithm_type(&self) -> CompressionAlgorithm {
        CompressionAlgorithm::Bzip2
    }
}

/// LZMA compressor writing the xz container
#[derive(Debug, Clone, Default)]
pub struct LzmaCompressor {
    options: CompressorOptions,
}

impl LzmaCompressor {
    /// Create a new xz compressor
    pub fn new(options: CompressorOptions) -> Self {
        Self { options }
    }
}

impl Compressor for LzmaCompressor {
    fn compress(&self, input: &Path) -> Result<CompressionOutcome> {
        let preset = self.options.levels.lzma.get();
        let cancel = &self.options.cancel;

        measure(self.algorithm_type(), input, &self.options, |sink| {
            let encoder = xz2::write::XzEncoder::new(sink, preset);
            stream_input(input, encoder, cancel)?.finish()?.flush()
        })
    }

    fn algorithm_type(&self) -> CompressionAlgorithm {
        CompressionAlgorithm::Lzma
    }
}

/// zip archive compressor using DEFLATE entries
#[derive(Debug, Clone, Default)]
pub struct ZipCompressor {
    options: CompressorOptions,
}

impl ZipCompressor {
    /// Create a new zip compressor
    pub fn new(options: CompressorOptions) -> Self {
        Self { options }
    }
}

impl Compressor for ZipCompressor {
    fn compress(&self, input: &Path) -> Result<CompressionOutcome> {
        let level = self.options.levels.zip;
        let cancel = &self.options.cancel;

        measure(self.algorithm_type(), input, &self.options, |sink| {
            write_zip(sink, input, level, cancel)?.flush()
        })
    }

    fn algorithm_type(&self) -> CompressionAlgorithm {
        CompressionAlgorithm::Zip
    }
}

/// Uncompressed tar archiver
#[derive(Debug, Clone, Default)]
pub struct TarCompressor {
    options: CompressorOptions,
}

impl TarCompressor {
    /// Create a new tar archiver
    pub fn new(options: CompressorOptions) -> Self {
        Self { options }
    }
}

impl Compressor for TarCompressor {
    fn compress(&self, input: &Path) -> Result<CompressionOutcome> {
        let cancel = &self.options.cancel;

        measure(self.algorithm_type(), input, &self.options, |sink| {
            let mut builder = tar::Builder::new(sink);
            append_input(&mut builder, input, cancel)?;
            builder.into_inner()?.flush()
        })
    }

    fn algorithm_type(&self) -> CompressionAlgorithm {
        CompressionAlgorithm::Tar
    }
}
