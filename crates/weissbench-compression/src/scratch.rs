//! Scratch artifacts for compressed output
//!
//! Each variant writes its output to a fresh temporary file that exists only
//! long enough to read its size. The file is removed when the artifact is
//! released or dropped, so success, failure, panic unwinding and cancellation
//! all leave the scratch directory clean.

use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use weissbench_types::{CompressionAlgorithm, Error, FileSize, Result, ScratchConfig};

/// File name prefix for every scratch artifact
pub const SCRATCH_PREFIX: &str = "weissbench-";

const WIPE_CHUNK: usize = 64 * 1024;

/// A temporary compressed artifact that deletes itself
#[derive(Debug)]
pub struct ScratchArtifact {
    file: Option<NamedTempFile>,
    secure_delete: bool,
}

impl ScratchArtifact {
    /// Create an empty artifact for `algorithm` in the configured scratch directory
    pub fn create(config: &ScratchConfig, algorithm: CompressionAlgorithm) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX).suffix(algorithm.extension());

        let file = match &config.directory {
            Some(dir) => builder
                .tempfile_in(dir)
                .map_err(|e| Error::from_io_at(&e, dir))?,
            None => builder.tempfile()?,
        };

        debug!("Created scratch artifact {}", file.path().display());

        Ok(Self {
            file: Some(file),
            secure_delete: config.secure_delete,
        })
    }

    /// Path of the artifact on disk
    pub fn path(&self) -> &Path {
        self.named().path()
    }

    /// Open handle to the artifact
    pub fn file(&self) -> &File {
        self.named().as_file()
    }

    /// Size of the artifact as stored on disk
    pub fn size_on_disk(&self) -> Result<FileSize> {
        let path = self.path();
        let metadata = std::fs::metadata(path).map_err(|e| Error::from_io_at(&e, path))?;
        Ok(metadata.len())
    }

    /// Delete the artifact now, reporting a failed removal
    ///
    /// A failed wipe is logged and the file is still removed.
    pub fn release(mut self) -> Result<()> {
        if let Some(file) = self.file.take() {
            if self.secure_delete {
                wipe_or_warn(&file);
            }
            let path = file.path().to_path_buf();
            file.close().map_err(|e| Error::from_io_at(&e, &path))?;
            debug!("Removed scratch artifact {}", path.display());
        }
        Ok(())
    }

    fn named(&self) -> &NamedTempFile {
        // Only `release` and `drop` take the file, and both consume the artifact
        match &self.file {
            Some(file) => file,
            None => unreachable!("scratch artifact used after release"),
        }
    }
}

impl Drop for ScratchArtifact {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if self.secure_delete {
                wipe_or_warn(&file);
            }
            let path = file.path().to_path_buf();
            if let Err(e) = file.close() {
                warn!("Failed to remove scratch artifact {}: {}", path.display(), e);
            }
        }
    }
}

fn wipe_or_warn(file: &NamedTempFile) {
    if let Err(e) = wipe(file.as_file()) {
        warn!(
            "Failed to wipe {}, deleting without overwrite: {}",
            file.path().display(),
            e
        );
    }
}

/// Overwrite the whole file with zeros and sync it to disk
fn wipe(mut file: &File) -> io::Result<()> {
    let mut remaining = file.metadata()?.len();
    file.seek(SeekFrom::Start(0))?;

    let zeros = vec![0u8; WIPE_CHUNK];
    while remaining > 0 {
        let chunk = usize::try_from(remaining).map_or(WIPE_CHUNK, |r| r.min(WIPE_CHUNK));
        file.write_all(&zeros[..chunk])?;
        remaining -= chunk as u64;
    }

    file.sync_all()
}
