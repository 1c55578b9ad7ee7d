//! Archive writers shared by the variants
//!
//! Stream codecs compress a single file's bytes directly and a directory as a
//! tar stream. The tar variant writes the same stream uncompressed, and the
//! zip variant stores files individually.

use crate::reader::{cancelled_io_error, CancellableReader};
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use weissbench_types::{CancelFlag, Cancellable, CompressionLevel};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const FALLBACK_ROOT_NAME: &str = "input";

/// Name under which the input itself is archived
///
/// This is the final path component, resolved through the filesystem for
/// paths such as `.` that have none.
pub fn archive_root_name(input: &Path) -> PathBuf {
    input
        .file_name()
        .map(PathBuf::from)
        .or_else(|| {
            input
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(PathBuf::from))
        })
        .unwrap_or_else(|| PathBuf::from(FALLBACK_ROOT_NAME))
}

/// Write the input into `encoder`: raw bytes for a file, a tar stream for a directory
pub fn stream_input<W: Write>(input: &Path, mut encoder: W, cancel: &CancelFlag) -> io::Result<W> {
    if input.is_file() {
        let mut reader = CancellableReader::new(File::open(input)?, cancel.clone());
        io::copy(&mut reader, &mut encoder)?;
        Ok(encoder)
    } else {
        let mut builder = tar::Builder::new(encoder);
        append_input(&mut builder, input, cancel)?;
        builder.into_inner()
    }
}

/// Append the input to a tar archive under its root name
///
/// Directories are walked recursively in name order so repeated runs produce
/// the same archive. Symbolic links are stored as links.
pub fn append_input<W: Write>(
    builder: &mut tar::Builder<W>,
    input: &Path,
    cancel: &CancelFlag,
) -> io::Result<()> {
    builder.follow_symlinks(false);
    let root = archive_root_name(input);

    for entry in WalkDir::new(input).sort_by_file_name() {
        if cancel.is_cancelled() {
            return Err(cancelled_io_error());
        }

        let entry = entry?;
        let name = entry_name(&root, input, entry.path());
        let file_type = entry.file_type();

        if file_type.is_dir() {
            builder.append_dir(&name, entry.path())?;
        } else if file_type.is_file() {
            let file = File::open(entry.path())?;
            let mut header = tar::Header::new_gnu();
            header.set_metadata(&file.metadata()?);
            builder.append_data(
                &mut header,
                &name,
                CancellableReader::new(file, cancel.clone()),
            )?;
        } else if file_type.is_symlink() {
            builder.append_path_with_name(entry.path(), &name)?;
        }
    }

    Ok(())
}

/// Write a deflate zip archive of the input into `sink`
///
/// A single file is stored under its own name. A directory contributes every
/// file beneath it, named relative to the directory's parent, and no
/// directory entries. Symbolic links to regular files are stored with their
/// target's contents.
pub fn write_zip<W: Write + Seek>(
    sink: W,
    input: &Path,
    level: CompressionLevel,
    cancel: &CancelFlag,
) -> io::Result<W> {
    let mut zip = ZipWriter::new(sink);
    let root = archive_root_name(input);
    let base = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(level.get())));

    for entry in WalkDir::new(input).sort_by_file_name() {
        if cancel.is_cancelled() {
            return Err(cancelled_io_error());
        }

        let entry = entry?;
        let file_type = entry.file_type();
        if !(file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())) {
            continue;
        }

        let file = File::open(entry.path())?;
        let len = file.metadata()?.len();
        let options = base.clone().large_file(len >= u64::from(u32::MAX));

        let name = zip_entry_name(&entry_name(&root, input, entry.path()));
        zip.start_file(name, options).map_err(zip_io_error)?;
        io::copy(&mut CancellableReader::new(file, cancel.clone()), &mut zip)?;
    }

    zip.finish().map_err(zip_io_error)
}

fn entry_name(root: &Path, input: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(input) {
        Ok(relative) if relative.as_os_str().is_empty() => root.to_path_buf(),
        Ok(relative) => root.join(relative),
        Err(_) => root.to_path_buf(),
    }
}

/// Zip entry names always use forward slashes
fn zip_entry_name(name: &Path) -> String {
    name.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn zip_io_error(error: zip::result::ZipError) -> io::Error {
    match error {
        zip::result::ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
