//! Input validation and sizing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use weissbench_types::{Error, FileSize, Result};

/// Check that the input exists and return it as an owned path
pub fn validate_input(path: &Path) -> Result<PathBuf> {
    fs::metadata(path).map_err(|e| Error::from_io_at(&e, path))?;
    Ok(path.to_path_buf())
}

/// Size of the input: a file's length, or the sum of every file under a directory
///
/// Symbolic links to regular files count with their target's length. Links
/// to directories are not followed.
pub fn original_size(path: &Path) -> Result<FileSize> {
    let metadata = fs::metadata(path).map_err(|e| Error::from_io_at(&e, path))?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut total: FileSize = 0;
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| walk_error(e, path))?;
        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            let len = fs::metadata(entry.path())
                .map_err(|e| Error::from_io_at(&e, entry.path()))?
                .len();
            total = total.saturating_add(len);
        }
    }
    Ok(total)
}

fn walk_error(error: walkdir::Error, root: &Path) -> Error {
    let path = error.path().unwrap_or(root).to_path_buf();
    Error::from_io_at(&io::Error::from(error), &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            validate_input(&missing),
            Err(Error::FileNotFound { .. })
        ));
        assert!(matches!(
            original_size(&missing),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_file_size() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.bin");
        std::fs::write(&file, vec![1u8; 4096]).unwrap();

        assert_eq!(validate_input(&file).unwrap(), file);
        assert_eq!(original_size(&file).unwrap(), 4096);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(original_size(dir.path()).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_counts_target_length() {
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("data.bin");
        std::fs::write(&target, vec![7u8; 5000]).unwrap();

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("real.bin"), vec![1u8; 1000]).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.bin")).unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked_dir")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        assert_eq!(original_size(dir.path()).unwrap(), 6000);
    }

    proptest! {
        #[test]
        fn test_directory_size_is_sum_of_files(
            sizes in prop::collection::vec(0usize..2048, 1..8),
            depth in 0usize..3,
        ) {
            let dir = TempDir::new().unwrap();
            let mut target = dir.path().to_path_buf();
            for level in 0..depth {
                target = target.join(format!("level{}", level));
            }
            std::fs::create_dir_all(&target).unwrap();

            for (i, size) in sizes.iter().enumerate() {
                let parent = if i % 2 == 0 { dir.path() } else { target.as_path() };
                std::fs::write(parent.join(format!("file{}.bin", i)), vec![0u8; *size]).unwrap();
            }

            let expected: usize = sizes.iter().sum();
            prop_assert_eq!(original_size(dir.path()).unwrap(), expected as u64);
        }
    }
}
