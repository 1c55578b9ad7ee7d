//! Unified test utilities for weissbench tests
//!
//! Inputs are deterministic so compressed sizes are stable between runs.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use weissbench_types::{BenchmarkResult, CompressionAlgorithm};

/// Test data generation patterns
#[derive(Debug, Clone, Copy)]
pub enum TestDataPattern {
    /// One byte repeated - highly compressible
    Repeated,
    /// Pseudo-random bytes - close to incompressible
    Random,
    /// Repeating text
    Text,
}

/// Generate test data with specified pattern
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Repeated => vec![b'A'; size],
        TestDataPattern::Random => {
            // xorshift keeps the data reproducible
            let mut state: u64 = 0x2545_F491_4F6C_DD1D;
            (0..size)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (state >> 24) as u8
                })
                .collect()
        }
        TestDataPattern::Text => b"The quick brown fox jumps over the lazy dog. "
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect(),
    }
}

/// Create a file with test data inside `temp_dir`
pub fn create_test_file(
    temp_dir: &TempDir,
    name: &str,
    size: usize,
    pattern: TestDataPattern,
) -> PathBuf {
    let file_path = temp_dir.path().join(name);
    fs::write(&file_path, generate_test_data(size, pattern)).expect("Failed to write test file");
    file_path
}

/// Files created by [`create_test_directory_structure`], relative to its base
pub const DIRECTORY_FILES: [(&str, usize); 5] = [
    ("small.txt", 1024),
    ("medium.txt", 64 * 1024),
    ("subdir1/file1.txt", 2048),
    ("subdir2/file2.txt", 4096),
    ("subdir1/nested/file3.txt", 8192),
];

/// Create a nested directory of text files under `base_path`
///
/// Returns the sum of the file sizes.
pub fn create_test_directory_structure(base_path: &Path) -> u64 {
    for dir in ["subdir1/nested", "subdir2", "empty"] {
        fs::create_dir_all(base_path.join(dir)).expect("Failed to create test directory");
    }

    let mut total = 0u64;
    for (relative, size) in DIRECTORY_FILES {
        fs::write(
            base_path.join(relative),
            generate_test_data(size, TestDataPattern::Text),
        )
        .expect("Failed to write test file");
        total += size as u64;
    }
    total
}

/// Number of entries left in `dir`
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .count()
}

/// The two-record result set used by export round-trip tests
pub fn sample_results() -> Vec<BenchmarkResult> {
    vec![
        BenchmarkResult::from_parts(CompressionAlgorithm::Gzip, 10000, 5000, 2.0, 0.5, 1.0),
        BenchmarkResult::from_parts(CompressionAlgorithm::Bzip2, 10000, 4000, 2.5, 0.7, 0.8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_test_data_patterns() {
        let size = 1024;

        let repeated = generate_test_data(size, TestDataPattern::Repeated);
        assert_eq!(repeated.len(), size);
        assert!(repeated.iter().all(|&b| b == b'A'));

        let random = generate_test_data(size, TestDataPattern::Random);
        assert_eq!(random, generate_test_data(size, TestDataPattern::Random));

        let text = generate_test_data(size, TestDataPattern::Text);
        assert!(text.starts_with(b"The quick"));
    }

    #[test]
    fn test_create_test_directory_structure() {
        let temp_dir = TempDir::new().unwrap();
        let total = create_test_directory_structure(temp_dir.path());

        assert_eq!(total, 1024 + 64 * 1024 + 2048 + 4096 + 8192);
        assert!(temp_dir.path().join("subdir1/nested/file3.txt").exists());
        assert_eq!(entry_count(&temp_dir.path().join("empty")), 0);
    }
}
