//! weissbench integration test suite
//!
//! Cross-crate tests live under `tests/`. This library only carries the
//! fixtures they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Fixture builders used across the integration tests so every test
/// measures the same kinds of input.
pub mod test_utils;
