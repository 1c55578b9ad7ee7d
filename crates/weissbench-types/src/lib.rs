//! Core type system and error handling for weissbench
//!
//! This crate provides the foundational types shared by every weissbench crate:
//!
//! - **Error handling**: one error enum with kinds and severity levels
//! - **Algorithms**: the closed set of benchmarked algorithms and user selections
//! - **Results**: the per-run measurement record
//! - **Configuration values**: validated scaling constant and codec levels
//! - **Traits**: cancellation and progress observation
//!
//! # Features
//!
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use weissbench_types::{AlgorithmSelection, CompressionAlgorithm, Result};
//!
//! fn example() -> Result<()> {
//!     let selection: AlgorithmSelection = "lzma,gzip".parse()?;
//!     assert!(selection.contains_reference());
//!     assert_eq!(selection.algorithms()[0], CompressionAlgorithm::Lzma);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{Alpha, CodecLevels, CompressionLevel, ScratchConfig};
pub use error::{Error, ErrorKind, ErrorSeverity};
pub use result::Result;
pub use traits::*;
pub use types::*;
