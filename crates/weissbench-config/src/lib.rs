//! Configuration management for weissbench
//!
//! This crate loads the benchmark configuration from layered sources:
//!
//! - **Defaults**: every option has a default, so no file is required
//! - **Files**: YAML, TOML or JSON, detected by extension
//! - **Environment overrides**: `WEISSBENCH__SECTION__KEY` variables
//! - **Validation**: out-of-range values are rejected before a run starts
//!
//! # Examples
//!
//! ```rust,no_run
//! use weissbench_config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .add_defaults()
//!     .add_source_file("weissbench.yaml")
//!     .add_env_prefix("WEISSBENCH")
//!     .build()
//!     .expect("Failed to load configuration");
//!
//! println!("Alpha: {}", config.benchmark.alpha.get());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use weissbench_export::ExportFormat;
use weissbench_types::{Alpha, CodecLevels, CompressionAlgorithm, ScratchConfig};

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WEISSBENCH";

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for weissbench
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Benchmark configuration
    pub benchmark: BenchmarkConfig,
    /// Codec levels
    pub codecs: CodecLevels,
    /// Scratch artifact configuration
    pub scratch: ScratchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Export configuration
    pub export: ExportConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.benchmark.algorithms.is_empty() {
            return Err(ConfigError::invalid_value(
                "benchmark.algorithms",
                "at least one algorithm is required",
            ));
        }

        self.codecs
            .validate()
            .map_err(|message| ConfigError::invalid_value("codecs.bzip2", message))?;

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::validation(format!(
                "Log level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Scaling constant for Weissman scores
    pub alpha: Alpha,
    /// Algorithms measured when none are given on the command line
    pub algorithms: Vec<CompressionAlgorithm>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            alpha: Alpha::default(),
            algorithms: CompressionAlgorithm::ALL.to_vec(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag or `RUST_LOG` is given
    pub level: String,
    /// Enable JSON formatting
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format written after every run
    pub format: Option<ExportFormat>,
    /// Destination file for the export
    pub output: Option<PathBuf>,
}
