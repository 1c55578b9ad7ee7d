//! Result export formats for weissbench
//!
//! Benchmark results can be written as JSON, YAML, CSV, XML or an HTML report.
//! Every format except HTML carries the raw field values in a fixed order and
//! can be read back into the same results.
//!
//! # Examples
//!
//! ```rust
//! use weissbench_export::{ExportFormat, ExporterFactory};
//! use weissbench_types::{BenchmarkResult, CompressionAlgorithm};
//!
//! # fn example() -> weissbench_types::Result<()> {
//! let results = vec![BenchmarkResult::from_parts(
//!     CompressionAlgorithm::Gzip, 10000, 5000, 2.0, 0.5, 1.0,
//! )];
//!
//! let exporter = ExporterFactory::create("csv".parse::<ExportFormat>()?);
//! let text = exporter.render(&results)?;
//! assert_eq!(exporter.parse(&text)?, results);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod csv;
pub mod exporter;
pub mod format;
pub mod html;
pub mod structured;
pub mod xml;

pub use csv::CsvExporter;
pub use exporter::{export_to_file, import_from_file, Exporter, ExporterFactory, FIELDS};
pub use format::ExportFormat;
pub use html::HtmlExporter;
pub use structured::{JsonExporter, YamlExporter};
pub use xml::XmlExporter;
