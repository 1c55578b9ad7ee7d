//! Exporter interface and factory

use crate::format::ExportFormat;
use crate::{csv::CsvExporter, html::HtmlExporter, xml::XmlExporter};
use crate::structured::{JsonExporter, YamlExporter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;
use weissbench_types::{BenchmarkResult, CompressionAlgorithm, Error, Result};

/// Record fields in export order
pub const FIELDS: [&str; 6] = [
    "algorithm",
    "original_size",
    "compressed_size",
    "compression_ratio",
    "compression_time",
    "weissman_score",
];

/// Trait for result exporters
pub trait Exporter {
    /// Format this exporter produces
    fn format(&self) -> ExportFormat;

    /// Write `results` to `writer`
    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()>;

    /// Read results back from a document this exporter wrote
    fn parse(&self, input: &str) -> Result<Vec<BenchmarkResult>>;

    /// Render `results` into a string
    fn render(&self, results: &[BenchmarkResult]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(results, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::export(e.to_string()))
    }
}

/// Exporter implementation factory
pub struct ExporterFactory;

impl ExporterFactory {
    /// Create an exporter for the specified format
    pub fn create(format: ExportFormat) -> Box<dyn Exporter + Send + Sync> {
        match format {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Yaml => Box::new(YamlExporter),
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Xml => Box::new(XmlExporter),
            ExportFormat::Html => Box::new(HtmlExporter),
        }
    }
}

/// Write `results` to a file at `path` in the given format
pub fn export_to_file(format: ExportFormat, results: &[BenchmarkResult], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::from_io_at(&e, path))?;
    let mut writer = BufWriter::new(file);

    ExporterFactory::create(format).write(results, &mut writer)?;
    writer.flush().map_err(|e| Error::from_io_at(&e, path))?;

    info!(
        "Exported {} results as {} to {}",
        results.len(),
        format,
        path.display()
    );
    Ok(())
}

/// Read results from a file at `path` written in the given format
pub fn import_from_file(format: ExportFormat, path: &Path) -> Result<Vec<BenchmarkResult>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::from_io_at(&e, path))?;
    ExporterFactory::create(format).parse(&contents)
}

/// Shortest text that parses back to the same value
pub(crate) fn number(value: f64) -> String {
    format!("{:?}", value)
}

/// Build a record from its six textual fields in [`FIELDS`] order
pub(crate) fn record_from_fields(fields: [&str; 6]) -> Result<BenchmarkResult> {
    let [algorithm, original, compressed, ratio, time, score] = fields;

    let algorithm: CompressionAlgorithm = algorithm
        .trim()
        .parse()
        .map_err(|e: Error| Error::export(e.to_string()))?;

    Ok(BenchmarkResult::from_parts(
        algorithm,
        parse_field(FIELDS[1], original)?,
        parse_field(FIELDS[2], compressed)?,
        parse_field(FIELDS[3], ratio)?,
        parse_field(FIELDS[4], time)?,
        parse_field(FIELDS[5], score)?,
    ))
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::export(format!("Invalid value for {}: {:?}", name, value)))
}
