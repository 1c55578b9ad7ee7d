//! serde-backed exporters

use crate::exporter::Exporter;
use crate::format::ExportFormat;
use std::io::Write;
use weissbench_types::{BenchmarkResult, Error, Result};

/// Pretty-printed JSON array of records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, results)
            .map_err(|e| Error::export(format!("Failed to write JSON: {}", e)))?;
        writeln!(writer)?;
        Ok(())
    }

    fn parse(&self, input: &str) -> Result<Vec<BenchmarkResult>> {
        serde_json::from_str(input).map_err(|e| Error::export(format!("Invalid JSON: {}", e)))
    }
}

/// YAML sequence of records
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlExporter;

impl Exporter for YamlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Yaml
    }

    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()> {
        serde_yaml::to_writer(writer, results)
            .map_err(|e| Error::export(format!("Failed to write YAML: {}", e)))
    }

    fn parse(&self, input: &str) -> Result<Vec<BenchmarkResult>> {
        serde_yaml::from_str(input).map_err(|e| Error::export(format!("Invalid YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weissbench_types::CompressionAlgorithm;

    #[test]
    fn test_json_layout() {
        let results = vec![BenchmarkResult::from_parts(
            CompressionAlgorithm::Lzma,
            2048,
            512,
            4.0,
            0.25,
            1.5,
        )];

        let rendered = JsonExporter.render(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["algorithm"], "lzma");
        assert_eq!(value[0]["original_size"], 2048);
        assert_eq!(value[0]["compression_ratio"], 4.0);

        let algorithm_at = rendered.find("\"algorithm\"").unwrap();
        let score_at = rendered.find("\"weissman_score\"").unwrap();
        assert!(algorithm_at < score_at);
        assert!(rendered.contains("\n  {"));
    }

    #[test]
    fn test_json_score_defaults_to_zero() {
        let input = r#"[{"algorithm":"tar","original_size":10,"compressed_size":2048,
            "compression_ratio":0.0048828125,"compression_time":0.001}]"#;

        let parsed = JsonExporter.parse(input).unwrap();
        assert_eq!(parsed[0].weissman_score(), 0.0);
    }

    #[test]
    fn test_yaml_rejects_unknown_algorithm() {
        let input = "- algorithm: snappy\n  original_size: 1\n  compressed_size: 1\n  \
                     compression_ratio: 1.0\n  compression_time: 1.0\n  weissman_score: 1.0\n";

        assert!(matches!(YamlExporter.parse(input), Err(Error::Export { .. })));
    }
}
