//! CSV exporter
//!
//! One header row naming the record fields, then one row per result. No field
//! ever needs quoting: algorithms are bare tokens and everything else is a
//! number.

use crate::exporter::{number, record_from_fields, Exporter, FIELDS};
use crate::format::ExportFormat;
use std::io::Write;
use weissbench_types::{BenchmarkResult, Error, Result};

/// Comma-separated values with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "{}", FIELDS.join(","))?;
        for result in results {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                result.algorithm(),
                result.original_size(),
                result.compressed_size(),
                number(result.compression_ratio()),
                number(result.compression_time()),
                number(result.weissman_score()),
            )?;
        }
        Ok(())
    }

    fn parse(&self, input: &str) -> Result<Vec<BenchmarkResult>> {
        let mut lines = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty());

        let Some(header) = lines.next() else {
            return Ok(Vec::new());
        };
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        if columns != FIELDS {
            return Err(Error::export(format!("Unexpected CSV header: {}", header)));
        }

        lines
            .enumerate()
            .map(|(row, line)| {
                let values: Vec<&str> = line.split(',').collect();
                let fields: [&str; 6] = values.try_into().map_err(|values: Vec<&str>| {
                    Error::export(format!(
                        "CSV row {} has {} fields, expected {}",
                        row + 1,
                        values.len(),
                        FIELDS.len()
                    ))
                })?;
                record_from_fields(fields)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weissbench_types::CompressionAlgorithm;

    #[test]
    fn test_csv_layout() {
        let results = vec![BenchmarkResult::from_parts(
            CompressionAlgorithm::Zip,
            10000,
            4000,
            2.5,
            0.7,
            0.8,
        )];

        let rendered = CsvExporter.render(&results).unwrap();

        assert_eq!(
            rendered,
            "algorithm,original_size,compressed_size,compression_ratio,compression_time,weissman_score\n\
             zip,10000,4000,2.5,0.7,0.8\n"
        );
    }

    #[test]
    fn test_csv_accepts_crlf_and_blank_lines() {
        let input = "algorithm,original_size,compressed_size,compression_ratio,compression_time,weissman_score\r\n\
                     \r\n\
                     tar,100,10240,0.009765625,0.002,-3.5\r\n";

        let parsed = CsvExporter.parse(input).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].algorithm(), CompressionAlgorithm::Tar);
        assert_eq!(parsed[0].weissman_score(), -3.5);
    }

    #[test]
    fn test_csv_rejects_bad_rows() {
        let header = FIELDS.join(",");

        let short = format!("{}\ngzip,1,2\n", header);
        assert!(CsvExporter.parse(&short).is_err());

        let wrong_header = "name,size\ngzip,1\n";
        assert!(CsvExporter.parse(wrong_header).is_err());
    }
}
