//! HTML report exporter

use crate::exporter::Exporter;
use crate::format::ExportFormat;
use std::io::Write;
use weissbench_types::{format_size, sort_by_score, BenchmarkResult, Error, Result};

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Compression Benchmark Results</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 20px; }
    h1 { color: #333; }
    table { border-collapse: collapse; width: 100%; margin-top: 20px; }
    th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
    th { background-color: #f2f2f2; }
    tr:hover { background-color: #f5f5f5; }
    .container { max-width: 1200px; margin: 0 auto; }
  </style>
</head>
<body>
  <div class="container">
    <h1>Compression Benchmark Results</h1>
    <table>
      <thead>
        <tr>
          <th>Algorithm</th>
          <th>Original Size</th>
          <th>Compressed Size</th>
          <th>Compression Ratio</th>
          <th>Compression Time (s)</th>
          <th>Weissman Score</th>
        </tr>
      </thead>
      <tbody>
"#;

const TAIL: &str = r#"      </tbody>
    </table>
  </div>
</body>
</html>
"#;

/// Human-readable report sorted by descending score
///
/// Sizes are formatted for reading, so the report cannot be parsed back.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()> {
        let mut sorted = results.to_vec();
        sort_by_score(&mut sorted);

        writer.write_all(HEAD.as_bytes())?;
        for result in &sorted {
            writeln!(writer, "        <tr>")?;
            writeln!(writer, "          <td>{}</td>", escape_html(result.algorithm().as_str()))?;
            writeln!(writer, "          <td>{}</td>", format_size(result.original_size()))?;
            writeln!(writer, "          <td>{}</td>", format_size(result.compressed_size()))?;
            writeln!(writer, "          <td>{:.2}</td>", result.compression_ratio())?;
            writeln!(writer, "          <td>{:.4}</td>", result.compression_time())?;
            writeln!(writer, "          <td>{:.4}</td>", result.weissman_score())?;
            writeln!(writer, "        </tr>")?;
        }
        writer.write_all(TAIL.as_bytes())?;
        Ok(())
    }

    fn parse(&self, _input: &str) -> Result<Vec<BenchmarkResult>> {
        Err(Error::export("HTML reports cannot be imported"))
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
