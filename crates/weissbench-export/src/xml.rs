//! XML exporter
//!
//! Documents look like:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <CompressionResults>
//!   <Result>
//!     <algorithm>gzip</algorithm>
//!     <original_size>10000</original_size>
//!     ...
//!   </Result>
//! </CompressionResults>
//! ```
//!
//! The reader only understands this shape; it is not a general XML parser.

use crate::exporter::{number, record_from_fields, Exporter, FIELDS};
use crate::format::ExportFormat;
use std::io::Write;
use weissbench_types::{BenchmarkResult, Error, Result};

const ROOT: &str = "CompressionResults";
const RECORD: &str = "Result";

/// `<CompressionResults>` document with one `<Result>` per record
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlExporter;

impl Exporter for XmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn write(&self, results: &[BenchmarkResult], writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(writer, "<{}>", ROOT)?;
        for result in results {
            let values = [
                result.algorithm().to_string(),
                result.original_size().to_string(),
                result.compressed_size().to_string(),
                number(result.compression_ratio()),
                number(result.compression_time()),
                number(result.weissman_score()),
            ];

            writeln!(writer, "  <{}>", RECORD)?;
            for (field, value) in FIELDS.iter().zip(values.iter()) {
                writeln!(writer, "    <{0}>{1}</{0}>", field, escape(value))?;
            }
            writeln!(writer, "  </{}>", RECORD)?;
        }
        writeln!(writer, "</{}>", ROOT)?;
        Ok(())
    }

    fn parse(&self, input: &str) -> Result<Vec<BenchmarkResult>> {
        let body = match element_text(input, ROOT) {
            Some(body) => body,
            None if is_empty_element(input, ROOT) => return Ok(Vec::new()),
            None => return Err(Error::export(format!("Missing <{}> element", ROOT))),
        };

        let open = format!("<{}>", RECORD);
        let close = format!("</{}>", RECORD);
        let mut results = Vec::new();
        let mut rest = body;

        while let Some(start) = rest.find(&open) {
            let after_open = &rest[start + open.len()..];
            let end = after_open
                .find(&close)
                .ok_or_else(|| Error::export(format!("Unterminated <{}> element", RECORD)))?;
            let record = &after_open[..end];

            let mut fields = [""; 6];
            for (slot, name) in fields.iter_mut().zip(FIELDS) {
                *slot = element_text(record, name)
                    .ok_or_else(|| Error::export(format!("Missing <{}> element", name)))?;
            }
            let unescaped = fields.map(unescape);
            results.push(record_from_fields([
                &unescaped[0],
                &unescaped[1],
                &unescaped[2],
                &unescaped[3],
                &unescaped[4],
                &unescaped[5],
            ])?);

            rest = &after_open[end + close.len()..];
        }

        Ok(results)
    }
}

/// Text between the first `<tag>` and the following `</tag>`
fn element_text<'a>(input: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = input.find(&open)? + open.len();
    let end = input[start..].find(&close)? + start;
    Some(&input[start..end])
}

fn is_empty_element(input: &str, tag: &str) -> bool {
    input.contains(&format!("<{}/>", tag)) || input.contains(&format!("<{} />", tag))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
