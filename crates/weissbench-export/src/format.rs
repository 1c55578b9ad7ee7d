//! Export format selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use weissbench_types::{Error, Result};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
    /// Comma-separated values with a header row
    Csv,
    /// `<CompressionResults>` document
    Xml,
    /// Standalone HTML report, presentation only
    Html,
}

impl ExportFormat {
    /// Every supported format
    pub const ALL: [Self; 5] = [Self::Json, Self::Yaml, Self::Csv, Self::Xml, Self::Html];

    /// Stable token used on the command line and in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }

    /// Conventional file extension, without the dot
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    /// Whether exported documents can be read back
    pub fn is_parseable(self) -> bool {
        !matches!(self, Self::Html)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            "html" | "htm" => Ok(Self::Html),
            other => Err(Error::config(format!("Unsupported export format: {}", other))),
        }
    }
}
