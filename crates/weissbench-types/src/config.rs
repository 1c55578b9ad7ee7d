//! Validated configuration values
//!
//! Newtypes that can only hold values the scorer and the codecs accept.

/// Scaling constant applied to every Weissman score
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Alpha(f64);

impl Alpha {
    /// Default scaling constant
    pub const DEFAULT: f64 = 1.0;

    /// Create a new scaling constant; it must be finite and positive
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            Err(format!("Alpha {} must be a finite number", value))
        } else if value <= 0.0 {
            Err(format!("Alpha {} must be greater than zero", value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the scaling constant value
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for Alpha {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alpha> for f64 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

/// Codec compression level with validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// No compression
    pub const NONE: u32 = 0;
    /// Default DEFLATE level
    pub const DEFAULT: u32 = 6;
    /// Best compression
    pub const BEST: u32 = 9;

    /// Create a new compression level with validation
    pub fn new(level: u32) -> Result<Self, String> {
        if level > Self::BEST {
            Err(format!(
                "Compression level {} exceeds maximum {}",
                level,
                Self::BEST
            ))
        } else {
            Ok(Self(level))
        }
    }

    /// Best compression level
    pub fn best() -> Self {
        Self(Self::BEST)
    }

    /// Get the compression level value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Check if compression is enabled
    pub fn is_enabled(self) -> bool {
        self.0 > Self::NONE
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for CompressionLevel {
    type Error = String;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<CompressionLevel> for u32 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}

/// Per-codec compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecLevels {
    /// gzip level (0-9)
    pub gzip: CompressionLevel,
    /// bzip2 block size level (1-9)
    pub bzip2: CompressionLevel,
    /// xz preset (0-9)
    pub lzma: CompressionLevel,
    /// DEFLATE level for zip entries (0-9)
    pub zip: CompressionLevel,
}

impl CodecLevels {
    /// Check codec-specific constraints not covered by [`CompressionLevel`]
    pub fn validate(&self) -> Result<(), String> {
        if !self.bzip2.is_enabled() {
            return Err("bzip2 level must be between 1 and 9".to_string());
        }
        Ok(())
    }
}

impl Default for CodecLevels {
    fn default() -> Self {
        Self {
            gzip: CompressionLevel::best(),
            bzip2: CompressionLevel::best(),
            lzma: CompressionLevel::default(),
            zip: CompressionLevel::default(),
        }
    }
}

/// Where scratch artifacts live and how they are removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScratchConfig {
    /// Directory for scratch artifacts; the system temp dir when unset
    pub directory: Option<std::path::PathBuf>,
    /// Overwrite artifacts with zeros before unlinking them
    pub secure_delete: bool,
}
