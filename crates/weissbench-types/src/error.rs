//! Error types and handling for weissbench
//!
//! A single error enum covers every failure a benchmark invocation can surface:
//! input validation, configuration, codec failures, export, and cancellation.

use std::path::{Path, PathBuf};

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Low severity - the run was stopped on request
    Low,
    /// Medium severity - the run failed while measuring
    Medium,
    /// High severity - the run could not start
    High,
}

/// Main error type for weissbench operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Input path does not exist
    #[error("Path does not exist: {path}")]
    FileNotFound {
        /// Path that was not found
        path: PathBuf,
    },

    /// Permission denied
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// Path with permission issues
        path: PathBuf,
    },

    /// Configuration error, including unsupported algorithm tokens
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// A compression backend failed
    #[error("Compression error: {message}")]
    Compression {
        /// Error message describing the compression issue
        message: String,
    },

    /// Rendering or parsing an export failed
    #[error("Export error: {message}")]
    Export {
        /// Error message describing the export issue
        message: String,
    },

    /// The run was interrupted
    #[error("Benchmark cancelled")]
    Cancelled,

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// I/O related errors
    Io,
    /// Configuration errors
    Config,
    /// Compression errors
    Compression,
    /// Export errors
    Export,
    /// Cancellation
    Cancelled,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::FileNotFound { .. } | Self::PermissionDenied { .. } => {
                ErrorKind::Io
            }
            Self::Config { .. } => ErrorKind::Config,
            Self::Compression { .. } => ErrorKind::Compression,
            Self::Export { .. } => ErrorKind::Export,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Get the error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } | Self::PermissionDenied { .. } | Self::Config { .. } => {
                ErrorSeverity::High
            }
            Self::Io { .. }
            | Self::Compression { .. }
            | Self::Export { .. }
            | Self::Other { .. } => ErrorSeverity::Medium,
            Self::Cancelled => ErrorSeverity::Low,
        }
    }

    /// Check whether this error was caused by an interrupt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Map an I/O error that happened while touching `path`.
    ///
    /// `NotFound` and `PermissionDenied` keep the path; everything else is
    /// reported with the path prefixed to the message.
    pub fn from_io_at(error: &std::io::Error, path: &Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                message: format!("{}: {}", path.display(), error),
            },
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new compression error
    pub fn compression<S: Into<String>>(message: S) -> Self {
        Self::Compression {
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_error_kind_consistency(message in ".*") {
            let errors = vec![
                Error::Io { message: message.clone() },
                Error::Config { message: message.clone() },
                Error::Compression { message: message.clone() },
                Error::Export { message: message.clone() },
                Error::Other { message: message.clone() },
            ];

            for error in errors {
                let kind = error.kind();
                match error {
                    Error::Io { .. } => prop_assert_eq!(kind, ErrorKind::Io),
                    Error::Config { .. } => prop_assert_eq!(kind, ErrorKind::Config),
                    Error::Compression { .. } => prop_assert_eq!(kind, ErrorKind::Compression),
                    Error::Export { .. } => prop_assert_eq!(kind, ErrorKind::Export),
                    Error::Other { .. } => prop_assert_eq!(kind, ErrorKind::Other),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error = Error::from(io_error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(error.severity(), ErrorSeverity::Medium);
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_io_error_at_path() {
        let path = Path::new("/nonexistent/input.bin");

        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::from_io_at(&not_found, path);
        assert!(matches!(error, Error::FileNotFound { .. }));
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.to_string().contains("/nonexistent/input.bin"));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            Error::from_io_at(&denied, path),
            Error::PermissionDenied { .. }
        ));

        let other = std::io::Error::new(std::io::ErrorKind::Other, "bad sector");
        let error = Error::from_io_at(&other, path);
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("bad sector"));
    }

    #[test]
    fn test_config_error() {
        let error = Error::config("unsupported algorithm: snappy");

        assert_eq!(error.kind(), ErrorKind::Config);
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(!error.is_cancelled());
    }

    #[test]
    fn test_cancelled_error() {
        let error = Error::Cancelled;

        assert_eq!(error.kind(), ErrorKind::Cancelled);
        assert_eq!(error.severity(), ErrorSeverity::Low);
        assert!(error.is_cancelled());
    }
}
