//! Result type alias for weissbench operations

use crate::Error;

/// Result type alias for weissbench operations
pub type Result<T> = std::result::Result<T, Error>;
