//! Error helpers for eventwatch-engine
//!
//! Every fallible engine call returns the core's structured `ExError`.

use eventwatch_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Map a transport failure from the HTTP client
pub fn from_reqwest(url: &str, err: reqwest::Error) -> ExError {
    let kind = if err.is_timeout() {
        ExErrorKind::Timeout
    } else {
        ExErrorKind::Fetch
    };
    ExError::new(kind)
        .with_op("fetch_page")
        .with_message(format!("Request to {} failed: {}", url, err))
}

/// Upstream answered with a non-success status
pub fn bad_status(url: &str, status: reqwest::StatusCode) -> ExError {
    ExError::new(ExErrorKind::Fetch)
        .with_op("fetch_page")
        .with_message(format!("{} returned HTTP {}", url, status))
}

/// Create an error for a local page file that could not be read
pub fn read_page(path: &Path, err: std::io::Error) -> ExError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        ExErrorKind::NotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op("read_page")
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a configuration error
pub fn config_error(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(format!("{}: {}", path.display(), reason))
}
