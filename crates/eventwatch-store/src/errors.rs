//! Error handling for eventwatch-store
//!
//! Wraps eventwatch-core ExError with store-specific helpers

use eventwatch_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a snapshot decoding error
pub fn corrupt_snapshot(path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("load_snapshot")
        .with_message(format!("Unreadable snapshot {}: {}", path.display(), err))
}

/// Create a snapshot encoding error
pub fn encode_failed(err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("save_snapshot")
        .with_message(err.to_string())
}

/// Wrap a lower-level failure as a persistence error for `scope`
pub fn persistence(scope: &str, cause: ExError) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("save_snapshot")
        .with_scope(scope)
        .with_message("Snapshot could not be written")
        .with_source(cause)
}

/// Create an unsupported schema version error
pub fn unsupported_version(path: &Path, found: u32, supported: u32) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("load_snapshot")
        .with_message(format!(
            "Snapshot {} has schema version {}, newest supported is {}",
            path.display(),
            found,
            supported
        ))
}
