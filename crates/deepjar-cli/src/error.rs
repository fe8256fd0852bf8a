//! Error conversion utilities for CLI.
//!
//! Converts deepjar-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use deepjar_core::TraversalError;
use std::path::Path;

/// Converts `TraversalError` to user-friendly anyhow error with context
pub fn convert_traversal_error(err: TraversalError, archive: &Path) -> anyhow::Error {
    match err {
        TraversalError::Io(io_err) => {
            anyhow!(
                "I/O error while listing '{}': {}",
                archive.display(),
                io_err
            )
        }
        TraversalError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive or one of its nested archives may be corrupted.",
                archive.display(),
                reason
            )
        }
        TraversalError::InvalidPattern { pattern, reason } => {
            anyhow!(
                "Invalid filter pattern '{pattern}': {reason}\n\
                 HINT: --filter takes a regular expression matched against the full entry path."
            )
        }
        TraversalError::InvalidConfig(reason) => {
            anyhow!(
                "{reason}\n\
                 HINT: --max-size must be greater than zero."
            )
        }
    }
}

/// Converts a configuration error raised before any archive is opened.
pub fn convert_config_error(err: TraversalError) -> anyhow::Error {
    convert_traversal_error(err, Path::new("-"))
}
