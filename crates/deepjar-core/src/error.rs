//! Error types for nested archive traversal.

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `TraversalError`.
pub type Result<T> = std::result::Result<T, TraversalError>;

/// Errors that can occur while listing an archive.
///
/// Any of these aborts the traversal of the current top-level input. Callers
/// listing several inputs are expected to report the error and move on.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// Reading the archive or one of its members failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a readable ZIP archive.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// The name filter pattern does not compile.
    #[error("invalid filter pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why the regex engine rejected it.
        reason: String,
    },

    /// The traversal configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TraversalError {
    /// Returns `true` if the underlying cause is an I/O failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepjar_core::TraversalError;
    ///
    /// let err = TraversalError::Io(std::io::Error::other("disk gone"));
    /// assert!(err.is_io());
    ///
    /// let err = TraversalError::InvalidArchive("bad header".to_string());
    /// assert!(!err.is_io());
    /// ```
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepjar_core::TraversalError;
    ///
    /// let err = TraversalError::InvalidArchive("bad header".to_string());
    /// assert_eq!(err.context(), Some("bad header"));
    ///
    /// let err = TraversalError::Io(std::io::Error::other("x"));
    /// assert_eq!(err.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) | Self::InvalidConfig(msg) => Some(msg),
            Self::InvalidPattern { reason, .. } => Some(reason),
            Self::Io(_) => None,
        }
    }
}

impl From<ZipError> for TraversalError {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}
