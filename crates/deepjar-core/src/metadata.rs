//! Size and digest annotations printed after member names.

use md5::Digest;
use md5::Md5;

use crate::TraversalConfig;
use crate::buffer::MemberBytes;

/// Rendered in place of a value that could not be computed.
pub const PLACEHOLDER: &str = "[?]";

/// Hex digest of `bytes`: 32 lowercase characters, no separators.
///
/// Content fingerprint only; MD5 is not used for anything security related.
///
/// ```
/// use deepjar_core::metadata::digest_hex;
///
/// assert_eq!(digest_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[must_use]
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Annotation values for one member.
///
/// `None` in a requested column renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    size: Option<Column<u64>>,
    hash: Option<Column<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Column<T> {
    Known(T),
    Unavailable,
}

impl Annotation {
    /// No annotation at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Computes the requested columns from buffered content.
    #[must_use]
    pub fn of(bytes: &MemberBytes, config: &TraversalConfig) -> Self {
        Self {
            size: config
                .show_size
                .then(|| Column::Known(bytes.len() as u64)),
            hash: config
                .show_hash
                .then(|| Column::Known(digest_hex(bytes.as_slice()))),
        }
    }

    /// Requested columns whose values could not be computed.
    #[must_use]
    pub fn unavailable(config: &TraversalConfig) -> Self {
        Self {
            size: config.show_size.then_some(Column::Unavailable),
            hash: config.show_hash.then_some(Column::Unavailable),
        }
    }

    /// Returns `true` if nothing will be printed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.hash.is_none()
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.size {
            Some(Column::Known(n)) => write!(f, "  ({n} bytes)")?,
            Some(Column::Unavailable) => write!(f, "  (? bytes)")?,
            None => {}
        }
        match &self.hash {
            Some(Column::Known(hex)) => write!(f, "  {hex}")?,
            Some(Column::Unavailable) => write!(f, "  {PLACEHOLDER}")?,
            None => {}
        }
        Ok(())
    }
}
