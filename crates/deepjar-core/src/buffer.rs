//! Draining a member stream into memory.
//!
//! Members are read in fixed-size chunks until the stream ends. Declared
//! sizes only pick the initial capacity and decide whether buffering is
//! attempted at all; they never cut a read short.

use std::io;
use std::io::Read;

use crate::sniff::Sniffed;

/// Chunk size for draining member streams.
const CHUNK_SIZE: usize = 4096;

/// Initial capacity when the declared size is unknown or implausible.
const FALLBACK_CAPACITY: usize = 64 * 1024;

/// Upper bound on the capacity reserved from a declared size.
const MAX_CAPACITY_HINT: usize = 16 * FALLBACK_CAPACITY;

/// Fully buffered member content.
///
/// Immutable once built; dropped as soon as the member's subtree is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBytes(Vec<u8>);

impl MemberBytes {
    /// The buffered bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for an empty member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for MemberBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for MemberBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Outcome of trying to buffer a member.
#[derive(Debug)]
pub enum Buffered {
    /// The member was read to end-of-stream.
    Complete(MemberBytes),
    /// The declared size exceeds the ceiling; nothing past the sniffed
    /// prefix was read.
    TooLarge {
        /// Size recorded in the entry header.
        declared: u64,
    },
}

/// Returns `true` if a member declaring `declared` bytes may be buffered.
#[must_use]
pub fn fits(declared: Option<u64>, max_size: u64) -> bool {
    declared.is_none_or(|size| size <= max_size)
}

/// Buffers a member: the sniffed prefix followed by the rest of `reader`.
///
/// `declared` is the size from the entry header, if any. The ceiling is
/// checked against it before reading anything. Past that check it only
/// sizes the initial allocation, capped at 1 MiB.
///
/// # Errors
///
/// Propagates read failures from `reader`.
///
/// # Examples
///
/// ```
/// use deepjar_core::buffer::Buffered;
/// use deepjar_core::buffer::buffer_member;
/// use deepjar_core::sniff::sniff;
///
/// let mut member: &[u8] = b"hello world";
/// let prefix = sniff(&mut member)?;
/// let Buffered::Complete(bytes) = buffer_member(prefix, &mut member, Some(11), 1024)? else {
///     unreachable!();
/// };
/// assert_eq!(bytes.as_slice(), b"hello world");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn buffer_member<R: Read + ?Sized>(
    prefix: Sniffed,
    reader: &mut R,
    declared: Option<u64>,
    max_size: u64,
) -> io::Result<Buffered> {
    if let Some(size) = declared
        && !fits(declared, max_size)
    {
        return Ok(Buffered::TooLarge { declared: size });
    }

    let capacity = declared
        .filter(|&size| size > 0)
        .map_or(FALLBACK_CAPACITY, |size| {
            usize::try_from(size).map_or(MAX_CAPACITY_HINT, |size| size.min(MAX_CAPACITY_HINT))
        });

    let mut bytes = Vec::with_capacity(capacity.max(prefix.bytes().len()));
    bytes.extend_from_slice(prefix.bytes());

    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        bytes.extend_from_slice(&chunk[..n]);
    }

    Ok(Buffered::Complete(MemberBytes(bytes)))
}
