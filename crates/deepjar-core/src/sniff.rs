//! Archive detection from a member's leading bytes.

use std::io::ErrorKind;
use std::io::Read;

/// ZIP local file header signature (`PK\x03\x04`).
pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Leading bytes taken off a member stream.
///
/// The stream cannot be rewound, so these bytes must be handed back to
/// whoever buffers the rest of the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed {
    buf: [u8; ZIP_MAGIC.len()],
    len: usize,
}

impl Sniffed {
    /// The bytes actually read; fewer than four for very short members.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns `true` if the member starts with the ZIP signature.
    #[must_use]
    pub fn is_archive(&self) -> bool {
        self.len == ZIP_MAGIC.len() && self.buf == ZIP_MAGIC
    }
}

/// Reads up to four bytes from `reader`.
///
/// Hitting end-of-stream early is not an error: the result simply holds fewer
/// bytes and never classifies as an archive.
///
/// # Examples
///
/// ```
/// use deepjar_core::sniff::sniff;
///
/// let mut member: &[u8] = b"PK\x03\x04rest";
/// let sniffed = sniff(&mut member)?;
/// assert!(sniffed.is_archive());
/// assert_eq!(member, b"rest");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn sniff<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Sniffed> {
    let mut sniffed = Sniffed {
        buf: [0; ZIP_MAGIC.len()],
        len: 0,
    };
    while sniffed.len < sniffed.buf.len() {
        match reader.read(&mut sniffed.buf[sniffed.len..]) {
            Ok(0) => break,
            Ok(n) => sniffed.len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(sniffed)
}
