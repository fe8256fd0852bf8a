//! Test utilities for building in-memory archives.
//!
//! This module provides reusable helpers for creating nested ZIP fixtures
//! without touching the filesystem.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed
/// with mode 0o644.
///
/// # Examples
///
/// ```
/// use deepjar_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// assert!(zip_data.starts_with(b"PK\x03\x04"));
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipTestBuilder::new(), |zip, (path, data)| {
            zip.add_file(path, data)
        })
        .build()
}

/// Builder for creating ZIP test archives, including nested ones.
///
/// # Examples
///
/// ```
/// use deepjar_core::test_utils::ZipTestBuilder;
///
/// let inner = ZipTestBuilder::new().add_file("deep.txt", b"bottom").build();
/// let outer = ZipTestBuilder::new()
///     .add_directory("lib/")
///     .add_file("lib/inner.zip", &inner)
///     .add_deflated("notes.md", b"# notes")
///     .build();
/// assert!(!outer.is_empty());
/// ```
pub struct ZipTestBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored (uncompressed) file.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_with_method(path, data, CompressionMethod::Stored)
    }

    /// Adds a deflate-compressed file.
    #[must_use]
    pub fn add_deflated(self, path: &str, data: &[u8]) -> Self {
        self.add_with_method(path, data, CompressionMethod::Deflated)
    }

    /// Adds another archive as a stored member.
    #[must_use]
    pub fn add_archive(self, path: &str, nested: Self) -> Self {
        let data = nested.build();
        self.add_file(path, &data)
    }

    /// Adds a directory to the archive.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    fn add_with_method(mut self, path: &str, data: &[u8], method: CompressionMethod) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for archives whose entries defer their sizes to a data descriptor.
///
/// This is the layout streaming writers such as `jar` produce: general
/// purpose flag bit 3 set, zero CRC and sizes in the local header, and a
/// `PK\x07\x08` descriptor after the data. Only the central directory
/// carries the real values. Entries are stored uncompressed.
///
/// # Examples
///
/// ```
/// use deepjar_core::test_utils::DataDescriptorZipBuilder;
///
/// let zip = DataDescriptorZipBuilder::new().add_file("a.txt", b"a").build();
/// assert_eq!(zip[6], 0x08);
/// ```
#[derive(Debug, Default)]
pub struct DataDescriptorZipBuilder {
    out: Vec<u8>,
    central: Vec<u8>,
    count: u16,
}

impl DataDescriptorZipBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stored file.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        self.push_entry(path, data);
        self
    }

    /// Adds a directory entry; `path` should end with `/`.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        self.push_entry(path, &[]);
        self
    }

    /// Adds an archive built by a [`ZipTestBuilder`] as a stored member.
    #[must_use]
    pub fn add_archive(self, path: &str, nested: ZipTestBuilder) -> Self {
        let data = nested.build();
        self.add_file(path, &data)
    }

    /// Adds an archive built by another `DataDescriptorZipBuilder`.
    #[must_use]
    pub fn add_descriptor_archive(self, path: &str, nested: Self) -> Self {
        let data = nested.build();
        self.add_file(path, &data)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push_entry(&mut self, path: &str, data: &[u8]) {
        let offset = self.out.len() as u32;
        let crc = crc32fast::hash(data);
        let size = data.len() as u32;
        let name_len = path.len() as u16;

        // Local header: flag bit 3, CRC and sizes left zero.
        self.out.extend_from_slice(&[0x50, 0x4b, 0x03, 0x04]);
        self.out.extend_from_slice(&20u16.to_le_bytes()); // version needed
        self.out.extend_from_slice(&0x0008u16.to_le_bytes()); // flags
        self.out.extend_from_slice(&0u16.to_le_bytes()); // stored
        self.out.extend_from_slice(&[0, 0, 0x21, 0]); // mod time/date
        self.out.extend_from_slice(&[0; 12]); // crc32, sizes
        self.out.extend_from_slice(&name_len.to_le_bytes());
        self.out.extend_from_slice(&0u16.to_le_bytes()); // extra len
        self.out.extend_from_slice(path.as_bytes());
        self.out.extend_from_slice(data);

        // Data descriptor.
        self.out.extend_from_slice(&[0x50, 0x4b, 0x07, 0x08]);
        self.out.extend_from_slice(&crc.to_le_bytes());
        self.out.extend_from_slice(&size.to_le_bytes());
        self.out.extend_from_slice(&size.to_le_bytes());

        self.central.extend_from_slice(&[0x50, 0x4b, 0x01, 0x02]);
        self.central.extend_from_slice(&20u16.to_le_bytes()); // version made by
        self.central.extend_from_slice(&20u16.to_le_bytes()); // version needed
        self.central.extend_from_slice(&0x0008u16.to_le_bytes());
        self.central.extend_from_slice(&0u16.to_le_bytes());
        self.central.extend_from_slice(&[0, 0, 0x21, 0]);
        self.central.extend_from_slice(&crc.to_le_bytes());
        self.central.extend_from_slice(&size.to_le_bytes());
        self.central.extend_from_slice(&size.to_le_bytes());
        self.central.extend_from_slice(&name_len.to_le_bytes());
        self.central.extend_from_slice(&[0; 8]); // extra, comment, disk, internal attrs
        self.central.extend_from_slice(&0u32.to_le_bytes()); // external attrs
        self.central.extend_from_slice(&offset.to_le_bytes());
        self.central.extend_from_slice(path.as_bytes());

        self.count += 1;
    }

    /// Appends the central directory and end record, returning the bytes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(mut self) -> Vec<u8> {
        let cd_offset = self.out.len() as u32;
        let cd_size = self.central.len() as u32;
        self.out.append(&mut self.central);

        self.out.extend_from_slice(&[0x50, 0x4b, 0x05, 0x06]);
        self.out.extend_from_slice(&[0; 4]); // disk numbers
        self.out.extend_from_slice(&self.count.to_le_bytes());
        self.out.extend_from_slice(&self.count.to_le_bytes());
        self.out.extend_from_slice(&cd_size.to_le_bytes());
        self.out.extend_from_slice(&cd_offset.to_le_bytes());
        self.out.extend_from_slice(&0u16.to_le_bytes()); // comment len
        self.out
    }
}
