//! High-level public API for listing archives.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::Result;
use crate::TraversalConfig;
use crate::metadata::Annotation;
use crate::report::ListingReport;
use crate::traverse::walk_level;
use crate::tree::Decorator;
use crate::tree::HeaderKind;
use crate::tree::TreeWriter;

/// Lists an archive read from `reader`, descending into nested archives.
///
/// The tree is bracketed by a header and closing line carrying `name`; its
/// entries start at depth 1. Output is written as entries are read. The
/// reader must be seekable because entries are located through the central
/// directory.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The archive or a nested archive cannot be parsed
/// - Reading input or writing output fails
///
/// Lines already written before the failure stay written.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use deepjar_core::TraversalConfig;
/// use deepjar_core::TreeWriter;
/// use deepjar_core::list_archive;
/// use deepjar_core::test_utils::create_test_zip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let zip = create_test_zip(vec![("readme.txt", b"hello\n")]);
/// let config = TraversalConfig::default().with_extensions(["txt"]);
/// let mut tree = TreeWriter::new(Vec::new());
///
/// list_archive("demo.zip", Cursor::new(zip), &config, &mut tree)?;
///
/// let text = String::from_utf8(tree.into_inner())?;
/// assert!(text.contains("│ │ hello"));
/// # Ok(())
/// # }
/// ```
pub fn list_archive<R: Read + Seek, W: Write, D: Decorator>(
    name: &str,
    reader: R,
    config: &TraversalConfig,
    tree: &mut TreeWriter<W, D>,
) -> Result<ListingReport> {
    config.validate()?;
    let start = Instant::now();
    let mut report = ListingReport::new();

    tree.header(0, name, HeaderKind::Archive, &Annotation::none())?;
    walk_level(reader, 1, config, tree, &mut report)?;
    tree.closing(1, name)?;
    tree.flush()?;

    report.duration = start.elapsed();
    debug!(
        archive = name,
        entries = report.entries,
        nested = report.archives_descended,
        excluded = report.files_excluded,
        bytes = report.bytes_buffered,
        "listing complete"
    );
    Ok(report)
}

/// Lists the archive stored at `archive_path`.
///
/// The header shows the file name component of the path.
///
/// # Errors
///
/// Same as [`list_archive`], plus failure to open the file.
///
/// # Examples
///
/// ```no_run
/// use deepjar_core::TraversalConfig;
/// use deepjar_core::TreeWriter;
/// use deepjar_core::list_archive_path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tree = TreeWriter::new(std::io::stdout().lock());
/// let report = list_archive_path("app.jar", &TraversalConfig::default(), &mut tree)?;
/// eprintln!("{} nested archives", report.archives_descended);
/// # Ok(())
/// # }
/// ```
pub fn list_archive_path<P: AsRef<Path>, W: Write, D: Decorator>(
    archive_path: P,
    config: &TraversalConfig,
    tree: &mut TreeWriter<W, D>,
) -> Result<ListingReport> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path)?;
    let name = archive_path.file_name().map_or_else(
        || archive_path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    list_archive(&name, BufReader::new(file), config, tree)
}
