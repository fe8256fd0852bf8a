//! Printing buffered members: as text, or as a nested archive.

use std::io::Cursor;
use std::io::Write;

use tracing::trace;

use crate::Result;
use crate::TraversalConfig;
use crate::buffer::MemberBytes;
use crate::report::ListingReport;
use crate::traverse::walk_level;
use crate::tree::Decorator;
use crate::tree::TreeWriter;

/// What to do with a buffered member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// List it as a nested archive.
    Archive,
    /// Print it as text.
    Text,
}

/// Prints `bytes` one level below a member header at `depth`.
pub fn render_member<W: Write, D: Decorator>(
    bytes: &MemberBytes,
    rendering: Rendering,
    depth: usize,
    config: &TraversalConfig,
    tree: &mut TreeWriter<W, D>,
    report: &mut ListingReport,
) -> Result<()> {
    match rendering {
        Rendering::Archive => {
            report.archives_descended += 1;
            walk_level(Cursor::new(bytes.as_slice()), depth + 1, config, tree, report)
        }
        Rendering::Text => {
            report.files_rendered += 1;
            render_text(bytes.as_slice(), depth + 1, config.show_line_numbers, tree)?;
            Ok(())
        }
    }
}

/// Prints text content at `depth`, numbering lines from 1 if asked.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn render_text<W: Write, D: Decorator>(
    bytes: &[u8],
    depth: usize,
    numbered: bool,
    tree: &mut TreeWriter<W, D>,
) -> std::io::Result<()> {
    let text = String::from_utf8_lossy(bytes);
    let mut count = 0;
    for (index, line) in text_lines(&text).enumerate() {
        tree.content_line(depth, numbered.then_some(index + 1), line)?;
        count += 1;
    }
    trace!(lines = count, "rendered text member");
    Ok(())
}

/// Splits on `\n`, `\r\n` and lone `\r`.
///
/// A terminator at the very end does not start another line.
///
/// ```
/// use deepjar_core::render::text_lines;
///
/// let lines: Vec<_> = text_lines("a\r\n\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "", "b", "c"]);
/// ```
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
