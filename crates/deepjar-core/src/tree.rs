//! Tree output: indentation, opening and closing markers.
//!
//! Every opened archive, top-level or nested, gets a header line with its
//! name and a closing line at the same indentation. Its entries sit one level
//! deeper. Styling is left to a [`Decorator`], which only ever sees plain text
//! segments.

use std::io;
use std::io::Write;

use crate::metadata::Annotation;

/// Indentation unit, repeated once per depth level.
pub const INDENT: &str = "│ ";

/// Prefix of the line closing an archive or content block.
pub const CLOSE_MARKER: &str = "└──";

/// Printed under a member that was not buffered because of its size.
pub const TOO_LARGE_NOTICE: &str = "[ Skipping file -- too large. ]";

/// Printed under an archive that was not opened because of the depth limit.
pub const TOO_DEEP_NOTICE: &str = "[ Skipping archive -- nesting too deep. ]";

/// Indentation for `depth`.
///
/// ```
/// use deepjar_core::tree::padding;
///
/// assert_eq!(padding(0), "");
/// assert_eq!(padding(2), "│ │ ");
/// ```
#[must_use]
pub fn padding(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// How a member header is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// An archive that is (or would be) descended into.
    Archive,
    /// A member whose text is printed.
    Content,
}

/// Styling hook applied to the plain text segments of the tree.
///
/// All methods default to returning the text unchanged.
pub trait Decorator {
    /// Name of an archive, top-level or nested.
    fn archive_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Name of a member whose content is shown.
    fn content_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Name repeated on a closing line.
    fn closing_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Skip notices.
    fn notice(&self, text: &str) -> String {
        text.to_string()
    }

    /// The per-level filter summary.
    fn summary(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Undecorated output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Decorator for Plain {}

/// Writes tree lines to an underlying writer as they are produced.
pub struct TreeWriter<W, D = Plain> {
    out: W,
    decorator: D,
}

impl<W: Write> TreeWriter<W, Plain> {
    /// Creates a writer with no styling.
    pub fn new(out: W) -> Self {
        Self::with_decorator(out, Plain)
    }
}

impl<W: Write, D: Decorator> TreeWriter<W, D> {
    /// Creates a writer that styles segments with `decorator`.
    pub fn with_decorator(out: W, decorator: D) -> Self {
        Self { out, decorator }
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Flushes the underlying output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Opening line of an archive or content member.
    pub fn header(
        &mut self,
        depth: usize,
        name: &str,
        kind: HeaderKind,
        annotation: &Annotation,
    ) -> io::Result<()> {
        let name = match kind {
            HeaderKind::Archive => self.decorator.archive_name(name),
            HeaderKind::Content => self.decorator.content_name(name),
        };
        writeln!(self.out, "{}{name}{annotation}", padding(depth))
    }

    /// Closing line for a block whose entries sit at `inner_depth`.
    pub fn closing(&mut self, inner_depth: usize, name: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{CLOSE_MARKER} {}",
            padding(inner_depth.saturating_sub(1)),
            self.decorator.closing_name(name)
        )
    }

    /// A directory entry.
    pub fn directory(&mut self, depth: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}{name}", padding(depth))
    }

    /// A plain listed member.
    pub fn member(&mut self, depth: usize, name: &str, annotation: &Annotation) -> io::Result<()> {
        writeln!(self.out, "{}{name}{annotation}", padding(depth))
    }

    /// One line of member text, optionally numbered.
    pub fn content_line(
        &mut self,
        depth: usize,
        number: Option<usize>,
        text: &str,
    ) -> io::Result<()> {
        match number {
            Some(n) => writeln!(self.out, "{}{n} {text}", padding(depth)),
            None => writeln!(self.out, "{}{text}", padding(depth)),
        }
    }

    /// A skip notice such as [`TOO_LARGE_NOTICE`].
    pub fn notice(&mut self, depth: usize, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", padding(depth), self.decorator.notice(text))
    }

    /// Count of members hidden by the name filter at this level.
    pub fn filter_summary(&mut self, depth: usize, excluded: usize) -> io::Result<()> {
        let text = format!("({excluded} files excluded by filter)");
        writeln!(self.out, "{}{}", padding(depth), self.decorator.summary(&text))
    }
}
