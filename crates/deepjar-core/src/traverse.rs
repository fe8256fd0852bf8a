//! Recursive walk over an archive, one level at a time.
//!
//! Each level opens its source through the central directory and visits
//! entries in directory order. Every entry is decided once from its name and
//! first four bytes, then printed, buffered, or skipped. Archive members are
//! buffered and walked again from memory one level deeper.
//!
//! Entry sizes come from the central directory, so entries whose local
//! header defers sizes to a trailing data descriptor are read like any other.

use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::Write;

use tracing::debug;
use tracing::trace;
use zip::ZipArchive;

use crate::Result;
use crate::TraversalConfig;
use crate::buffer::Buffered;
use crate::buffer::buffer_member;
use crate::metadata::Annotation;
use crate::render::Rendering;
use crate::render::render_member;
use crate::report::ListingReport;
use crate::sniff::Sniffed;
use crate::sniff::sniff;
use crate::tree::Decorator;
use crate::tree::HeaderKind;
use crate::tree::TOO_DEEP_NOTICE;
use crate::tree::TOO_LARGE_NOTICE;
use crate::tree::TreeWriter;

/// What happens to an entry, decided once per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Directory entry; carries no content.
    Directory,
    /// Content starts with the ZIP signature.
    NestedArchive(Sniffed),
    /// Text shown inline (extension or manifest match).
    RenderableContent(Sniffed),
    /// Listed by name only.
    OpaqueListed(Sniffed),
    /// Hidden by the name filter.
    FilteredOut,
}

/// Classifies an entry.
///
/// Directories are decided by name alone and `content` is not touched.
/// Otherwise exactly one sniff happens; the archive signature wins over every
/// name rule, and the filter only applies to opaque members.
pub fn classify<R: Read + ?Sized>(
    name: &str,
    is_dir: bool,
    content: &mut R,
    config: &TraversalConfig,
) -> io::Result<Disposition> {
    if is_dir {
        return Ok(Disposition::Directory);
    }
    let prefix = sniff(content)?;
    Ok(if prefix.is_archive() {
        Disposition::NestedArchive(prefix)
    } else if config.is_renderable(name) {
        Disposition::RenderableContent(prefix)
    } else if config.passes_filter(name) {
        Disposition::OpaqueListed(prefix)
    } else {
        Disposition::FilteredOut
    })
}

/// Lists every entry of `source` at `depth`.
///
/// `source` is owned by this level and released when it returns, whichever
/// way it returns.
pub(crate) fn walk_level<R: Read + Seek, W: Write, D: Decorator>(
    source: R,
    depth: usize,
    config: &TraversalConfig,
    tree: &mut TreeWriter<W, D>,
    report: &mut ListingReport,
) -> Result<()> {
    report.enter_level(depth);
    let mut archive = ZipArchive::new(source)?;
    let mut excluded = 0usize;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        report.entries += 1;
        let name = entry.name().to_string();
        let declared = Some(entry.size());

        match classify(&name, entry.is_dir(), &mut entry, config)? {
            Disposition::Directory => {
                report.directories += 1;
                if config.passes_filter(&name) {
                    tree.directory(depth, &name)?;
                }
            }
            Disposition::NestedArchive(prefix) => {
                let member = Member { name: &name, declared, prefix };
                member.buffer_and_render(
                    &mut entry,
                    Rendering::Archive,
                    depth,
                    config,
                    tree,
                    report,
                )?;
            }
            Disposition::RenderableContent(prefix) => {
                let member = Member { name: &name, declared, prefix };
                member.buffer_and_render(
                    &mut entry,
                    Rendering::Text,
                    depth,
                    config,
                    tree,
                    report,
                )?;
            }
            Disposition::OpaqueListed(prefix) => {
                let annotation = if config.wants_annotation() {
                    match buffer_member(prefix, &mut entry, declared, config.max_member_size)? {
                        Buffered::Complete(bytes) => {
                            report.bytes_buffered += bytes.len() as u64;
                            Annotation::of(&bytes, config)
                        }
                        Buffered::TooLarge { declared } => {
                            debug!(name = %name, declared, "not buffering oversized member");
                            Annotation::unavailable(config)
                        }
                    }
                } else {
                    Annotation::none()
                };
                tree.member(depth, &name, &annotation)?;
            }
            Disposition::FilteredOut => {
                trace!(name = %name, "excluded by filter");
                excluded += 1;
                report.files_excluded += 1;
            }
        }
    }

    if excluded > 0 {
        tree.filter_summary(depth, excluded)?;
    }
    Ok(())
}

/// An archive or text member that has been sniffed but not yet buffered.
struct Member<'a> {
    name: &'a str,
    declared: Option<u64>,
    prefix: Sniffed,
}

impl Member<'_> {
    fn buffer_and_render<R: Read, W: Write, D: Decorator>(
        self,
        content: &mut R,
        rendering: Rendering,
        depth: usize,
        config: &TraversalConfig,
        tree: &mut TreeWriter<W, D>,
        report: &mut ListingReport,
    ) -> Result<()> {
        let kind = match rendering {
            Rendering::Archive => HeaderKind::Archive,
            Rendering::Text => HeaderKind::Content,
        };

        let buffered = buffer_member(
            self.prefix,
            content,
            self.declared,
            config.max_member_size,
        )?;
        let bytes = match buffered {
            Buffered::Complete(bytes) => bytes,
            Buffered::TooLarge { declared } => {
                debug!(
                    name = self.name,
                    declared,
                    max = config.max_member_size,
                    "member too large"
                );
                report.skipped_too_large += 1;
                tree.header(depth, self.name, kind, &Annotation::none())?;
                tree.notice(depth + 1, TOO_LARGE_NOTICE)?;
                return Ok(());
            }
        };
        report.bytes_buffered += bytes.len() as u64;

        tree.header(depth, self.name, kind, &Annotation::of(&bytes, config))?;
        if rendering == Rendering::Archive && depth + 1 > config.max_depth {
            debug!(name = self.name, depth, "nesting limit reached");
            report.skipped_too_deep += 1;
            tree.notice(depth + 1, TOO_DEEP_NOTICE)?;
        } else {
            trace!(
                name = self.name,
                bytes = bytes.len(),
                ?rendering,
                "rendering member"
            );
            render_member(&bytes, rendering, depth, config, tree, report)?;
        }
        tree.closing(depth + 1, self.name)?;
        Ok(())
    }
}
