//! Statistics gathered while listing one top-level archive.

use std::time::Duration;

/// Counters for one top-level listing, summed over every nesting level.
///
/// The tree output never includes these; callers may log them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingReport {
    /// Entries read from any level, directories included.
    pub entries: usize,

    /// Directory entries seen.
    pub directories: usize,

    /// Nested archives that were opened.
    pub archives_descended: usize,

    /// Members printed as text.
    pub files_rendered: usize,

    /// Members hidden by the name filter.
    pub files_excluded: usize,

    /// Members not buffered because their declared size exceeds the ceiling.
    pub skipped_too_large: usize,

    /// Nested archives not opened because of the depth limit.
    pub skipped_too_deep: usize,

    /// Total bytes held in memory across all buffered members.
    pub bytes_buffered: u64,

    /// Deepest nesting level reached.
    pub max_depth_reached: usize,

    /// Wall-clock time of the listing.
    pub duration: Duration,
}

impl ListingReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any member was skipped for size or depth.
    #[must_use]
    pub fn has_skips(&self) -> bool {
        self.skipped_too_large > 0 || self.skipped_too_deep > 0
    }

    /// Records that a level at `depth` was opened.
    pub(crate) fn enter_level(&mut self, depth: usize) {
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }
}
