//! Traversal configuration shared by every nesting level.

use std::collections::BTreeSet;

use crate::Result;
use crate::TraversalError;
use crate::filter::NameFilter;
use crate::filter::XML_EXTENSION;
use crate::filter::extension;
use crate::filter::is_manifest;
use crate::filter::parse_extensions;

/// Default ceiling for buffering a single member: 128 MiB.
pub const DEFAULT_MAX_MEMBER_SIZE: u64 = 128 * 1024 * 1024;

/// Default limit on archive nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Read-only settings threaded through the whole traversal.
///
/// Built once before listing starts and shared by reference with every
/// recursive level.
///
/// # Examples
///
/// ```
/// use deepjar_core::TraversalConfig;
///
/// let config = TraversalConfig {
///     show_line_numbers: true,
///     show_hash: true,
///     ..Default::default()
/// }
/// .with_extensions(["txt,properties"])
/// .with_xml();
///
/// assert!(config.extensions.contains("xml"));
/// assert!(config.extensions.contains("properties"));
/// ```
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Lowercase extensions whose members are printed inline.
    pub extensions: BTreeSet<String>,

    /// Print the contents of `MANIFEST.MF` members.
    pub show_manifest: bool,

    /// Prefix printed content lines with their 1-based line number.
    pub show_line_numbers: bool,

    /// Annotate members with their byte count.
    pub show_size: bool,

    /// Annotate members with their content digest.
    pub show_hash: bool,

    /// Only list plain members whose full path matches.
    pub filter: Option<NameFilter>,

    /// Members whose declared size exceeds this are never buffered.
    pub max_member_size: u64,

    /// Archives nested deeper than this are listed but not opened.
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    /// Default values:
    /// - `extensions`: empty
    /// - `show_manifest`, `show_line_numbers`, `show_size`, `show_hash`: false
    /// - `filter`: none
    /// - `max_member_size`: 128 MiB
    /// - `max_depth`: 32
    fn default() -> Self {
        Self {
            extensions: BTreeSet::new(),
            show_manifest: false,
            show_line_numbers: false,
            show_size: false,
            show_hash: false,
            filter: None,
            max_member_size: DEFAULT_MAX_MEMBER_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TraversalConfig {
    /// Adds extensions from comma-delimited lists.
    #[must_use]
    pub fn with_extensions<'a, I>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        self.extensions.extend(parse_extensions(lists));
        self
    }

    /// Adds `xml` to the extension set.
    #[must_use]
    pub fn with_xml(mut self) -> Self {
        self.extensions.insert(XML_EXTENSION.to_string());
        self
    }

    /// Sets the name filter from a pattern.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self> {
        self.filter = Some(NameFilter::new(pattern)?);
        Ok(self)
    }

    /// Checks that the limits are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_member_size == 0 {
            return Err(TraversalError::InvalidConfig(
                "maximum member size must be greater than zero".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(TraversalError::InvalidConfig(
                "maximum nesting depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns `true` if a member with this name should have its text shown.
    #[must_use]
    pub fn is_renderable(&self, name: &str) -> bool {
        extension(name).is_some_and(|ext| self.extensions.contains(&ext))
            || (self.show_manifest && is_manifest(name))
    }

    /// Returns `true` if the name passes the filter, or there is none.
    #[must_use]
    pub fn passes_filter(&self, name: &str) -> bool {
        self.filter.as_ref().is_none_or(|f| f.matches(name))
    }

    /// Returns `true` if any size or hash annotation is requested.
    #[must_use]
    pub fn wants_annotation(&self) -> bool {
        self.show_size || self.show_hash
    }
}
