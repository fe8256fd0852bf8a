//! Entry name matching: filter pattern, extension allow-list, manifests.

use regex::Regex;

use crate::Result;
use crate::TraversalError;

/// File name suffix identifying a JAR manifest (compared case-insensitively).
pub const MANIFEST_FILENAME: &str = "manifest.mf";

/// Extension added by the XML shorthand.
pub const XML_EXTENSION: &str = "xml";

/// Full-string name filter.
///
/// The pattern must match the whole entry path, not a substring of it.
///
/// # Examples
///
/// ```
/// use deepjar_core::NameFilter;
///
/// let filter = NameFilter::new(r"lib/.*\.class")?;
/// assert!(filter.matches("lib/A.class"));
/// assert!(!filter.matches("x/lib/A.class"));
/// # Ok::<(), deepjar_core::TraversalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NameFilter {
    source: String,
    regex: Regex,
}

impl NameFilter {
    /// Compiles `pattern`, anchoring it at both ends.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            TraversalError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns `true` if the whole of `name` matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern as originally supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Lowercased extension of an entry name.
///
/// The extension is whatever follows the last `.`, unless that dot is the
/// first character of the name.
///
/// ```
/// use deepjar_core::filter::extension;
///
/// assert_eq!(extension("META-INF/Foo.XML").as_deref(), Some("xml"));
/// assert_eq!(extension(".profile"), None);
/// assert_eq!(extension("README"), None);
/// ```
#[must_use]
pub fn extension(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(pos) if pos > 0 => Some(name[pos + 1..].to_lowercase()),
        _ => None,
    }
}

/// Returns `true` if `name` ends with the manifest file name, ignoring case.
#[must_use]
pub fn is_manifest(name: &str) -> bool {
    name.to_lowercase().ends_with(MANIFEST_FILENAME)
}

/// Splits comma-delimited extension lists into normalised extensions.
///
/// Items are trimmed, lowercased and stripped of a leading dot; empty items
/// are dropped.
pub fn parse_extensions<'a, I>(lists: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lists
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
}
