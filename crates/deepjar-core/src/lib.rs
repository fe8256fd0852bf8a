//! Recursive, in-memory listing of nested ZIP/JAR archives.
//!
//! `deepjar-core` reads an archive through its central directory and prints its
//! entries as an indented tree. Members that are themselves archives are
//! detected from their first four bytes, buffered in memory (up to a size
//! ceiling) and listed one level deeper. Nothing is extracted to disk.
//!
//! # Examples
//!
//! ```no_run
//! use deepjar_core::TraversalConfig;
//! use deepjar_core::TreeWriter;
//! use deepjar_core::list_archive_path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TraversalConfig {
//!     show_manifest: true,
//!     ..Default::default()
//! }
//! .with_extensions(["properties"]);
//!
//! let mut tree = TreeWriter::new(std::io::stdout().lock());
//! list_archive_path("app.jar", &config, &mut tree)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod buffer;
pub mod config;
pub mod error;
pub mod filter;
pub mod metadata;
pub mod render;
pub mod report;
pub mod sniff;
#[doc(hidden)]
pub mod test_utils;
pub mod traverse;
pub mod tree;

// Re-export main API types
pub use api::list_archive;
pub use api::list_archive_path;
pub use config::TraversalConfig;
pub use error::Result;
pub use error::TraversalError;
pub use filter::NameFilter;
pub use report::ListingReport;
pub use tree::Decorator;
pub use tree::Plain;
pub use tree::TreeWriter;
