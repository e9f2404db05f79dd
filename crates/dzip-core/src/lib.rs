//! ZIP packing and traversal-safe extraction.
//!
//! `dzip-core` packs a list of files into a ZIP container and extracts a
//! container into a sibling directory. Packing is best-effort: inputs that
//! fail are logged through an injected [`Log`] and skipped. Extraction is
//! fail-fast and rejects any entry whose name would resolve outside the
//! destination directory.
//!
//! # Examples
//!
//! ```no_run
//! use dzip_core::NoopLog;
//! use dzip_core::create_archive;
//! use dzip_core::destination_for;
//! use dzip_core::extract_archive;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! create_archive("bundle.zip", &["notes.txt", "data/report.csv"], &NoopLog)?;
//!
//! let dest = destination_for(Path::new("bundle.zip"))?;
//! let written = extract_archive(Path::new("bundle.zip"), &dest)?;
//! println!("Extracted {} entries", written.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod copy;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod log;
pub mod security;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main API types
pub use config::Config;
pub use config::Mode;
pub use creation::PackReport;
pub use creation::create_archive;
pub use error::ArchiveError;
pub use error::EntryError;
pub use error::Result;
pub use error::UnzipError;
pub use extraction::destination_for;
pub use extraction::extract_archive;
pub use log::Log;
pub use log::NoopLog;
