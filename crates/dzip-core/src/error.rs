//! Error types for archive packing and extraction.
//!
//! Packing and extraction follow different failure policies. A packing
//! failure is scoped to a single input file ([`EntryError`]) and the batch
//! continues; an extraction failure ([`UnzipError`]) aborts the whole run.
//! Failures that prevent either operation from starting or finishing are
//! reported as [`ArchiveError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `UnzipError`.
pub type Result<T> = std::result::Result<T, UnzipError>;

/// Fatal errors around the container itself.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The output container could not be created for writing.
    #[error("failed to create {path}: {source}")]
    Create {
        /// Container path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The central directory could not be written.
    #[error("failed to finish {path}: {source}")]
    Finish {
        /// Container path.
        path: PathBuf,
        /// Underlying ZIP error.
        source: ZipError,
    },

    /// The extraction destination could not be derived from the container
    /// path.
    #[error("cannot derive destination from {path}: {reason}")]
    Destination {
        /// Container path as given.
        path: PathBuf,
        /// Why the derivation failed.
        reason: String,
    },
}

/// Per-file errors raised while packing.
///
/// These are logged and skipped; they never abort the batch.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The source file could not be opened.
    #[error("failed to open {path}: {source}")]
    SourceOpen {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A new entry could not be started in the container.
    #[error("failed to create entry for {name} in zip file: {source}")]
    EntryCreate {
        /// Entry name.
        name: String,
        /// Underlying ZIP error.
        source: ZipError,
    },

    /// Copying the source content into the entry failed.
    #[error("failed to write {path} to zip: {source}")]
    Copy {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Copying failed and the partial entry could not be discarded either.
    ///
    /// The container is likely unusable after this.
    #[error("failed to write {path} to zip: {source} (discarding the partial entry failed: {abort})")]
    Abort {
        /// Source path.
        path: PathBuf,
        /// The copy error that triggered the abort.
        source: io::Error,
        /// Why the partial entry could not be discarded.
        abort: ZipError,
    },
}

/// Errors raised while extracting.
///
/// Every variant is terminal for the extraction run.
#[derive(Error, Debug)]
pub enum UnzipError {
    /// The container could not be opened or its central directory is
    /// unreadable.
    #[error("failed to open archive {path}: {source}")]
    ArchiveOpen {
        /// Container path.
        path: PathBuf,
        /// Underlying ZIP error.
        source: ZipError,
    },

    /// An entry is malformed or its content stream cannot be opened.
    #[error("failed to open entry #{index}: {source}")]
    EntryOpen {
        /// Position of the entry in the central directory.
        index: usize,
        /// Underlying ZIP error.
        source: ZipError,
    },

    /// An entry resolves outside the destination directory.
    #[error("{}: illegal file path", path.display())]
    IllegalPath {
        /// The resolved output path.
        path: PathBuf,
    },

    /// A directory (or a file's parent directory) could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An output file could not be created.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Copying entry content into an output file failed.
    #[error("failed to write {path}: {source}")]
    Copy {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl UnzipError {
    /// Returns `true` if the entry tried to escape the destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use dzip_core::UnzipError;
    /// use std::path::PathBuf;
    ///
    /// let err = UnzipError::IllegalPath {
    ///     path: PathBuf::from("/tmp/evil.txt"),
    /// };
    /// assert!(err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::IllegalPath { .. })
    }
}
