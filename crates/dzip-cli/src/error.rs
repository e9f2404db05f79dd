//! Error conversion utilities for CLI.
//!
//! Converts dzip-core's typed errors (thiserror) into user-facing messages
//! (anyhow) and maps each failure to its process exit code.

use anyhow::anyhow;
use dzip_core::ArchiveError;
use dzip_core::UnzipError;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

/// Exit status when the container could not be opened for writing or the
/// destination could not be resolved.
pub const EXIT_ARCHIVE_UNAVAILABLE: u8 = 1;

/// Exit status when extraction failed for any reason.
pub const EXIT_EXTRACTION_FAILED: u8 = 9;

/// A failure that ends the process.
#[derive(Error, Debug)]
pub enum Failure {
    /// The container or its destination is unusable.
    #[error("{0}")]
    Archive(anyhow::Error),

    /// Extraction stopped on an entry.
    #[error("{0}")]
    Extraction(anyhow::Error),
}

impl Failure {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Archive(_) => ExitCode::from(EXIT_ARCHIVE_UNAVAILABLE),
            Self::Extraction(_) => ExitCode::from(EXIT_EXTRACTION_FAILED),
        }
    }
}

/// Converts an `ArchiveError` into a user-facing message.
pub fn convert_archive_error(err: &ArchiveError) -> anyhow::Error {
    match err {
        ArchiveError::Create { .. } => anyhow!("Failed to open zip for writing.\n{err}"),
        ArchiveError::Finish { .. } => anyhow!("Failed to finish writing zip.\n{err}"),
        ArchiveError::Destination { .. } => anyhow!("Failed to get the Realpath of: {err}"),
    }
}

/// Converts an `UnzipError` into the multi-line extraction diagnostic.
pub fn convert_unzip_error(err: &UnzipError, archive: &Path, dest: &Path) -> anyhow::Error {
    let source = archive
        .file_name()
        .map_or_else(|| archive.to_string_lossy(), |name| name.to_string_lossy());

    let mut message = format!(
        "Failed to unzip file from zip: {} \nError -> {err}\nSource -> {source}\nTarget -> {}",
        archive.display(),
        dest.display()
    );

    if err.is_security_violation() {
        message.push_str(
            "\nHINT: This archive may be malicious. Do not extract from untrusted sources.",
        );
    }

    anyhow!(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_create_error() {
        let err = ArchiveError::Create {
            path: PathBuf::from("/nope/out.zip"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = convert_archive_error(&err).to_string();
        assert!(msg.starts_with("Failed to open zip for writing.\n"));
        assert!(msg.contains("/nope/out.zip"));
    }

    #[test]
    fn test_convert_destination_error() {
        let err = ArchiveError::Destination {
            path: PathBuf::from("archive"),
            reason: "file name has no extension".into(),
        };
        let msg = convert_archive_error(&err).to_string();
        assert!(msg.starts_with("Failed to get the Realpath of: "));
        assert!(msg.contains("no extension"));
    }

    #[test]
    fn test_convert_illegal_path_error() {
        let err = UnzipError::IllegalPath {
            path: PathBuf::from("/tmp/evil.txt"),
        };
        let msg = convert_unzip_error(
            &err,
            Path::new("/tmp/archive.zip"),
            Path::new("/tmp/archive"),
        )
        .to_string();

        assert!(msg.contains("Failed to unzip file from zip: /tmp/archive.zip"));
        assert!(msg.contains("Error -> /tmp/evil.txt: illegal file path"));
        assert!(msg.contains("Source -> archive.zip"));
        assert!(msg.contains("Target -> /tmp/archive"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_io_error_has_no_hint() {
        let err = UnzipError::FileCreate {
            path: PathBuf::from("/tmp/archive/x"),
            source: io::Error::other("denied"),
        };
        let msg = convert_unzip_error(&err, Path::new("a.zip"), Path::new("a")).to_string();
        assert!(!msg.contains("HINT"));
    }
}
