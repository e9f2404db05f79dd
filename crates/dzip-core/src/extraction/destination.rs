//! Destination directory derivation.

use crate::ArchiveError;
use crate::security::normalize;
use std::path::Path;
use std::path::PathBuf;

/// Derives the extraction directory for a container.
///
/// The container path is made absolute against the current directory,
/// normalized, and stripped of the extension of its last component. The
/// result is a sibling of the container.
///
/// # Examples
///
/// ```
/// use dzip_core::extraction::destination_for;
/// use std::path::Path;
///
/// # #[cfg(unix)]
/// # {
/// let dest = destination_for(Path::new("/tmp/archive.zip"))?;
/// assert_eq!(dest, Path::new("/tmp/archive"));
/// # }
/// # Ok::<(), dzip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns [`ArchiveError::Destination`] if the path cannot be made
/// absolute, has no file name, or has no extension to strip (the
/// destination would collide with the container itself).
pub fn destination_for(archive: &Path) -> Result<PathBuf, ArchiveError> {
    let fail = |reason: String| ArchiveError::Destination {
        path: archive.to_path_buf(),
        reason,
    };

    let absolute = std::path::absolute(archive).map_err(|e| fail(e.to_string()))?;
    let absolute = normalize(&absolute);

    if absolute.file_name().is_none() {
        return Err(fail("path has no file name".into()));
    }

    let dest = absolute.with_extension("");
    if dest == absolute {
        return Err(fail("file name has no extension".into()));
    }

    Ok(dest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_strips_extension() {
        let dest = destination_for(Path::new("/tmp/archive.zip")).unwrap();
        assert_eq!(dest, Path::new("/tmp/archive"));
    }

    #[test]
    #[cfg(unix)]
    fn test_strips_only_last_extension() {
        let dest = destination_for(Path::new("/data/backup.tar.zip")).unwrap();
        assert_eq!(dest, Path::new("/data/backup.tar"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalizes_before_stripping() {
        let dest = destination_for(Path::new("/tmp/./x/../archive.zip")).unwrap();
        assert_eq!(dest, Path::new("/tmp/archive"));
    }

    #[test]
    fn test_relative_path_becomes_absolute() {
        let dest = destination_for(Path::new("archive.zip")).unwrap();
        assert!(dest.is_absolute());
        assert!(dest.ends_with("archive"));
        assert_eq!(
            dest.parent().unwrap(),
            normalize(&std::env::current_dir().unwrap())
        );
    }

    #[test]
    fn test_no_extension_is_rejected() {
        let result = destination_for(Path::new("archive"));
        assert!(matches!(result, Err(ArchiveError::Destination { .. })));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(destination_for(Path::new("")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_root_is_rejected() {
        assert!(destination_for(Path::new("/")).is_err());
    }
}
