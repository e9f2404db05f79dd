//! Core extraction engine.
//!
//! Extraction is fail-fast. The first entry that cannot be opened, escapes
//! the destination, or cannot be written aborts the run, and the caller
//! gets the error instead of a partial list. Files written before the
//! failure stay on disk.

use std::fs::DirBuilder;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::Result;
use crate::UnzipError;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::security::ensure_within;
use crate::security::join_entry;
use crate::security::normalize;
use crate::security::sanitize_permissions;

/// Extracts the container at `archive` into `dest`.
///
/// Returns every output path in container order.
///
/// # Examples
///
/// ```no_run
/// use dzip_core::extraction::extract_archive;
/// use std::path::Path;
///
/// let written = extract_archive(Path::new("/tmp/archive.zip"), Path::new("/tmp/archive"))?;
/// for path in &written {
///     println!("{}", path.display());
/// }
/// # Ok::<(), dzip_core::UnzipError>(())
/// ```
///
/// # Errors
///
/// Returns [`UnzipError::ArchiveOpen`] if the container cannot be read, and
/// any error from [`extract_entries`].
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let open_failed = |source: ZipError| UnzipError::ArchiveOpen {
        path: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive).map_err(|e| open_failed(ZipError::Io(e)))?;
    let mut zip = ZipArchive::new(file).map_err(open_failed)?;

    extract_entries(&mut zip, dest)
}

/// Extracts every entry of an open container into `dest`.
///
/// For each entry the output path is `dest` joined with the stored name and
/// lexically normalized; it must stay strictly inside `dest`. Directory
/// entries are created with their missing ancestors. File entries get their
/// missing ancestors, then are created or truncated with the stored mode
/// and filled with the entry content. Each entry's stream and output file
/// are closed before the next entry is opened.
///
/// # Errors
///
/// - [`UnzipError::EntryOpen`] for a malformed entry
/// - [`UnzipError::IllegalPath`] for an entry resolving outside `dest`
/// - [`UnzipError::DirectoryCreate`], [`UnzipError::FileCreate`] or
///   [`UnzipError::Copy`] for filesystem failures
pub fn extract_entries<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    dest: &Path,
) -> Result<Vec<PathBuf>> {
    let root = normalize(dest);
    let mut written = Vec::with_capacity(zip.len());
    let mut buffer = CopyBuffer::new();

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|source| UnzipError::EntryOpen { index, source })?;

        let target = join_entry(&root, entry.name());
        ensure_within(&target, &root)?;
        written.push(target.clone());

        if entry.is_dir() {
            create_dir_all(&target)?;
        } else {
            let mode = sanitize_permissions(entry.unix_mode());
            write_file(&mut entry, &target, mode, &mut buffer)?;
        }
    }

    Ok(written)
}

/// Creates `path` and its missing ancestors. Existing directories are fine.
fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::security::DIRECTORY_MODE);
    }

    builder
        .create(path)
        .map_err(|source| UnzipError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
}

fn write_file<R: Read + ?Sized>(
    content: &mut R,
    target: &Path,
    mode: u32,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }

    let mut output = create_file(target, mode).map_err(|source| UnzipError::FileCreate {
        path: target.to_path_buf(),
        source,
    })?;

    copy_with_buffer(content, &mut output, buffer).map_err(|source| UnzipError::Copy {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg_attr(not(unix), allow(unused_variables))]
fn create_file(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    options.open(path)
}
