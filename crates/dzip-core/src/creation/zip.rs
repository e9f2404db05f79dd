//! ZIP archive creation.
//!
//! Packing is best-effort: an input that cannot be added is logged and
//! skipped, and the rest of the batch still lands in the container. Only
//! failing to create or finish the container itself is fatal.

use crate::ArchiveError;
use crate::EntryError;
use crate::Log;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::creation::report::PackReport;
use std::fs::File;
use std::fs::Metadata;
use std::fs::OpenOptions;
use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Mode of a newly created container file, before umask.
#[cfg(unix)]
const ARCHIVE_FILE_MODE: u32 = 0o644;

/// Creates (or truncates) `output` and packs `inputs` into it.
///
/// Each input becomes one entry named exactly as the path was given. Inputs
/// that fail are reported through `log` and recorded in
/// [`PackReport::skipped`].
///
/// # Examples
///
/// ```no_run
/// use dzip_core::NoopLog;
/// use dzip_core::creation::create_archive;
///
/// let report = create_archive("out.zip", &["a.txt", "b.txt"], &NoopLog)?;
/// println!("Added {} files", report.files_added());
/// # Ok::<(), dzip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns [`ArchiveError::Create`] if the output cannot be opened for
/// writing and [`ArchiveError::Finish`] if the central directory cannot be
/// written.
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    output: P,
    inputs: &[Q],
    log: &dyn Log,
) -> Result<PackReport, ArchiveError> {
    let output = output.as_ref();
    let file = open_output(output).map_err(|source| ArchiveError::Create {
        path: output.to_path_buf(),
        source,
    })?;

    let mut zip = ZipWriter::new(file);
    let report = pack_files(&mut zip, inputs, log);

    zip.finish().map_err(|source| ArchiveError::Finish {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}

/// Adds every input to `zip`, logging and skipping the ones that fail.
pub fn pack_files<W: Write + Seek, P: AsRef<Path>>(
    zip: &mut ZipWriter<W>,
    inputs: &[P],
    log: &dyn Log,
) -> PackReport {
    let mut report = PackReport::new();
    let mut buffer = CopyBuffer::new();

    for input in inputs {
        let path = input.as_ref();
        match add_file(zip, path, &mut buffer) {
            Ok(bytes) => report.record_entry(entry_name(path), bytes),
            Err(err) => {
                log.log(&format!(
                    "Failed to add file {} to zip: {err}",
                    path.display()
                ));
                report.record_skip(path);
            }
        }
    }

    report
}

/// Writes one source file as a new entry and returns the bytes copied.
///
/// # Errors
///
/// - [`EntryError::SourceOpen`] if the source cannot be opened or is a
///   directory. No entry is started in that case.
/// - [`EntryError::EntryCreate`] if the container rejects the new entry.
/// - [`EntryError::Copy`] if reading the source or writing the entry fails.
///   The half-written entry is discarded.
/// - [`EntryError::Abort`] if the half-written entry cannot be discarded.
pub fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    buffer: &mut CopyBuffer,
) -> Result<u64, EntryError> {
    let source_open = |source: io::Error| EntryError::SourceOpen {
        path: path.to_path_buf(),
        source,
    };

    let mut source = File::open(path).map_err(source_open)?;
    let metadata = source.metadata().map_err(source_open)?;
    if metadata.is_dir() {
        return Err(source_open(io::Error::from(io::ErrorKind::IsADirectory)));
    }

    let name = entry_name(path);
    zip.start_file(name.as_str(), entry_options(&metadata))
        .map_err(|source| EntryError::EntryCreate { name, source })?;

    write_entry(zip, &mut source, path, buffer)
}

/// Fills the entry just started in `zip` from `content`.
///
/// On a copy failure the partial entry is discarded so the container stays
/// readable; if that fails too the error is [`EntryError::Abort`].
fn write_entry<W: Write + Seek, R: Read + ?Sized>(
    zip: &mut ZipWriter<W>,
    content: &mut R,
    path: &Path,
    buffer: &mut CopyBuffer,
) -> Result<u64, EntryError> {
    copy_with_buffer(content, zip, buffer).or_else(|source| {
        let path = path.to_path_buf();
        match zip.abort_file() {
            Ok(()) => Err(EntryError::Copy { path, source }),
            Err(abort) => Err(EntryError::Abort {
                path,
                source,
                abort,
            }),
        }
    })
}

/// The stored entry name for an input path: the path string, verbatim.
fn entry_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn entry_options(metadata: &Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(metadata.len() >= u64::from(u32::MAX));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode() & 0o777)
    }

    #[cfg(not(unix))]
    {
        options
    }
}

fn open_output(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(ARCHIVE_FILE_MODE);
    }

    options.open(path)
}
