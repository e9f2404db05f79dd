//! File permission handling for extracted entries.

/// Mode used when an entry carries no Unix permissions.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Mode used for directories created during extraction, before umask.
pub const DIRECTORY_MODE: u32 = 0o777;

/// Reduces a stored entry mode to plain permission bits.
///
/// Setuid, setgid and sticky bits and any file-type bits are removed.
/// Entries without a stored mode fall back to [`DEFAULT_FILE_MODE`].
///
/// # Examples
///
/// ```
/// use dzip_core::security::sanitize_permissions;
///
/// assert_eq!(sanitize_permissions(Some(0o100_755)), 0o755);
/// assert_eq!(sanitize_permissions(Some(0o4755)), 0o755);
/// assert_eq!(sanitize_permissions(None), 0o644);
/// ```
#[must_use]
pub const fn sanitize_permissions(mode: Option<u32>) -> u32 {
    match mode {
        Some(mode) => mode & 0o777,
        None => DEFAULT_FILE_MODE,
    }
}
