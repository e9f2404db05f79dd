//! Path traversal validation.
//!
//! Everything here is lexical: no function touches the filesystem, so the
//! guard gives the same answer whether or not the target already exists.

use std::ffi::OsString;
use std::path::Component;
use std::path::MAIN_SEPARATOR_STR;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::UnzipError;

/// Lexically normalizes a path.
///
/// Drops `.` components and resolves `..` against the preceding normal
/// component. A `..` directly under the root is dropped; leading `..` of a
/// relative path are kept. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use dzip_core::security::normalize;
/// use std::path::Path;
///
/// assert_eq!(normalize(Path::new("/a/./b/../c")), Path::new("/a/c"));
/// assert_eq!(normalize(Path::new("/../etc")), Path::new("/etc"));
/// assert_eq!(normalize(Path::new("a/../../b")), Path::new("../b"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut stack: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => stack.push(component),
            },
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return PathBuf::from(".");
    }

    stack.iter().collect()
}

/// Joins a stored entry name onto a destination and normalizes the result.
///
/// The name is treated as relative even when it carries a root or drive
/// prefix, so `/etc/passwd` lands at `<dest>/etc/passwd` instead of
/// replacing the destination. `..` segments are kept for [`normalize`] to
/// resolve, which is what lets [`ensure_within`] see an escape.
///
/// # Examples
///
/// ```
/// use dzip_core::security::join_entry;
/// use std::path::Path;
///
/// let dest = Path::new("/tmp/out");
/// assert_eq!(join_entry(dest, "a/b.txt"), Path::new("/tmp/out/a/b.txt"));
/// assert_eq!(join_entry(dest, "/etc/passwd"), Path::new("/tmp/out/etc/passwd"));
/// assert_eq!(join_entry(dest, "../evil.txt"), Path::new("/tmp/evil.txt"));
/// ```
#[must_use]
pub fn join_entry(dest: &Path, name: &str) -> PathBuf {
    let mut joined = normalize(dest);

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::ParentDir => joined.push(Component::ParentDir),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    normalize(&joined)
}

/// Checks that `candidate` lies strictly below `dest`.
///
/// The check is a literal prefix comparison against the normalized
/// destination followed by a path separator. The destination itself does
/// not pass, and neither does a sibling sharing a name prefix
/// (`/tmp/out-evil` against `/tmp/out`).
///
/// # Errors
///
/// Returns [`UnzipError::IllegalPath`] naming `candidate` when it escapes.
///
/// # Examples
///
/// ```
/// use dzip_core::security::ensure_within;
/// use std::path::Path;
///
/// let dest = Path::new("/tmp/out");
/// assert!(ensure_within(Path::new("/tmp/out/file.txt"), dest).is_ok());
/// assert!(ensure_within(Path::new("/tmp/evil.txt"), dest).is_err());
/// assert!(ensure_within(Path::new("/tmp/out-evil/x"), dest).is_err());
/// ```
pub fn ensure_within(candidate: &Path, dest: &Path) -> Result<()> {
    let prefix = separator_terminated(&normalize(dest));

    if candidate
        .as_os_str()
        .as_encoded_bytes()
        .starts_with(prefix.as_encoded_bytes())
    {
        Ok(())
    } else {
        Err(UnzipError::IllegalPath {
            path: candidate.to_path_buf(),
        })
    }
}

fn separator_terminated(dir: &Path) -> OsString {
    let mut prefix = dir.as_os_str().to_os_string();
    if !prefix
        .as_encoded_bytes()
        .ends_with(MAIN_SEPARATOR_STR.as_bytes())
    {
        prefix.push(MAIN_SEPARATOR_STR);
    }
    prefix
}
