//! Test utilities for building in-memory ZIP containers.
//!
//! Entry names are written exactly as given, including names a packer would
//! never produce (`../evil.txt`, `/etc/passwd`), so extraction can be
//! exercised against hostile input. The byte-level helpers damage a built
//! container in place to reach reader errors a well-formed writer never
//! produces.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builder for ZIP test containers with files and directories.
///
/// # Examples
///
/// ```
/// use dzip_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .add_file("../escape.txt", b"evil")
///     .build();
/// ```
pub struct ZipTestBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file with mode 0o644.
    #[must_use]
    pub fn add_file(self, name: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(name, data, 0o644)
    }

    /// Adds a regular file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, name: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(mode);

        self.zip.start_file(name, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(name, options).unwrap();
        self
    }

    /// Builds and returns the container bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

const LOCAL_HEADER_SIGNATURE: &[u8; 4] = b"PK\x03\x04";
const CENTRAL_HEADER_SIGNATURE: &[u8; 4] = b"PK\x01\x02";

/// Offset of the compression method in a local file header.
const LOCAL_METHOD_OFFSET: usize = 8;
/// Offset of the compression method in a central directory header.
const CENTRAL_METHOD_OFFSET: usize = 10;
/// Fixed size of a local file header, before the name and extra field.
const LOCAL_HEADER_LEN: usize = 30;

fn find_signature(data: &[u8], signature: &[u8; 4]) -> usize {
    data.windows(signature.len())
        .position(|window| window == signature)
        .unwrap()
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Rewrites the compression method of the first entry, in both its local
/// and central directory headers.
///
/// # Examples
///
/// ```
/// use dzip_core::test_utils::ZipTestBuilder;
/// use dzip_core::test_utils::set_compression_method;
///
/// let mut data = ZipTestBuilder::new().add_file("a.txt", b"a").build();
/// set_compression_method(&mut data, 12);
/// ```
pub fn set_compression_method(data: &mut [u8], method: u16) {
    let method = method.to_le_bytes();

    let local = find_signature(data, LOCAL_HEADER_SIGNATURE) + LOCAL_METHOD_OFFSET;
    data[local..local + 2].copy_from_slice(&method);

    let central = find_signature(data, CENTRAL_HEADER_SIGNATURE) + CENTRAL_METHOD_OFFSET;
    data[central..central + 2].copy_from_slice(&method);
}

/// Flips the first content byte of the first entry, leaving its stored
/// checksum stale. The entry must be non-empty and stored uncompressed.
pub fn corrupt_first_entry(data: &mut [u8]) {
    let local = find_signature(data, LOCAL_HEADER_SIGNATURE);
    let name_len = usize::from(read_u16(data, local + 26));
    let extra_len = usize::from(read_u16(data, local + 28));
    data[local + LOCAL_HEADER_LEN + name_len + extra_len] ^= 0xFF;
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip::ZipArchive;

    #[test]
    fn test_builder_keeps_hostile_names() {
        let data = ZipTestBuilder::new()
            .add_file("../evil.txt", b"evil")
            .add_directory("dir/")
            .build();

        let mut archive = ZipArchive::new(Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "../evil.txt");
        assert!(archive.by_index(1).unwrap().is_dir());
    }

    #[test]
    fn test_set_compression_method_patches_both_headers() {
        let mut data = ZipTestBuilder::new().add_file("a.txt", b"a").build();
        set_compression_method(&mut data, 12);

        let local = find_signature(&data, LOCAL_HEADER_SIGNATURE);
        let central = find_signature(&data, CENTRAL_HEADER_SIGNATURE);
        assert_eq!(read_u16(&data, local + LOCAL_METHOD_OFFSET), 12);
        assert_eq!(read_u16(&data, central + CENTRAL_METHOD_OFFSET), 12);
    }

    #[test]
    fn test_corrupt_first_entry_changes_content_only() {
        let clean = ZipTestBuilder::new().add_file("a.txt", b"abc").build();
        let mut damaged = clean.clone();
        corrupt_first_entry(&mut damaged);

        let changed: Vec<usize> = (0..clean.len())
            .filter(|&i| clean[i] != damaged[i])
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(damaged[changed[0]], b'a' ^ 0xFF);
    }
}
