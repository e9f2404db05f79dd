//! Packing operation reporting.

use std::path::Path;
use std::path::PathBuf;

/// Report of a packing run.
///
/// # Examples
///
/// ```
/// use dzip_core::creation::PackReport;
/// use std::path::Path;
///
/// let mut report = PackReport::new();
/// report.record_entry("a.txt".to_string(), 12);
/// report.record_skip(Path::new("missing.txt"));
///
/// assert_eq!(report.files_added(), 1);
/// assert!(report.has_failures());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackReport {
    /// Entry names written, in input order.
    pub entries: Vec<String>,

    /// Inputs that failed and were left out of the container.
    pub skipped: Vec<PathBuf>,

    /// Total uncompressed bytes copied into the container.
    pub bytes_written: u64,
}

impl PackReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully written entry.
    pub fn record_entry(&mut self, name: String, bytes: u64) {
        self.entries.push(name);
        self.bytes_written = self.bytes_written.saturating_add(bytes);
    }

    /// Records an input that was skipped.
    pub fn record_skip(&mut self, path: &Path) {
        self.skipped.push(path.to_path_buf());
    }

    /// Number of entries written.
    #[must_use]
    pub fn files_added(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any input was skipped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty()
    }
}
