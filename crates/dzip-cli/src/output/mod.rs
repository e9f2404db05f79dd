//! Console output.

mod logger;

pub use logger::TimestampLogger;

use std::path::PathBuf;

/// Renders the success listing of an extraction run.
pub fn format_extracted(paths: &[PathBuf]) -> String {
    let mut out = String::from("Unzipped:");
    for path in paths {
        out.push('\n');
        out.push_str(&path.to_string_lossy());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extracted() {
        let paths = [PathBuf::from("/tmp/a/x.txt"), PathBuf::from("/tmp/a/dir")];
        assert_eq!(
            format_extracted(&paths),
            "Unzipped:\n/tmp/a/x.txt\n/tmp/a/dir"
        );
    }

    #[test]
    fn test_format_extracted_empty() {
        assert_eq!(format_extracted(&[]), "Unzipped:");
    }
}
