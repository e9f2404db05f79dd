//! Extract command implementation.

use crate::error::Failure;
use crate::error::convert_archive_error;
use crate::error::convert_unzip_error;
use crate::output::format_extracted;
use console::Term;
use dzip_core::Config;
use dzip_core::destination_for;
use dzip_core::extract_archive;

/// Extracts the configured container next to itself and prints every path
/// written.
pub fn execute(config: &Config, term: &Term) -> Result<(), Failure> {
    let archive = config.archive();
    let dest =
        destination_for(archive).map_err(|err| Failure::Archive(convert_archive_error(&err)))?;

    let written = extract_archive(archive, &dest)
        .map_err(|err| Failure::Extraction(convert_unzip_error(&err, archive, &dest)))?;

    // The files are already on disk; a closed stdout does not undo that.
    let _ = term.write_line(&format_extracted(&written));
    Ok(())
}
