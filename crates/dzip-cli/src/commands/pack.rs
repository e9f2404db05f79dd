//! Pack command implementation.

use crate::error::Failure;
use crate::error::convert_archive_error;
use dzip_core::Config;
use dzip_core::Log;
use dzip_core::create_archive;

/// Packs the configured inputs into the container.
///
/// Inputs that cannot be added are logged and skipped; there is no success
/// summary.
pub fn execute(config: &Config, log: &dyn Log) -> Result<(), Failure> {
    create_archive(config.archive(), config.inputs(), log)
        .map(drop)
        .map_err(|err| Failure::Archive(convert_archive_error(&err)))
}
