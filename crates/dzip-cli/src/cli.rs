//! CLI argument parsing using clap.

use clap::Parser;
use dzip_core::Config;
use dzip_core::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dzip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target zip file to act on
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Pack FILES into the zip instead of extracting it
    #[arg(long)]
    pub zip: bool,

    /// Files to add to the zip (pack mode only)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Freezes the parsed arguments into the configuration the operations
    /// run with.
    pub fn into_config(self) -> Config {
        let mode = if self.zip { Mode::Pack } else { Mode::Extract };
        Config::new(self.file, mode, self.files)
    }
}
