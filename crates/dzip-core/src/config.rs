//! Invocation configuration.

use std::path::Path;
use std::path::PathBuf;

/// What an invocation does with its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write the input files into a new container.
    Pack,
    /// Unpack the container next to itself.
    #[default]
    Extract,
}

/// Configuration for a single invocation.
///
/// Built once from the command line and handed by reference to the
/// operations; nothing mutates it afterwards.
///
/// # Examples
///
/// ```
/// use dzip_core::Config;
/// use dzip_core::Mode;
///
/// let config = Config::pack("out.zip", ["a.txt", "b.txt"]);
/// assert_eq!(config.mode(), Mode::Pack);
/// assert_eq!(config.inputs().len(), 2);
///
/// let config = Config::extract("out.zip");
/// assert!(config.inputs().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    archive: PathBuf,
    mode: Mode,
    inputs: Vec<PathBuf>,
}

impl Config {
    /// Creates a configuration from its parts.
    ///
    /// Inputs are kept for [`Mode::Pack`] and dropped for
    /// [`Mode::Extract`], which has no use for them.
    pub fn new<P, I, Q>(archive: P, mode: Mode, inputs: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = Q>,
        Q: Into<PathBuf>,
    {
        let inputs = match mode {
            Mode::Pack => inputs.into_iter().map(Into::into).collect(),
            Mode::Extract => Vec::new(),
        };

        Self {
            archive: archive.into(),
            mode,
            inputs,
        }
    }

    /// Configuration that packs `inputs` into `archive`.
    pub fn pack<P, I, Q>(archive: P, inputs: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = Q>,
        Q: Into<PathBuf>,
    {
        Self::new(archive, Mode::Pack, inputs)
    }

    /// Configuration that extracts `archive`.
    pub fn extract<P: Into<PathBuf>>(archive: P) -> Self {
        Self::new(archive, Mode::Extract, std::iter::empty::<PathBuf>())
    }

    /// The container path.
    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// The selected mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Files to pack, in the order given.
    #[must_use]
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }
}
