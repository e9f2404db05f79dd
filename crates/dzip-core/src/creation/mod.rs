//! Archive creation.

pub mod report;
pub mod zip;

pub use self::zip::add_file;
pub use self::zip::create_archive;
pub use self::zip::pack_files;
pub use report::PackReport;
