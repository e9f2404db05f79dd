//! Archive extraction.

pub mod destination;
pub mod engine;

pub use destination::destination_for;
pub use engine::extract_archive;
pub use engine::extract_entries;
