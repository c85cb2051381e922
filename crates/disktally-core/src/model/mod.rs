/// Data model for a DiskTally scan.
///
/// A scan produces a flat list of [`FileRecord`]s plus a list of
/// [`SkippedPath`]s; everything else is derived from those two.
pub mod file_record;
pub mod size;

pub use file_record::{FileRecord, SkippedPath};
