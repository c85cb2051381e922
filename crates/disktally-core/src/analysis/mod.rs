/// Analysis modules — post-scan algorithms over the flat record list.
///
/// Aggregation and ranking only read the records, so they can run in any
/// order (or concurrently) over the same scan.
pub mod directories;
pub mod extensions;
pub mod file_types;
pub mod top_files;

pub use directories::{aggregate_by_directory, top_directories, DirectoryAggregate, DirectoryTotal};
pub use extensions::{classify, NO_EXTENSION};
pub use file_types::{aggregate_by_type, top_types, TypeAggregate, TypeStats, TypeTotal};
pub use top_files::{filter_files, largest_files, top_n, FileFilter};
