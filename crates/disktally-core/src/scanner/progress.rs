/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the caller via a crossbeam channel.
use super::ScanOutcome;
use std::time::Duration;

/// Progress updates sent from the scan thread.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        total_size: u64,
        current_path: String,
    },
    /// A path was added to the skip list (e.g. permission denied).
    Skipped { path: String, message: String },
    /// The walk finished; carries the complete, immutable result.
    Complete {
        duration: Duration,
        outcome: ScanOutcome,
    },
}
