/// Report assembly — turns a finished scan into the summaries a frontend
/// renders.
///
/// Directory aggregation, type aggregation and the largest-files ranking
/// only read the record list, so they are fanned out with `rayon::join`.
use crate::analysis::{
    aggregate_by_directory, aggregate_by_type, largest_files, top_directories, top_types,
    DirectoryTotal, FileFilter, TypeTotal,
};
use crate::model::{FileRecord, SkippedPath};
use crate::scanner::ScanOutcome;
use std::time::SystemTime;

/// Default number of rows in the directory and type tables.
pub const DEFAULT_TOP_ROWS: usize = 10;

/// What to include in a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top_dirs: usize,
    pub top_types: usize,
    /// Rank the N largest files; `None` leaves the list empty.
    pub largest_files: Option<usize>,
    /// Applied to the largest-files ranking only, never to the totals.
    pub filter: FileFilter,
    /// Reference time for the age filter.
    pub now: SystemTime,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_dirs: DEFAULT_TOP_ROWS,
            top_types: DEFAULT_TOP_ROWS,
            largest_files: None,
            filter: FileFilter::default(),
            now: SystemTime::now(),
        }
    }
}

/// Headline totals of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_size: u64,
    pub file_count: u64,
    /// Distinct directories holding at least one file.
    pub dir_count: u64,
    pub skipped_count: u64,
}

/// Everything a presenter needs, borrowing from the scan it describes.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub summary: ScanSummary,
    pub top_directories: Vec<DirectoryTotal>,
    pub top_types: Vec<TypeTotal>,
    pub largest_files: Vec<&'a FileRecord>,
    pub skipped: &'a [SkippedPath],
}

/// Build the report for `outcome` in one pass per analysis.
pub fn build_report<'a>(outcome: &'a ScanOutcome, options: &ReportOptions) -> AnalysisReport<'a> {
    let records = outcome.records.as_slice();

    let ((by_dir, by_type), largest) = rayon::join(
        || {
            rayon::join(
                || aggregate_by_directory(records),
                || aggregate_by_type(records),
            )
        },
        || match options.largest_files {
            Some(n) => largest_files(records, n, &options.filter, options.now),
            None => Vec::new(),
        },
    );

    let summary = ScanSummary {
        total_size: outcome.total_size(),
        file_count: records.len() as u64,
        dir_count: by_dir.len() as u64,
        skipped_count: outcome.skipped.len() as u64,
    };

    AnalysisReport {
        summary,
        top_directories: top_directories(&by_dir, options.top_dirs),
        top_types: top_types(&by_type, options.top_types),
        largest_files: largest,
        skipped: &outcome.skipped,
    }
}
