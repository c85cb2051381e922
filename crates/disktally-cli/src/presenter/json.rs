/// JSON report — the same data as the text report, machine-readable.
///
/// Paths are emitted lossily as UTF-8 so a stray non-UTF-8 name never
/// aborts serialisation.
use disktally_core::model::size::format_size;
use disktally_core::report::AnalysisReport;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    top_directories: Vec<JsonDirectory<'a>>,
    top_file_types: Vec<JsonFileType<'a>>,
    largest_files: Vec<JsonFile<'a>>,
    skipped_paths: Vec<Cow<'a, str>>,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    total_size: u64,
    total_size_human: String,
    file_count: u64,
    dir_count: u64,
    skipped_paths_count: u64,
}

#[derive(Debug, Serialize)]
struct JsonDirectory<'a> {
    directory: Cow<'a, str>,
    size: u64,
}

#[derive(Debug, Serialize)]
struct JsonFileType<'a> {
    extension: &'a str,
    total_size: u64,
    file_count: u64,
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    path: Cow<'a, str>,
    size: u64,
    /// Seconds since the Unix epoch, fractional.
    modified_at: f64,
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a AnalysisReport<'a>) -> Self {
        let summary = &report.summary;
        Self {
            summary: JsonSummary {
                total_size: summary.total_size,
                total_size_human: format_size(summary.total_size),
                file_count: summary.file_count,
                dir_count: summary.dir_count,
                skipped_paths_count: summary.skipped_count,
            },
            top_directories: report
                .top_directories
                .iter()
                .map(|row| JsonDirectory {
                    directory: row.directory.to_string_lossy(),
                    size: row.size,
                })
                .collect(),
            top_file_types: report
                .top_types
                .iter()
                .map(|row| JsonFileType {
                    extension: row.type_tag.as_str(),
                    total_size: row.stats.total_size,
                    file_count: row.stats.file_count,
                })
                .collect(),
            largest_files: report
                .largest_files
                .iter()
                .map(|rec| JsonFile {
                    path: rec.path().to_string_lossy(),
                    size: rec.size(),
                    modified_at: rec.modified_secs(),
                })
                .collect(),
            skipped_paths: report
                .skipped
                .iter()
                .map(|s| s.path.to_string_lossy())
                .collect(),
        }
    }
}

/// Serialise `report` as pretty-printed JSON (two-space indent).
pub fn to_json(report: &AnalysisReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_report(report))
}
