/// Plain-text report — fixed-width tables for a terminal.
///
/// Each section is a list of lines; a section ends with a newline and
/// sections are separated by a blank line.
use chrono::{DateTime, Local};
use disktally_core::analysis::{DirectoryTotal, TypeTotal};
use disktally_core::model::size::{format_count, format_percentage, format_size};
use disktally_core::model::{FileRecord, SkippedPath};
use disktally_core::report::{AnalysisReport, ScanSummary};

const RULE_WIDTH: usize = 70;
const PATH_COLUMN: usize = 50;
const MAX_PATH_CHARS: usize = 48;
const PATH_TAIL_CHARS: usize = 45;
const SKIPPED_SHOWN: usize = 5;

/// Render the whole report. Empty tables are left out entirely.
pub fn render_report(report: &AnalysisReport<'_>) -> String {
    let total = report.summary.total_size;
    let mut sections = vec![render_summary(&report.summary, report.skipped)];

    if !report.top_directories.is_empty() {
        sections.push(render_directories(&report.top_directories, total));
    }
    if !report.top_types.is_empty() {
        sections.push(render_types(&report.top_types, total));
    }
    if !report.largest_files.is_empty() {
        sections.push(render_largest_files(&report.largest_files));
    }

    sections.join("\n")
}

pub fn render_summary(summary: &ScanSummary, skipped: &[SkippedPath]) -> String {
    let mut lines = header("Summary");
    lines.push(format!("Total size scanned: {}", format_size(summary.total_size)));
    lines.push(format!("Number of files: {}", format_count(summary.file_count)));
    lines.push(format!("Number of directories: {}", format_count(summary.dir_count)));

    if !skipped.is_empty() {
        lines.push(format!(
            "Skipped paths (inaccessible): {}",
            format_count(skipped.len() as u64)
        ));
        lines.extend(skipped.iter().take(SKIPPED_SHOWN).map(|path| format!("  - {path}")));
        if skipped.len() > SKIPPED_SHOWN {
            lines.push(format!("  ... and {} more", skipped.len() - SKIPPED_SHOWN));
        }
    }

    finish(lines)
}

pub fn render_directories(rows: &[DirectoryTotal], total: u64) -> String {
    let mut lines = header("Top directories by size");
    lines.push(format!("{:<PATH_COLUMN$} {:>12} {:>10}", "Directory", "Size", "Percentage"));
    lines.push(rule('-'));

    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<PATH_COLUMN$} {:>12} {:>10}",
            shorten_path(&row.directory.to_string_lossy()),
            format_size(row.size),
            format_percentage(row.size, total),
        )
    }));

    finish(lines)
}

pub fn render_types(rows: &[TypeTotal], total: u64) -> String {
    let mut lines = header("Top file types by size");
    lines.push(format!(
        "{:<20} {:>12} {:>10} {:>10}",
        "Extension", "Size", "Files", "Percentage"
    ));
    lines.push(rule('-'));

    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<20} {:>12} {:>10} {:>10}",
            row.type_tag.as_str(),
            format_size(row.stats.total_size),
            format_count(row.stats.file_count),
            format_percentage(row.stats.total_size, total),
        )
    }));

    finish(lines)
}

pub fn render_largest_files(files: &[&FileRecord]) -> String {
    let mut lines = header("Largest files");
    lines.push(format!("{:<PATH_COLUMN$} {:>12}  {}", "File", "Size", "Modified"));
    lines.push(rule('-'));

    lines.extend(files.iter().map(|file| {
        let modified: DateTime<Local> = file.modified_at().into();
        format!(
            "{:<PATH_COLUMN$} {:>12}  {}",
            shorten_path(&file.path().to_string_lossy()),
            format_size(file.size()),
            modified.format("%Y-%m-%d"),
        )
    }));

    finish(lines)
}

/// Keep long paths inside the column: `...` followed by the tail.
pub fn shorten_path(path: &str) -> String {
    let chars = path.chars().count();
    if chars <= MAX_PATH_CHARS {
        return path.to_string();
    }
    let tail: String = path.chars().skip(chars - PATH_TAIL_CHARS).collect();
    format!("...{tail}")
}

fn header(title: &str) -> Vec<String> {
    vec![title.to_string(), rule('=')]
}

fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
