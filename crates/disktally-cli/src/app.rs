/// Application flow — scan, analyse, print, export.
use crate::args::Args;
use crate::presenter::{csv_export, json, text};
use anyhow::{bail, Context};
use disktally_core::analysis::largest_files;
use disktally_core::report::build_report;
use disktally_core::scanner::start_scan;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::SystemTime;
use tracing::info;

/// Separator printed between the text report and the JSON document.
pub const JSON_MARKER: &str = "\n--- JSON Output ---\n";

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// A report was written.
    Reported,
    /// The scan found no files; nothing but a notice on stderr.
    NoFiles,
}

/// Run one analysis and write the report to `out`.
///
/// Notices go to stderr; `out` only ever receives the report itself.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<RunStatus> {
    let scan_path = std::path::absolute(&args.path)
        .with_context(|| format!("cannot resolve path {}", args.path.display()))?;
    if !scan_path.try_exists().unwrap_or(false) {
        bail!("path does not exist: {}", args.path.display());
    }

    let options = args.report_options(SystemTime::now())?;

    let outcome = start_scan(scan_path.clone(), args.follow_symlinks)?
        .wait(args.scan_timeout())
        .with_context(|| format!("scan of {} failed", scan_path.display()))?;

    if outcome.records.is_empty() {
        eprintln!("No files found in: {}", scan_path.display());
        return Ok(RunStatus::NoFiles);
    }

    let report = build_report(&outcome, &options);

    out.write_all(text::render_report(&report).as_bytes())
        .context("failed to write report")?;
    if args.json {
        let doc = json::to_json(&report).context("failed to serialise report")?;
        writeln!(out, "{JSON_MARKER}")?;
        writeln!(out, "{doc}")?;
    }
    out.flush()?;

    if let Some(csv_path) = &args.export_csv {
        // Without --show-large-files the export covers every file the filters keep.
        let ranked = match args.show_large_files {
            Some(_) => report.largest_files.clone(),
            None => largest_files(&outcome.records, usize::MAX, &options.filter, options.now),
        };
        let file = File::create(csv_path)
            .with_context(|| format!("cannot create {}", csv_path.display()))?;
        csv_export::write_csv(&ranked, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        info!("Exported {} files to {}", ranked.len(), csv_path.display());
    }

    Ok(RunStatus::Reported)
}
