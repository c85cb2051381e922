/// Command-line arguments and their conversion into report options.
use crate::size_arg::parse_size;
use anyhow::Context;
use clap::{ArgAction, Parser, ValueHint};
use disktally_core::analysis::FileFilter;
use disktally_core::report::{ReportOptions, DEFAULT_TOP_ROWS};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "disktally",
    version,
    about = "Find out what is using disk space under a directory"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Path to scan
    #[arg(default_value = ".", value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// Number of top directories to show
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_ROWS, help_heading = "Report")]
    pub top_dirs: usize,

    /// Number of top file types to show
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_ROWS, help_heading = "Report")]
    pub top_types: usize,

    /// Show the N largest files
    #[arg(long, value_name = "N", help_heading = "Report")]
    pub show_large_files: Option<usize>,

    /// Only list files at least this large (e.g. 100M, 1.5GiB, 4096)
    #[arg(long, value_name = "SIZE", help_heading = "Filters")]
    pub min_size: Option<String>,

    /// Only list files last modified more than DAYS days ago
    #[arg(long, value_name = "DAYS", help_heading = "Filters")]
    pub older_than: Option<u64>,

    /// Also print the report as JSON
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Write the ranked file list to a CSV file
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub export_csv: Option<PathBuf>,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow_symlinks: bool,

    /// Give up if the scan takes longer than SECS seconds
    #[arg(long, value_name = "SECS", help_heading = "Scan")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level implied by the `-v` count; `RUST_LOG` overrides it.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn scan_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Parse the filter flags into core report options, ages relative to `now`.
    pub fn report_options(&self, now: SystemTime) -> anyhow::Result<ReportOptions> {
        let min_size = self
            .min_size
            .as_deref()
            .map(parse_size)
            .transpose()
            .context("invalid size format")?;

        Ok(ReportOptions {
            top_dirs: self.top_dirs,
            top_types: self.top_types,
            largest_files: self.show_large_files,
            filter: FileFilter {
                min_size,
                older_than_days: self.older_than,
            },
            now,
        })
    }
}
