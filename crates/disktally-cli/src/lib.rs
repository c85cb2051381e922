/// DiskTally CLI — argument parsing, size strings, and report rendering.
///
/// Everything the `disktally` binary does beyond process setup lives here so
/// it can be driven from tests with an in-memory writer.
///
/// # Modules
///
/// - [`args`] — clap argument definitions and conversion to report options.
/// - [`size_arg`] — human size strings such as `100M` or `1.5GiB`.
/// - [`presenter`] — text, JSON and CSV renderings of a report.
/// - [`app`] — the scan → report → output flow.
pub mod app;
pub mod args;
pub mod presenter;
pub mod size_arg;

pub use app::{run, RunStatus, JSON_MARKER};
pub use args::Args;
