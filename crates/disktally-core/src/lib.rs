/// DiskTally Core — scanning, aggregation, and data model.
///
/// This crate contains all business logic with zero terminal I/O.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Flat file records, skipped paths, and size formatting.
/// - [`scanner`] — Single-threaded tree walk plus a background scan handle.
/// - [`analysis`] — Extension classification, aggregation, filtering, ranking.
/// - [`report`] — One-shot assembly of a finished scan into a report.
pub mod analysis;
pub mod model;
pub mod report;
pub mod scanner;
