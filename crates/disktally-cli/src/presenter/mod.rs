/// Presenters — turn an [`AnalysisReport`](disktally_core::report::AnalysisReport)
/// into text, JSON or CSV.
pub mod csv_export;
pub mod json;
pub mod text;
