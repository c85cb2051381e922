/// CSV export of a ranked file list.
use chrono::{DateTime, SecondsFormat, Utc};
use disktally_core::model::FileRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::io;

const HEADER: [&str; 4] = ["path", "size", "modified_at", "type_tag"];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    path: Cow<'a, str>,
    size: u64,
    modified_at: String,
    type_tag: &'a str,
}

/// Write `files` as CSV to `writer`, header first, in the order given.
///
/// The header is written even for an empty list.
pub fn write_csv<W: io::Write>(files: &[&FileRecord], writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    for file in files {
        let modified: DateTime<Utc> = file.modified_at().into();
        wtr.serialize(CsvRow {
            path: file.path().to_string_lossy(),
            size: file.size(),
            modified_at: modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            type_tag: file.type_tag(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
