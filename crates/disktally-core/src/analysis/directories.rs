/// Per-directory size totals.
///
/// Totals are **not** recursive: a directory's entry is the sum of the files
/// directly inside it, never its subtree. Callers wanting subtree totals must
/// roll the map up themselves.
use crate::model::FileRecord;
use std::collections::HashMap;
use std::path::PathBuf;

/// Immediate-parent directory → summed size of the files directly inside it.
pub type DirectoryAggregate = HashMap<PathBuf, u64>;

/// One row of a ranked directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTotal {
    pub directory: PathBuf,
    pub size: u64,
}

/// Sum record sizes by each record's immediate parent directory.
///
/// Single pass, order-independent. Directories holding no records get no
/// entry; the scan root gets no special treatment.
pub fn aggregate_by_directory(records: &[FileRecord]) -> DirectoryAggregate {
    let mut map = DirectoryAggregate::new();
    for rec in records {
        *map.entry(rec.parent_dir().to_path_buf()).or_insert(0) += rec.size();
    }
    map
}

/// The `n` largest directories, size descending.
///
/// Equal sizes are ordered by path so output does not depend on hash order.
pub fn top_directories(aggregate: &DirectoryAggregate, n: usize) -> Vec<DirectoryTotal> {
    let mut rows: Vec<DirectoryTotal> = aggregate
        .iter()
        .map(|(dir, &size)| DirectoryTotal {
            directory: dir.clone(),
            size,
        })
        .collect();
    rows.sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.directory.cmp(&b.directory)));
    rows.truncate(n);
    rows
}
