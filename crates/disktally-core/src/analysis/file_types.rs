/// File type aggregation based on normalised extensions.
///
/// Groups records by their type tag (see [`super::extensions::classify`])
/// and computes size/count totals per tag.
use crate::model::FileRecord;
use compact_str::CompactString;
use std::collections::HashMap;

/// Size and count totals for a single type tag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeStats {
    pub total_size: u64,
    pub file_count: u64,
}

/// Type tag → totals.
pub type TypeAggregate = HashMap<CompactString, TypeStats>;

/// One row of a ranked type listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotal {
    pub type_tag: CompactString,
    pub stats: TypeStats,
}

/// Sum sizes and count records per type tag in a single pass.
pub fn aggregate_by_type(records: &[FileRecord]) -> TypeAggregate {
    let mut map = TypeAggregate::new();
    for rec in records {
        let entry = map.entry(CompactString::new(rec.type_tag())).or_default();
        entry.total_size += rec.size();
        entry.file_count += 1;
    }
    map
}

/// The `n` largest type tags by total size, descending, ties by tag.
pub fn top_types(aggregate: &TypeAggregate, n: usize) -> Vec<TypeTotal> {
    let mut rows: Vec<TypeTotal> = aggregate
        .iter()
        .map(|(tag, &stats)| TypeTotal {
            type_tag: tag.clone(),
            stats,
        })
        .collect();
    rows.sort_unstable_by(|a, b| {
        b.stats
            .total_size
            .cmp(&a.stats.total_size)
            .then_with(|| a.type_tag.cmp(&b.type_tag))
    });
    rows.truncate(n);
    rows
}
