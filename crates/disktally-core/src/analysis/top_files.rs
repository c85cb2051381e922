/// Top-N largest files, with optional size and age filters.
///
/// Works on borrowed records so ranking never copies paths. The filter and
/// the ranking are separate steps; [`largest_files`] chains them the way the
/// report needs.
use crate::model::FileRecord;
use std::time::{Duration, SystemTime};

const SECS_PER_DAY: u64 = 86_400;

/// Size/age predicates for the largest-files listing.
///
/// A `None` predicate passes every record. Both predicates AND together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    /// Keep records with `size >= min_size`.
    pub min_size: Option<u64>,
    /// Keep records last modified at or before `now - days`.
    pub older_than_days: Option<u64>,
}

impl FileFilter {
    pub fn is_empty(&self) -> bool {
        self.min_size.is_none() && self.older_than_days.is_none()
    }

    /// Resolve the age predicate against `now`.
    fn cutoff(&self, now: SystemTime) -> Cutoff {
        match self.older_than_days {
            None => Cutoff::Any,
            Some(days) => {
                let span = Duration::from_secs(days.saturating_mul(SECS_PER_DAY));
                now.checked_sub(span).map_or(Cutoff::Unreachable, Cutoff::At)
            }
        }
    }
}

/// The age predicate resolved against a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cutoff {
    /// No age filter.
    Any,
    /// Keep records modified at or before this instant.
    At(SystemTime),
    /// The cutoff lies before anything the platform clock can represent;
    /// no record can be that old.
    Unreachable,
}

impl Cutoff {
    fn admits(self, modified: SystemTime) -> bool {
        match self {
            Cutoff::Any => true,
            Cutoff::At(limit) => modified <= limit,
            Cutoff::Unreachable => false,
        }
    }
}

/// Apply `filter` to `records`, keeping input order.
///
/// `min_size` is inclusive. The age cutoff is inclusive on the old side:
/// a record modified exactly at `now - days` is kept, anything newer is not.
pub fn filter_files<'a>(
    records: &'a [FileRecord],
    filter: &FileFilter,
    now: SystemTime,
) -> Vec<&'a FileRecord> {
    let cutoff = filter.cutoff(now);
    if cutoff == Cutoff::Unreachable {
        return Vec::new();
    }

    records
        .iter()
        .filter(|rec| filter.min_size.is_none_or(|min| rec.size() >= min))
        .filter(|rec| cutoff.admits(rec.modified_at()))
        .collect()
}

/// The `n` largest records, size descending.
///
/// The sort is stable, so equal sizes keep their input order. Asking for
/// more than are available returns all of them; `n == 0` returns none.
pub fn top_n<'a, I>(records: I, n: usize) -> Vec<&'a FileRecord>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<&FileRecord> = records.into_iter().collect();
    ranked.sort_by(|a, b| b.size().cmp(&a.size()));
    ranked.truncate(n);
    ranked
}

/// Filter, then rank: the `n` largest records that pass `filter`.
pub fn largest_files<'a>(
    records: &'a [FileRecord],
    n: usize,
    filter: &FileFilter,
    now: SystemTime,
) -> Vec<&'a FileRecord> {
    if filter.is_empty() {
        return top_n(records, n);
    }
    top_n(filter_files(records, filter, now), n)
}
