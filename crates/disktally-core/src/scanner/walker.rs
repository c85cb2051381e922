/// Single-threaded directory walker built on `jwalk` in serial mode.
///
/// Produces a flat list of [`FileRecord`]s and a skip list. Every filesystem
/// call is made per entry and any failure turns into a [`SkippedPath`]; the
/// walk itself never fails. Output order is unspecified, only the set of
/// records and skipped paths is.
///
/// # Symlinks
///
/// With `follow_symlinks == false`, symlinked directories are not entered
/// and symlinked files are dropped silently (neither recorded nor skipped).
/// With `follow_symlinks == true` both are treated as their targets, and
/// paths below a followed directory link keep the link's path. A broken link,
/// or a directory link whose target contains one of the directories being
/// walked (a loop), goes to the skip list instead.
use crate::model::{FileRecord, SkippedPath};
use crate::scanner::progress::ScanProgress;
use crossbeam_channel::Sender;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Entries between two `ScanProgress::Update` messages.
const PROGRESS_INTERVAL: u64 = 1_000;

/// Everything one walk produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedPath>,
}

impl ScanOutcome {
    /// Sum of all record sizes.
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(FileRecord::size).sum()
    }
}

/// Walk `root` and collect every regular file beneath it.
pub fn walk(root: &Path, follow_symlinks: bool) -> ScanOutcome {
    walk_with_progress(root, follow_symlinks, None)
}

/// Same as [`walk`], additionally reporting progress on `progress_tx`.
///
/// Send failures (receiver dropped) are ignored; the walk always runs to the
/// end.
pub fn walk_with_progress(
    root: &Path,
    follow_symlinks: bool,
    progress_tx: Option<&Sender<ScanProgress>>,
) -> ScanOutcome {
    let start = Instant::now();
    let mut state = WalkState::new(progress_tx);

    let root_abs = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    info!("Starting scan of {}", root_abs.display());

    // Resolve symlinks and `..` so every record path is absolute and real.
    let root = match fs::canonicalize(&root_abs) {
        Ok(p) => p,
        Err(err) => {
            warn!("Scan root {} is not accessible: {err}", root_abs.display());
            state.skip(root_abs, &err);
            return state.finish(start);
        }
    };

    let root_meta = match fs::metadata(&root) {
        Ok(meta) => meta,
        Err(err) => {
            warn!("Cannot stat scan root {}: {err}", root.display());
            state.skip(root, &err);
            return state.finish(start);
        }
    };

    if !root_meta.is_dir() {
        match stat_record(root.clone()) {
            Ok(Some(record)) => state.push(record),
            Ok(None) => {}
            Err(err) => state.skip(root, &err),
        }
        return state.finish(start);
    }

    // Probe the root up front so an unreadable root degrades the whole scan
    // to `[root]` without walking anything.
    if let Err(err) = fs::read_dir(&root) {
        warn!("Cannot list scan root {}: {err}", root.display());
        state.skip(root, &err);
        return state.finish(start);
    }

    let mut chain = vec![root.clone()];
    walk_dir(&mut state, &root, &root, follow_symlinks, &mut chain);

    state.finish(start)
}

/// Walk the real directory `walk_root`, reporting paths as if they lived
/// under `shown_root` (differs from `walk_root` inside a followed dir link).
///
/// `chain` holds the resolved roots of every walk currently on the stack.
fn walk_dir(
    state: &mut WalkState<'_>,
    walk_root: &Path,
    shown_root: &Path,
    follow_symlinks: bool,
    chain: &mut Vec<PathBuf>,
) {
    let shown = |path: &Path| match path.strip_prefix(walk_root) {
        Ok(rel) if !rel.as_os_str().is_empty() => shown_root.join(rel),
        Ok(_) => shown_root.to_path_buf(),
        Err(_) => path.to_path_buf(),
    };

    // Links are resolved here rather than by jwalk so that broken links and
    // loops land in the skip list with the link's own path.
    let walker = jwalk::WalkDir::new(walk_root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Entry-level failures while reading a listing.
                match err.path() {
                    Some(path) => state.skip(shown(path), &err),
                    None => warn!("Walk error without a path: {err}"),
                }
                continue;
            }
        };

        let list_error = entry.read_children_error.as_ref().map(|e| e as &dyn Display);

        // The walk root was counted by the caller; only a listing failure is
        // left to record (reachable for followed link targets).
        if entry.depth == 0 {
            if let Some(err) = list_error {
                state.skip(shown_root.to_path_buf(), err);
            }
            continue;
        }

        let path = shown(&entry.path());
        state.tick(&path);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            state.visit_dir(path, list_error);
            continue;
        }

        if file_type.is_symlink() {
            if !follow_symlinks {
                continue;
            }
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => {
                    state.dirs_found += 1;
                    follow_dir_link(state, path, follow_symlinks, chain);
                    continue;
                }
                Ok(_) => {}
                Err(err) => {
                    state.skip(path, &err);
                    continue;
                }
            }
        }

        match stat_record(path.clone()) {
            Ok(Some(record)) => state.push(record),
            Ok(None) => {}
            Err(err) => state.skip(path, &err),
        }
    }
}

/// Descend into the directory behind `link`, unless doing so would loop.
///
/// A link loops when its resolved target contains the directory holding the
/// link, or any root already on `chain`.
fn follow_dir_link(
    state: &mut WalkState<'_>,
    link: PathBuf,
    follow_symlinks: bool,
    chain: &mut Vec<PathBuf>,
) {
    let target = match fs::canonicalize(&link) {
        Ok(t) => t,
        Err(err) => {
            state.skip(link, &err);
            return;
        }
    };

    let holder = link.parent().and_then(|p| fs::canonicalize(p).ok());
    if chain.iter().chain(holder.iter()).any(|dir| dir.starts_with(&target)) {
        warn!("Not following {}: link loops back to {}", link.display(), target.display());
        state.skip(link, &"symbolic link loop");
        return;
    }

    chain.push(target.clone());
    walk_dir(state, &target, &link, follow_symlinks, chain);
    chain.pop();
}

/// Stat `path` (following links) into a record.
///
/// `Ok(None)` means the entry turned out to be a directory, e.g. it was
/// replaced between listing and stat.
fn stat_record(path: PathBuf) -> io::Result<Option<FileRecord>> {
    let meta = fs::metadata(&path)?;
    if meta.is_dir() {
        return Ok(None);
    }
    let modified = meta.modified()?;
    Ok(Some(FileRecord::new(path, meta.len(), modified)))
}

/// Accumulator for one walk.
struct WalkState<'a> {
    outcome: ScanOutcome,
    progress_tx: Option<&'a Sender<ScanProgress>>,
    entries_seen: u64,
    dirs_found: u64,
    total_size: u64,
}

impl<'a> WalkState<'a> {
    fn new(progress_tx: Option<&'a Sender<ScanProgress>>) -> Self {
        Self {
            outcome: ScanOutcome::default(),
            progress_tx,
            entries_seen: 0,
            dirs_found: 0,
            total_size: 0,
        }
    }

    fn push(&mut self, record: FileRecord) {
        self.total_size += record.size();
        self.outcome.records.push(record);
    }

    /// Count a listed directory. jwalk reports a failure to read its
    /// children on the entry itself, not as an `Err` item.
    fn visit_dir(&mut self, path: PathBuf, list_error: Option<&dyn Display>) {
        self.dirs_found += 1;
        if let Some(err) = list_error {
            self.skip(path, err);
        }
    }

    fn skip(&mut self, path: PathBuf, reason: &dyn Display) {
        debug!("Skipping {}: {reason}", path.display());
        if let Some(tx) = self.progress_tx {
            let _ = tx.send(ScanProgress::Skipped {
                path: path.to_string_lossy().into_owned(),
                message: reason.to_string(),
            });
        }
        self.outcome.skipped.push(SkippedPath::new(path));
    }

    /// Count one entry and emit an `Update` every `PROGRESS_INTERVAL`.
    fn tick(&mut self, current: &Path) {
        self.entries_seen += 1;
        if !self.entries_seen.is_multiple_of(PROGRESS_INTERVAL) {
            return;
        }
        if let Some(tx) = self.progress_tx {
            let _ = tx.send(ScanProgress::Update {
                files_found: self.outcome.records.len() as u64,
                dirs_found: self.dirs_found,
                total_size: self.total_size,
                current_path: current.to_string_lossy().into_owned(),
            });
        }
    }

    fn finish(self, start: Instant) -> ScanOutcome {
        info!(
            "Scan complete: {} files, {} dirs, {} skipped in {:?}",
            self.outcome.records.len(),
            self.dirs_found,
            self.outcome.skipped.len(),
            start.elapsed()
        );
        self.outcome
    }
}
