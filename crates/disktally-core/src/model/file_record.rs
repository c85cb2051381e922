/// A single regular file discovered by the walker.
///
/// Records are stored in a flat `Vec<FileRecord>` and never mutated after the
/// walk returns. Every grouping (by directory, by type) and every ranking is
/// computed from that one vector, so there is no tree to keep consistent.
use crate::analysis::extensions::classify;
use compact_str::CompactString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// One file's point-in-time metadata.
///
/// Fields are private so that `type_tag` can only ever be derived from the
/// path's final component (see [`FileRecord::new`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path as walked (symlinked directories keep the link path).
    path: PathBuf,

    /// Logical file size in bytes.
    size: u64,

    /// Last-modified timestamp at scan time.
    modified_at: SystemTime,

    /// Normalised extension, e.g. `".txt"` or `"no extension"`.
    type_tag: CompactString,
}

impl FileRecord {
    /// Build a record, classifying the file name into its type tag.
    pub fn new(path: PathBuf, size: u64, modified_at: SystemTime) -> Self {
        let type_tag = {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            classify(&name)
        };
        Self {
            path,
            size,
            modified_at,
            type_tag,
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }

    #[inline]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The directory that directly contains this file.
    ///
    /// A path without a parent (a bare filesystem root) is its own parent.
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Modification time as fractional seconds since the Unix epoch.
    ///
    /// Pre-epoch timestamps come back negative instead of failing.
    pub fn modified_secs(&self) -> f64 {
        match self.modified_at.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        }
    }
}

/// A path the walker reached but could not turn into a [`FileRecord`]
/// (permission denied, vanished mid-scan, unlistable directory, missing root).
///
/// The underlying I/O error is logged and reported on the progress channel,
/// not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkippedPath {
    pub path: PathBuf,
}

impl SkippedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for SkippedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn type_tag_is_derived_from_file_name() {
        let rec = FileRecord::new(PathBuf::from("/data/Report.PDF"), 10, UNIX_EPOCH);
        assert_eq!(rec.type_tag(), ".pdf");

        let bare = FileRecord::new(PathBuf::from("/data/Makefile"), 10, UNIX_EPOCH);
        assert_eq!(bare.type_tag(), "no extension");
    }

    #[test]
    fn parent_dir_is_the_immediate_parent() {
        let rec = FileRecord::new(PathBuf::from("/a/b/c.txt"), 1, UNIX_EPOCH);
        assert_eq!(rec.parent_dir(), Path::new("/a/b"));
    }

    #[test]
    fn modified_secs_keeps_fractional_part() {
        let t = UNIX_EPOCH + Duration::from_millis(1_500);
        let rec = FileRecord::new(PathBuf::from("/x.bin"), 0, t);
        assert!((rec.modified_secs() - 1.5).abs() < 1e-9);
    }

    /// Timestamps before 1970 must not panic or saturate to zero.
    #[test]
    fn modified_secs_before_epoch_is_negative() {
        let t = UNIX_EPOCH - Duration::from_secs(60);
        let rec = FileRecord::new(PathBuf::from("/old.bin"), 0, t);
        assert!((rec.modified_secs() + 60.0).abs() < 1e-9);
    }

    #[test]
    fn skipped_path_displays_as_path() {
        let s = SkippedPath::new("/root/secret");
        assert_eq!(s.to_string(), "/root/secret");
    }
}
