/// Extension classification — maps a file name to the type tag used for
/// grouping.
///
/// Only the final component's last suffix counts, so `archive.tar.gz` is a
/// `.gz`. Dotfiles without a further suffix (`.bashrc`) have no extension.
use compact_str::{format_compact, CompactString};

/// Type tag for names without a usable suffix.
pub const NO_EXTENSION: &str = "no extension";

/// Classify a file name into a normalised, lowercase type tag.
///
/// Pure and total: every input, including the empty string, maps to a tag.
pub fn classify(file_name: &str) -> CompactString {
    if file_name.is_empty() || file_name == "." {
        return CompactString::new(NO_EXTENSION);
    }

    // Hidden file with nothing after the leading dot.
    if file_name.starts_with('.') && !file_name[1..].contains('.') {
        return CompactString::new(NO_EXTENSION);
    }

    match file_name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => format_compact!(".{}", suffix.to_lowercase()),
        _ => CompactString::new(NO_EXTENSION),
    }
}
