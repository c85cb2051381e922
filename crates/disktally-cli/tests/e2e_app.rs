/// End-to-end tests of the CLI flow.
///
/// Each test parses a real argument vector, runs the full scan → report →
/// output path against a temporary directory, and inspects what was written.
use clap::Parser;
use disktally_cli::{run, Args, RunStatus, JSON_MARKER};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![b'x'; n]).unwrap();
}

fn temp_root() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = fs::canonicalize(tmp.path()).unwrap();
    (tmp, root)
}

/// Six files, 725 bytes in total, across `root` and `root/subdir`.
fn build_test_tree(root: &Path) {
    write_bytes(&root.join("file1.txt"), 100);
    write_bytes(&root.join("file2.log"), 200);
    write_bytes(&root.join("noext"), 75);
    let sub = root.join("subdir");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("file3.txt"), 50);
    write_bytes(&sub.join("file4.jpg"), 300);
    write_bytes(&sub.join("empty.txt"), 0);
}

fn args(root: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["disktally".to_string(), root.display().to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::try_parse_from(argv).unwrap()
}

fn run_to_string(args: &Args) -> (RunStatus, String) {
    let mut out = Vec::new();
    let status = run(args, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

/// Lines of the `Largest files` table, without title, header and rules.
fn largest_file_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip_while(|l| *l != "Largest files")
        .skip(4)
        .take_while(|l| !l.is_empty())
        .collect()
}

// ── Text report ──────────────────────────────────────────────────────────────

#[test]
fn text_report_covers_summary_and_tables() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (status, output) = run_to_string(&args(&root, &[]));

    assert_eq!(status, RunStatus::Reported);
    assert!(output.starts_with("Summary\n"));
    assert!(output.contains("Total size scanned: 725 B"));
    assert!(output.contains("Number of files: 6"));
    assert!(output.contains("Number of directories: 2"));
    assert!(output.contains("Top directories by size"));
    assert!(output.contains("Top file types by size"));
    assert!(output.contains("no extension"));
    assert!(!output.contains("Largest files"));
    assert!(!output.contains(JSON_MARKER));
}

#[test]
fn top_rows_are_limited() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (_, output) = run_to_string(&args(&root, &["--top-types", "1"]));

    let type_rows: Vec<&str> = output
        .lines()
        .skip_while(|l| *l != "Top file types by size")
        .skip(4)
        .take_while(|l| !l.is_empty())
        .collect();
    assert_eq!(type_rows.len(), 1);
    assert!(type_rows[0].starts_with(".jpg"));
}

#[test]
fn largest_files_respect_size_filter() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (_, output) = run_to_string(&args(
        &root,
        &["--show-large-files", "10", "--min-size", "100"],
    ));

    let rows = largest_file_rows(&output);
    assert_eq!(rows.len(), 3, "rows: {rows:?}");
    assert!(rows[0].contains("file4.jpg"));
    assert!(rows[1].contains("file2.log"));
    assert!(rows[2].contains("file1.txt"));
    // Totals are unaffected by the filter.
    assert!(output.contains("Total size scanned: 725 B"));
}

#[test]
fn age_filter_hides_fresh_files() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (_, output) = run_to_string(&args(
        &root,
        &["--show-large-files", "10", "--older-than", "1"],
    ));

    assert!(!output.contains("Largest files"));
}

// ── JSON ─────────────────────────────────────────────────────────────────────

#[test]
fn json_follows_text_report() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (_, output) = run_to_string(&args(&root, &["--json", "--show-large-files", "2"]));

    let (text, json) = output.split_once(JSON_MARKER).expect("JSON marker missing");
    assert!(text.starts_with("Summary"));

    let doc: serde_json::Value = serde_json::from_str(json.trim()).unwrap();
    assert_eq!(doc["summary"]["total_size"], 725);
    assert_eq!(doc["summary"]["file_count"], 6);
    assert_eq!(doc["summary"]["dir_count"], 2);
    assert_eq!(doc["top_file_types"][0]["extension"], ".jpg");
    assert_eq!(doc["top_directories"][0]["size"], 375);

    let files = doc["largest_files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["size"], 300);
    assert!(files[0]["path"].as_str().unwrap().ends_with("file4.jpg"));
}

// ── CSV export ───────────────────────────────────────────────────────────────

#[test]
fn csv_export_writes_ranked_files() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);
    let out_dir = TempDir::new().unwrap();
    let csv_path = out_dir.path().join("files.csv");

    run_to_string(&args(
        &root,
        &["--show-large-files", "2", "--export-csv", csv_path.to_str().unwrap()],
    ));

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "path,size,modified_at,type_tag");
    assert!(lines[1].contains("file4.jpg,300,"));
    assert!(lines[1].ends_with(",.jpg"));
    assert!(lines[2].contains("file2.log,200,"));
}

#[test]
fn csv_export_without_limit_covers_filtered_files() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);
    let out_dir = TempDir::new().unwrap();
    let csv_path = out_dir.path().join("files.csv");

    let (_, output) = run_to_string(&args(
        &root,
        &["--min-size", "75", "--export-csv", csv_path.to_str().unwrap()],
    ));

    assert!(!output.contains("Largest files"));
    let csv = fs::read_to_string(&csv_path).unwrap();
    let sizes: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(sizes, vec!["300", "200", "100", "75"]);
}

// ── Edge cases and errors ────────────────────────────────────────────────────

#[test]
fn empty_directory_reports_no_files() {
    let (_tmp, root) = temp_root();

    let (status, output) = run_to_string(&args(&root, &[]));

    assert_eq!(status, RunStatus::NoFiles);
    assert!(output.is_empty());
}

#[test]
fn missing_path_is_an_error() {
    let (_tmp, root) = temp_root();
    let missing = root.join("does-not-exist");

    let err = run(&args(&missing, &[]), &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("path does not exist"));
}

#[test]
fn invalid_size_is_an_error() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let err = run(&args(&root, &["--min-size", "invalid"]), &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid size format"));
}

#[test]
fn generous_timeout_lets_scan_finish() {
    let (_tmp, root) = temp_root();
    build_test_tree(&root);

    let (status, output) = run_to_string(&args(&root, &["--timeout", "60"]));

    assert_eq!(status, RunStatus::Reported);
    assert!(output.contains("Number of files: 6"));
}

#[test]
fn single_file_root_is_reported() {
    let (_tmp, root) = temp_root();
    let file = root.join("only.dat");
    write_bytes(&file, 2_048);

    let (_, output) = run_to_string(&args(&file, &["--show-large-files", "1"]));

    assert!(output.contains("Total size scanned: 2.00 KiB"));
    assert!(output.contains("Number of directories: 1"));
    assert_eq!(largest_file_rows(&output).len(), 1);
}
