/// End-to-end scanner integration tests.
///
/// These tests run the real `OsFileSystem` walk against a temporary
/// directory tree, then push the result through top-N selection and the
/// text report, the same path the binary takes.
use dirtally_core::analysis::top_files;
use dirtally_core::model::{ExtensionStats, FileRecord};
use dirtally_core::report::render_report;
use dirtally_core::{scan_directory, DirectoryAnalyzer, ScanOptions};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create the reference tree:
///
/// ```text
/// root/
///   a.txt   (100 bytes)
///   b.txt   (200 bytes)
///   c.log   (50 bytes)
///   d/
///     e.txt (300 bytes)
/// ```
///
/// Total file bytes: 650.
fn build_test_tree(root: &Path) {
    write_bytes(&root.join("a.txt"), 100);
    write_bytes(&root.join("b.txt"), 200);
    write_bytes(&root.join("c.log"), 50);
    let d = root.join("d");
    fs::create_dir_all(&d).unwrap();
    write_bytes(&d.join("e.txt"), 300);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn scan_reference_tree() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let result = scan_directory(tmp.path());

    assert_eq!(result.total_size, 650);
    assert_eq!(
        result.extensions["txt"],
        ExtensionStats {
            file_count: 3,
            total_bytes: 600
        }
    );
    assert_eq!(
        result.extensions["log"],
        ExtensionStats {
            file_count: 1,
            total_bytes: 50
        }
    );
    assert_eq!(result.files.len(), 4);

    let top = top_files(&result.files, 2);
    assert_eq!(
        top,
        vec![FileRecord::new("e.txt", 300), FileRecord::new("b.txt", 200)]
    );
}

#[test]
fn scan_missing_root_is_empty() {
    let tmp = TempDir::new().expect("failed to create temp dir");

    let result = scan_directory(tmp.path().join("does-not-exist"));

    assert_eq!(result.total_size, 0);
    assert!(result.extensions.is_empty());
    assert!(result.files.is_empty());
}

/// Pointing the scanner at a file rather than a directory yields nothing.
#[test]
fn scan_file_as_root_is_empty() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = tmp.path().join("lonely.bin");
    write_bytes(&file, 10);

    let result = scan_directory(&file);
    assert!(result.is_empty());
    assert_eq!(result.total_size, 0);
}

#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");

    let result = scan_directory(tmp.path());
    assert_eq!(result.total_size, 0);
    assert!(result.files.is_empty());
    assert_eq!(result.stats.dirs_scanned, 1);
}

/// Record names are base names, never paths.
#[test]
fn scan_records_base_names() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let deep = tmp.path().join("x").join("y");
    fs::create_dir_all(&deep).unwrap();
    write_bytes(&deep.join("deep.dat"), 64);

    let result = scan_directory(tmp.path());
    assert_eq!(result.files, vec![FileRecord::new("deep.dat", 64)]);
}

#[test]
fn report_for_reference_tree() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let result = scan_directory(tmp.path());
    let top = top_files(&result.files, 5);
    let text = render_report(tmp.path(), &result, &top);

    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        format!("Total size of directory \"{}\": 650 B", tmp.path().display())
    );
    assert_eq!(lines.next().unwrap(), "File Type Distribution:");
    assert_eq!(lines.next().unwrap(), "  .log: 1 files, Total Size: 50 B");
    assert_eq!(lines.next().unwrap(), "  .txt: 3 files, Total Size: 600 B");
    assert_eq!(lines.next().unwrap(), "Largest Files:");
    assert_eq!(lines.next().unwrap(), "  e.txt (300 B)");
    assert_eq!(lines.next().unwrap(), "  b.txt (200 B)");
    assert_eq!(lines.next().unwrap(), "  a.txt (100 B)");
    assert_eq!(lines.next().unwrap(), "  c.log (50 B)");
    assert!(lines.next().is_none());
}

#[cfg(unix)]
#[test]
fn scan_symlink_cycle_terminates_when_following() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("d").join("loop")).unwrap();

    let default_result = scan_directory(tmp.path());
    assert_eq!(default_result.total_size, 650);

    let options = ScanOptions {
        follow_links: true,
        ..ScanOptions::default()
    };
    let followed = DirectoryAnalyzer::new().with_options(options).scan(tmp.path());
    assert_eq!(followed.total_size, 650);
    assert_eq!(followed.files.len(), 4);
}

#[cfg(unix)]
#[test]
fn scan_counts_file_symlinks_through_target() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("real.bin"), 40);
    std::os::unix::fs::symlink(tmp.path().join("real.bin"), tmp.path().join("alias.bin"))
        .unwrap();
    std::os::unix::fs::symlink(tmp.path().join("gone.bin"), tmp.path().join("dead.bin"))
        .unwrap();

    let result = scan_directory(tmp.path());
    assert_eq!(result.total_size, 80);
    assert_eq!(result.extensions["bin"].file_count, 2);
    assert_eq!(result.stats.skipped_entries, 1);
}

/// Entries whose names are not valid UTF-8 are still read and counted.
#[cfg(target_os = "linux")]
#[test]
fn scan_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join(OsStr::from_bytes(b"caf\xe9.txt")), 100);
    let dir = tmp.path().join(OsStr::from_bytes(b"dir\xff"));
    fs::create_dir_all(&dir).unwrap();
    write_bytes(&dir.join("inner.txt"), 300);

    let result = scan_directory(tmp.path());
    assert_eq!(result.total_size, 400);
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.stats.skipped_entries, 0);
    assert_eq!(
        result.extensions["txt"],
        ExtensionStats {
            file_count: 2,
            total_bytes: 400
        }
    );
    assert!(result
        .files
        .iter()
        .any(|f| f.name == "caf\u{FFFD}.txt" && f.size == 100));
}
