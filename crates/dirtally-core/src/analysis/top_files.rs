/// Top-N largest files analysis.
///
/// Picks the largest individual files from a scan's candidate list for the
/// "Largest Files" section of the report.
use crate::model::FileRecord;

/// How many files the report lists unless told otherwise.
pub const DEFAULT_TOP_N: usize = 5;

/// Get the top `n` largest files, largest first.
///
/// The sort is stable, so files of equal size keep their discovery order.
/// Fewer than `n` candidates returns all of them. The input is left
/// untouched.
pub fn top_files(files: &[FileRecord], n: usize) -> Vec<FileRecord> {
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted.truncate(n);
    sorted
}
