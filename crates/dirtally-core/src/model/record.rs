/// Scan output types.
///
/// A [`ScanResult`] is built incrementally by a single traversal and is
/// read-only afterwards. All sizes are logical byte counts.
use compact_str::CompactString;
use std::collections::BTreeMap;

/// One regular file seen during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base name only (NOT the full path).
    pub name: CompactString,
    /// File size in bytes.
    pub size: u64,
}

impl FileRecord {
    pub fn new(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Extension of this file, see [`extension_of`].
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.name)
    }
}

/// Count and byte total for one extension.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionStats {
    pub file_count: u64,
    pub total_bytes: u64,
}

/// Counters describing what the walk saw. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files whose size was read.
    pub files_scanned: u64,
    /// Directories successfully listed, the root included.
    pub dirs_scanned: u64,
    /// Directories, files and listing entries dropped because they could
    /// not be read or were past the depth limit.
    pub skipped_entries: u64,
}

/// Everything a scan produces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Sum of `files[..].size`.
    pub total_size: u64,
    /// Per-extension totals. Keyed case-sensitively, ordered by key.
    pub extensions: BTreeMap<CompactString, ExtensionStats>,
    /// Candidate list in discovery order.
    pub files: Vec<FileRecord>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// Account for one successfully-read file.
    ///
    /// Adds to the total, bumps the extension bucket (if the name has an
    /// extension) and appends to the candidate list.
    pub fn record_file(&mut self, name: impl Into<CompactString>, size: u64) {
        let record = FileRecord::new(name, size);

        self.total_size += size;
        if let Some(ext) = record.extension() {
            let entry = self
                .extensions
                .entry(CompactString::new(ext))
                .or_default();
            entry.file_count += 1;
            entry.total_bytes += size;
        }
        self.stats.files_scanned += 1;
        self.files.push(record);
    }

    /// `true` when no file was recorded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Extract the extension of a base name: the text after the last `'.'`,
/// without the dot.
///
/// Returns `None` when the name has no dot at all. A leading dot counts
/// (`.bashrc` has extension `bashrc`) and a trailing dot yields the empty
/// extension.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}
