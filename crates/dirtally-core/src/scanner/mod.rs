/// Scanner module — walks a directory tree and tallies it.
///
/// The scan is single-threaded and best-effort: unreadable directories and
/// files are skipped, never reported as errors. A root that cannot be listed
/// produces an empty [`ScanResult`].
pub mod walk;

use crate::fs::{FileSystem, OsFileSystem};
use crate::model::ScanResult;
use std::path::Path;

/// Default limit on how many directory levels below the root are opened.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Traversal knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into symbolic links that point at directories. When set, each
    /// directory is opened at most once (by canonical path), so link cycles
    /// terminate. Links to files are always sized through the link.
    pub follow_links: bool,
    /// Directories more than this many levels below the root are skipped.
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Scans directory trees through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct DirectoryAnalyzer<F = OsFileSystem> {
    fs: F,
    options: ScanOptions,
}

impl DirectoryAnalyzer<OsFileSystem> {
    /// Analyzer over the real filesystem with default options.
    pub fn new() -> Self {
        Self::with_fs(OsFileSystem)
    }
}

impl Default for DirectoryAnalyzer<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> DirectoryAnalyzer<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Walk `root` depth-first and return total size, per-extension totals
    /// and the candidate list.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult {
        walk::walk(&self.fs, root.as_ref(), &self.options)
    }
}

/// Scan `root` on the real filesystem with default options.
pub fn scan_directory(root: impl AsRef<Path>) -> ScanResult {
    DirectoryAnalyzer::new().scan(root)
}
