/// Depth-first walk over a [`FileSystem`] using an explicit worklist.
///
/// The worklist is a stack of open directory listings. The top frame is
/// drained one entry at a time; a subdirectory is opened and pushed as soon
/// as it is met, so it is walked to completion before its next sibling. This
/// reproduces the discovery order of a recursive pre-order walk without
/// growing the native call stack.
///
/// Every failure is local: an unreadable directory drops its subtree, an
/// unreadable file drops that file. Nothing is reported to the caller other
/// than through `ScanStats::skipped_entries` and the debug log.
use super::ScanOptions;
use crate::error::ScanError;
use crate::fs::{DirEntryInfo, EntryKind, FileSystem};
use crate::model::ScanResult;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// An open directory whose entries are still being consumed.
struct Frame {
    path: PathBuf,
    /// Distance from the scan root (root = 0).
    depth: usize,
    entries: std::vec::IntoIter<Result<DirEntryInfo, ScanError>>,
}

struct Walker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    options: &'a ScanOptions,
    result: ScanResult,
    /// Canonical paths of directories already opened. Only maintained when
    /// following links, since without links a tree cannot revisit itself.
    visited: HashSet<PathBuf>,
}

impl<'a, F: FileSystem + ?Sized> Walker<'a, F> {
    fn new(fs: &'a F, options: &'a ScanOptions) -> Self {
        Self {
            fs,
            options,
            result: ScanResult::default(),
            visited: HashSet::new(),
        }
    }

    fn skip(&mut self, err: &ScanError) {
        debug!("Skipping {}: {err}", err.path().display());
        self.result.stats.skipped_entries += 1;
    }

    /// List `path` and wrap it in a frame, or return `None` if the
    /// directory cannot be listed or was already visited.
    fn open_dir(&mut self, path: PathBuf, depth: usize) -> Option<Frame> {
        if self.options.follow_links {
            match self.fs.canonicalize(&path) {
                Ok(real) => {
                    if !self.visited.insert(real) {
                        debug!("Already visited {}, not descending", path.display());
                        return None;
                    }
                }
                Err(err) => {
                    self.skip(&err);
                    return None;
                }
            }
        }

        match self.fs.read_dir(&path) {
            Ok(listing) => {
                self.result.stats.dirs_scanned += 1;
                Some(Frame {
                    path,
                    depth,
                    entries: listing.into_iter(),
                })
            }
            Err(err) => {
                self.skip(&err);
                None
            }
        }
    }

    fn run(mut self, root: &Path) -> ScanResult {
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.open_dir(root.to_path_buf(), 0) {
            stack.push(frame);
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(next) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let depth = frame.depth;

            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    self.skip(&err);
                    continue;
                }
            };
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            let path = frame.path.join(&entry.file_name);

            match entry.kind {
                EntryKind::Directory => {
                    if entry.is_symlink && !self.options.follow_links {
                        debug!("Not following directory link {}", path.display());
                        continue;
                    }
                    if depth >= self.options.max_depth {
                        warn!(
                            "Depth limit {} reached, not descending into {}",
                            self.options.max_depth,
                            path.display()
                        );
                        self.result.stats.skipped_entries += 1;
                        continue;
                    }
                    if let Some(child) = self.open_dir(path, depth + 1) {
                        stack.push(child);
                    }
                }
                EntryKind::File => match self.fs.file_size(&path) {
                    Ok(size) => self.result.record_file(entry.name, size),
                    Err(err) => self.skip(&err),
                },
                EntryKind::Other => {
                    debug!("Ignoring non-regular entry {}", path.display());
                }
            }
        }

        self.result
    }
}

/// Walk `root` and return everything observed. Never fails.
pub fn walk<F: FileSystem + ?Sized>(fs: &F, root: &Path, options: &ScanOptions) -> ScanResult {
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let result = Walker::new(fs, options).run(root);

    info!(
        "Scan complete: {} files, {} dirs, {} skipped, {} bytes in {:?}",
        result.stats.files_scanned,
        result.stats.dirs_scanned,
        result.stats.skipped_entries,
        result.total_size,
        start.elapsed()
    );
    result
}
