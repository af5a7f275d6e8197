/// In-memory filesystem with injectable failures.
///
/// Paths are plain keys; parents are created on demand. Listing order is
/// insertion order, which keeps scans over a `MemoryFileSystem` fully
/// deterministic.
use super::{DirEntryInfo, EntryKind, FileSystem, Listing};
use crate::error::ScanError;
use compact_str::CompactString;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Upper bound on link hops while resolving a single path component.
const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum MemNode {
    Dir {
        children: Vec<CompactString>,
        unreadable: bool,
    },
    File {
        size: u64,
        unreadable: bool,
    },
    Link {
        target: PathBuf,
    },
    /// Listed, but of no interesting kind (FIFO, socket, ...).
    Special,
    /// Listed, but inspecting it fails.
    Broken,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    nodes: HashMap<PathBuf, MemNode>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file, creating parent directories as needed.
    pub fn add_file(&mut self, path: impl AsRef<Path>, size: u64) -> &mut Self {
        self.insert(
            path.as_ref(),
            MemNode::File {
                size,
                unreadable: false,
            },
        );
        self
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.ensure_dir(path.as_ref());
        self
    }

    /// Add a symbolic link at `path` pointing to `target`.
    pub fn add_symlink(&mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> &mut Self {
        self.insert(
            path.as_ref(),
            MemNode::Link {
                target: target.as_ref().to_path_buf(),
            },
        );
        self
    }

    /// Add an entry that is neither a file nor a directory.
    pub fn add_special(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), MemNode::Special);
        self
    }

    /// Add an entry that shows up in its parent's listing as an error.
    pub fn add_broken_entry(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), MemNode::Broken);
        self
    }

    /// Make listing the directory at `path` fail. Creates it if missing.
    pub fn fail_listing(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.ensure_dir(path);
        if let Some(MemNode::Dir { unreadable, .. }) = self.nodes.get_mut(path) {
            *unreadable = true;
        }
        self
    }

    /// Make reading the size of the file at `path` fail.
    pub fn fail_size(&mut self, path: impl AsRef<Path>) -> &mut Self {
        if let Some(MemNode::File { unreadable, .. }) = self.nodes.get_mut(path.as_ref()) {
            *unreadable = true;
        }
        self
    }

    fn ensure_dir(&mut self, path: &Path) {
        if !self.nodes.contains_key(path) {
            self.insert(
                path,
                MemNode::Dir {
                    children: Vec::new(),
                    unreadable: false,
                },
            );
        }
    }

    fn insert(&mut self, path: &Path, node: MemNode) {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let (Some(parent), Some(name)) = (parent, path.file_name()) {
            self.ensure_dir(parent);
            if let Some(MemNode::Dir { children, .. }) = self.nodes.get_mut(parent) {
                let name = CompactString::new(name.to_string_lossy());
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    /// Follow links component by component.
    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            let mut hops = 0;
            while let Some(MemNode::Link { target }) = self.nodes.get(&current) {
                hops += 1;
                if hops > MAX_LINK_HOPS {
                    return None;
                }
                current = target.clone();
            }
        }
        Some(current)
    }

    fn lookup(&self, path: &Path) -> Result<(PathBuf, &MemNode), ScanError> {
        self.resolve(path)
            .and_then(|real| self.nodes.get(&real).map(|node| (real, node)))
            .ok_or_else(|| ScanError::NotFound(path.to_path_buf()))
    }

    fn describe(&self, name: &CompactString, path: &Path) -> Result<DirEntryInfo, ScanError> {
        match self.nodes.get(path) {
            Some(MemNode::Dir { .. }) => Ok(DirEntryInfo::new(name.clone(), EntryKind::Directory)),
            Some(MemNode::File { .. }) => Ok(DirEntryInfo::new(name.clone(), EntryKind::File)),
            Some(MemNode::Special) => Ok(DirEntryInfo::new(name.clone(), EntryKind::Other)),
            Some(MemNode::Link { .. }) => {
                let kind = match self.lookup(path) {
                    Ok((_, MemNode::Dir { .. })) => EntryKind::Directory,
                    Ok((_, MemNode::Special)) => EntryKind::Other,
                    // Dangling links look like files that cannot be opened.
                    _ => EntryKind::File,
                };
                Ok(DirEntryInfo::symlink(name.clone(), kind))
            }
            Some(MemNode::Broken) | None => Err(ScanError::EntryUnreadable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "entry cannot be inspected"),
            }),
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Listing, ScanError> {
        let unreadable = |source| ScanError::DirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        };
        match self.lookup(path) {
            Ok((real, MemNode::Dir { children, unreadable: false })) => Ok(children
                .iter()
                .map(|name| self.describe(name, &real.join(name.as_str())))
                .collect()),
            Ok((_, MemNode::Dir { .. })) => Err(unreadable(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "directory cannot be listed",
            ))),
            Ok(_) => Err(unreadable(io::Error::new(
                io::ErrorKind::Other,
                "not a directory",
            ))),
            Err(err) => Err(err),
        }
    }

    fn file_size(&self, path: &Path) -> Result<u64, ScanError> {
        let unreadable = |source| ScanError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };
        match self.lookup(path) {
            Ok((_, MemNode::File { size, unreadable: false })) => Ok(*size),
            Ok((_, MemNode::File { .. })) => Err(unreadable(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "file cannot be opened",
            ))),
            Ok(_) => Err(unreadable(io::Error::new(
                io::ErrorKind::Other,
                "not a regular file",
            ))),
            Err(_) => Err(unreadable(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file",
            ))),
        }
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, ScanError> {
        self.lookup(path).map(|(real, _)| real)
    }
}
