/// Filesystem capability consumed by the scanner.
///
/// The scanner only ever asks three questions: what is in this directory,
/// how big is this file, and what is the real identity of this directory.
/// Hiding them behind [`FileSystem`] lets the walk run against the real disk
/// ([`OsFileSystem`]) or against an in-memory tree ([`MemoryFileSystem`])
/// with injected failures.
pub mod memory;
pub mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use crate::error::ScanError;
use compact_str::CompactString;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// What a listed entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, FIFOs, devices. Not counted.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Base name of the entry, lossily converted for display and
    /// extension keys.
    pub name: CompactString,
    /// Base name exactly as the backend reported it. Child paths are built
    /// from this, never from `name`.
    pub file_name: OsString,
    /// Kind of the entry, with symbolic links already resolved to their
    /// target's kind.
    pub kind: EntryKind,
    /// `true` if the entry itself is a symbolic link.
    pub is_symlink: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<CompactString>, kind: EntryKind) -> Self {
        Self::from_parts(name.into(), kind, false)
    }

    pub fn symlink(name: impl Into<CompactString>, kind: EntryKind) -> Self {
        Self::from_parts(name.into(), kind, true)
    }

    /// Entry for a raw OS name that may not be valid UTF-8.
    pub fn from_os_name(file_name: OsString, kind: EntryKind, is_symlink: bool) -> Self {
        Self {
            name: CompactString::new(file_name.to_string_lossy()),
            file_name,
            kind,
            is_symlink,
        }
    }

    fn from_parts(name: CompactString, kind: EntryKind, is_symlink: bool) -> Self {
        Self {
            file_name: OsString::from(name.as_str()),
            name,
            kind,
            is_symlink,
        }
    }
}

/// A directory listing. Individual entries may fail without failing the
/// whole listing.
pub type Listing = Vec<Result<DirEntryInfo, ScanError>>;

pub trait FileSystem {
    /// List the entries of `path` in whatever order the backend yields them.
    fn read_dir(&self, path: &Path) -> Result<Listing, ScanError>;

    /// Open the file at `path` and return its length in bytes.
    fn file_size(&self, path: &Path) -> Result<u64, ScanError>;

    /// Resolve `path` to a canonical form, following every link. Two paths
    /// that canonicalize equal name the same directory.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, ScanError>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_dir(&self, path: &Path) -> Result<Listing, ScanError> {
        (**self).read_dir(path)
    }

    fn file_size(&self, path: &Path) -> Result<u64, ScanError> {
        (**self).file_size(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, ScanError> {
        (**self).canonicalize(path)
    }
}
