/// The real filesystem, through `std::fs`.
use super::{DirEntryInfo, EntryKind, FileSystem, Listing};
use crate::error::ScanError;
use std::fs::{self, File, FileType};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Listing, ScanError> {
        let dir = fs::read_dir(path).map_err(|source| ScanError::DirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let listing = dir
            .map(|entry_result| -> Result<DirEntryInfo, ScanError> {
                let entry = entry_result.map_err(|source| ScanError::EntryUnreadable {
                    path: path.to_path_buf(),
                    source,
                })?;
                let entry_path = entry.path();
                let file_name = entry.file_name();

                // `DirEntry::file_type` does not follow links.
                let file_type = entry.file_type().map_err(|source| ScanError::EntryUnreadable {
                    path: entry_path.clone(),
                    source,
                })?;

                if file_type.is_symlink() {
                    // A dangling link is reported as a file; opening it will
                    // fail and the scanner drops it.
                    let kind = fs::metadata(&entry_path)
                        .map(|meta| kind_of(meta.file_type()))
                        .unwrap_or(EntryKind::File);
                    Ok(DirEntryInfo::from_os_name(file_name, kind, true))
                } else {
                    Ok(DirEntryInfo::from_os_name(file_name, kind_of(file_type), false))
                }
            })
            .collect();

        Ok(listing)
    }

    fn file_size(&self, path: &Path) -> Result<u64, ScanError> {
        let unreadable = |source| ScanError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unreadable)?;
        let meta = file.metadata().map_err(unreadable)?;
        Ok(meta.len())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, ScanError> {
        fs::canonicalize(path).map_err(|source| ScanError::DirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }
}
