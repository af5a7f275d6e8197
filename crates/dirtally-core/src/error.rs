/// Errors raised by the filesystem capability.
///
/// The scanner never hands these to its caller: every variant degrades to
/// "the entry did not exist" inside the walk. They exist so that
/// [`FileSystem`](crate::fs::FileSystem) implementations can say *why* an
/// entry was skipped, which ends up in the debug log.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot list directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read size of {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot inspect entry {path}: {source}")]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no such entry: {0}")]
    NotFound(PathBuf),
}

impl ScanError {
    /// Path of the entry that could not be read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryUnreadable { path, .. }
            | Self::FileUnreadable { path, .. }
            | Self::EntryUnreadable { path, .. }
            | Self::NotFound(path) => path,
        }
    }
}
