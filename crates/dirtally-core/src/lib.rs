/// DirTally Core — scanning, analysis, and data model.
///
/// This crate contains all of the logic and none of the process setup: it
/// never prints and never installs a logger. A frontend scans a path, picks
/// the largest files and renders the report.
///
/// # Modules
///
/// - [`fs`] — Filesystem capability (real disk and in-memory fake).
/// - [`scanner`] — Best-effort depth-first directory walk.
/// - [`model`] — Scan result types and size formatting.
/// - [`analysis`] — Post-scan selection (largest files).
/// - [`report`] — Plain-text report.
pub mod analysis;
pub mod error;
pub mod fs;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::ScanError;
pub use scanner::{scan_directory, DirectoryAnalyzer, ScanOptions};
