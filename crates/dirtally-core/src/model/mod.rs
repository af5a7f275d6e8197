/// Data model for a directory tally.
///
/// Re-exports the scan result types and the size formatter.
pub mod record;
pub mod size;

pub use record::{extension_of, ExtensionStats, FileRecord, ScanResult, ScanStats};
pub use size::format_size;
