//! DirTally — directory size tally.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core` crate.
//! The report goes to stdout; log lines go to stderr so the two never mix.

use dirtally_core::analysis::{top_files, DEFAULT_TOP_N};
use dirtally_core::report::write_report;
use dirtally_core::DirectoryAnalyzer;
use std::io::Write;
use std::path::Path;

/// Directory to tally.
#[cfg(windows)]
const SCAN_ROOT: &str = "C:/MinGW/bin";
#[cfg(not(windows))]
const SCAN_ROOT: &str = "/usr/bin";

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DirTally starting");

    let root = Path::new(SCAN_ROOT);
    let result = DirectoryAnalyzer::new().scan(root);
    let largest = top_files(&result.files, DEFAULT_TOP_N);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, root, &result, &largest)?;
    out.flush()?;

    Ok(())
}
