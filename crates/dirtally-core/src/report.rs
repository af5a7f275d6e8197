/// Plain-text report of a finished scan.
///
/// Purely presentational. Extension lines follow the map's key order and
/// largest-file lines follow the order of the list handed in.
use crate::model::{format_size, FileRecord, ScanResult};
use std::io::{self, Write};
use std::path::Path;

/// Write the report to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    root: &Path,
    result: &ScanResult,
    largest: &[FileRecord],
) -> io::Result<()> {
    writeln!(
        out,
        "Total size of directory \"{}\": {}",
        root.display(),
        format_size(result.total_size)
    )?;

    writeln!(out, "File Type Distribution:")?;
    for (ext, stats) in &result.extensions {
        writeln!(
            out,
            "  .{ext}: {} files, Total Size: {}",
            stats.file_count,
            format_size(stats.total_bytes)
        )?;
    }

    writeln!(out, "Largest Files:")?;
    for file in largest {
        writeln!(out, "  {} ({})", file.name, format_size(file.size))?;
    }
    Ok(())
}

/// Render the report into a `String`.
pub fn render_report(root: &Path, result: &ScanResult, largest: &[FileRecord]) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, root, result, largest).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
