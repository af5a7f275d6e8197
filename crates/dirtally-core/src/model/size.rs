/// Size formatting — human-readable byte counts.
///
/// All sizes are `u64` bytes. Formatting uses integer division only, so the
/// output is reproducible across platforms and never rounds up.

/// Unit labels, smallest first. Binary multiples (1024) with the short
/// labels users expect from a disk tool.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count into a human-readable string.
///
/// Divides by 1024 while the value is at least 1024 and a larger unit is
/// left, truncating each time: `1535` is `"1 KB"`, not `"1.5 KB"`. Anything
/// past terabytes stays in TB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024 && unit < UNITS.len() - 1 {
        value /= 1024;
        unit += 1;
    }
    format!("{value} {}", UNITS[unit])
}
