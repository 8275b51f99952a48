use std::fs;
use std::io;
use std::path::Path;

/// Read entire file into a Vec<u8>
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write bytes to a file (overwrite)
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}

/// Format bytes into human-readable string (e.g. 1024 -> "1.00 KB")
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// Compressed size as a percentage of the original, e.g. "61.3% of original".
pub fn format_ratio(compressed: usize, original: usize) -> String {
    if original == 0 {
        return "empty input".to_string();
    }
    format!(
        "{:.1}% of original",
        compressed as f64 / original as f64 * 100.0
    )
}
