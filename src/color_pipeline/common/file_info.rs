//! File metadata shown alongside a loaded image.

use std::path::Path;

use crate::color_pipeline::common::error::Result;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Immutable per-load metadata: name, human-readable size and dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub filename: String,
    pub file_size: String,
    pub width: usize,
    pub height: usize,
}

impl FileInfo {
    /// Reads the byte size of `path` from the filesystem and pairs it with
    /// the decoded image dimensions.
    pub fn for_path(path: &Path, width: usize, height: usize) -> Result<Self> {
        let bytes = std::fs::metadata(path)?.len();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            filename,
            file_size: format_file_size(bytes),
            width,
            height,
        })
    }
}

/// Formats a byte count as "512 B", "2.0 KB" or "5.0 MB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn bytes_below_one_kib() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(500), "500 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn kib_with_one_decimal() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2048), "2.0 KB");
    }

    #[test]
    fn mib_with_one_decimal() {
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
