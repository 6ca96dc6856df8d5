use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops;

/// File name used when exporting the output
pub const EXPORT_FILE_NAME: &str = "text-cleaner-output.txt";

/// Content type of the exported file
pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Text that would be copied or exported: the trimmed output.
///
/// Returns `NothingToExport` when the output is empty or whitespace-only.
pub fn exportable_text(output: &str) -> Result<&str> {
    let text = text_ops::trim(output);
    if text.is_empty() {
        return Err(AppError::NothingToExport);
    }
    Ok(text)
}

/// Write the trimmed output to `dir/text-cleaner-output.txt`.
///
/// Returns the path written. An existing export in `dir` is overwritten.
pub fn export_to_dir(output: &str, dir: &Path) -> Result<PathBuf> {
    let text = exportable_text(output)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, text)?;

    info!("Exported {} bytes to {}", text.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exportable_text_trims() {
        assert_eq!(exportable_text("  done \n").unwrap(), "done");
    }

    #[test]
    fn test_exportable_text_empty() {
        assert!(matches!(exportable_text(""), Err(AppError::NothingToExport)));
        assert!(matches!(exportable_text(" \n\t "), Err(AppError::NothingToExport)));
        assert!(matches!(exportable_text("\u{feff}\u{3000}"), Err(AppError::NothingToExport)));
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_to_dir("\ncafé au lait\n", dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(fs::read_to_string(&path).unwrap(), "café au lait");
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_to_dir("   ", dir.path()).unwrap_err();

        assert!(matches!(err, AppError::NothingToExport));
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("nested");
        let path = export_to_dir("x", &target).unwrap();
        assert!(path.starts_with(&target));
    }
}
