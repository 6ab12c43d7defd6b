use crate::shared::error::ExplorerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for a report payload (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` exists, is not a symbolic link and is a regular file
/// no larger than [`MAX_FILE_SIZE`].
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
pub fn validate_report_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ExplorerError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ExplorerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed; point the explorer at the real file".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ExplorerError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Rejects payloads above `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ExplorerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the report per module or trim the dependency tree".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a report file after [`validate_report_file`] succeeded.
pub fn read_report_file(path: &Path, file_description: &str) -> Result<String> {
    validate_report_file(path, file_description)?;
    fs::read_to_string(path).map_err(|e| {
        ExplorerError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_report_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("measure.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(validate_report_file(&file_path, "measure.json").is_ok());
    }

    #[test]
    fn test_validate_report_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/measure.json");
        let result = validate_report_file(&path, "measure.json");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read measure.json metadata"));
    }

    #[test]
    fn test_validate_report_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_report_file(temp_dir.path(), "measure.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_report_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "[]").unwrap();
        let link = temp_dir.path().join("measure.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_report_file(&link, "measure.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/reports/measure.json");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_report_file_returns_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("issues.json");
        fs::write(&file_path, "{\"issues\": []}").unwrap();

        let content = read_report_file(&file_path, "issues.json").unwrap();
        assert_eq!(content, "{\"issues\": []}");
    }
}
