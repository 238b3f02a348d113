use crate::shared::error::HealthError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a corpus or config file (256 MB).
///
/// Advisory exports for a whole ecosystem stay well below this; anything
/// larger is rejected before it is read into memory.
pub const MAX_INPUT_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Reads a local input file after checking that it is a regular file
/// within the size limit.
///
/// # Security
/// Uses `symlink_metadata()` so a symbolic link is rejected rather than followed.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human-readable name used in error messages (e.g. "corpus")
///
/// # Errors
/// Returns `HealthError::SecurityError` for symlinks and oversized files,
/// `HealthError::FileReadError` for anything else that prevents reading.
pub fn read_input_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| HealthError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(HealthError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} file is a symbolic link", description),
            hint: "Point to the regular file the link resolves to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(HealthError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        HealthError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(HealthError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the advisory export into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("corpus.json");
        fs::write(&file_path, "[]").unwrap();

        let content = read_input_file(&file_path, "corpus").unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_read_input_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/corpus.json");
        let result = read_input_file(&path, "corpus");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read corpus metadata"));
    }

    #[test]
    fn test_read_input_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_input_file(temp_dir.path(), "corpus");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_input_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_input_file(&link, "corpus");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/corpus.json");
        assert!(validate_file_size(1000, &path, MAX_INPUT_FILE_SIZE).is_ok());
        let result = validate_file_size(MAX_INPUT_FILE_SIZE + 1, &path, MAX_INPUT_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
