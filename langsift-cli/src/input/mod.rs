//! Input handling module

use anyhow::{Context, Result};
use langsift_core::InputPath;
use std::path::Path;

/// Validate the `--input` argument before any processing starts
pub fn resolve_input(path: &Path) -> Result<InputPath> {
    let input = InputPath::new(path)
        .with_context(|| format!("Cannot use input path: {}", path.display()))?;

    log::debug!(
        "Input {} is a {}",
        path.display(),
        if input.is_dir() { "directory" } else { "file" }
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "Hello, world!").unwrap();

        let input = resolve_input(&file_path).unwrap();
        assert!(!input.is_dir());
    }

    #[test]
    fn test_resolve_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(resolve_input(temp_dir.path()).unwrap().is_dir());
    }

    #[test]
    fn test_resolve_nonexistent_path() {
        let err = resolve_input(Path::new("/nonexistent/file.txt")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Cannot use input path"));
        assert!(msg.contains("either a directory or a file"));
    }
}
