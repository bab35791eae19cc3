//! Validated input paths

use crate::error::{LangsiftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A path checked at construction to be a regular file or a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPath {
    /// A single regular file
    File(PathBuf),
    /// A directory whose regular files are processed
    Directory(PathBuf),
}

impl InputPath {
    /// Validate `path`, following symlinks
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(LangsiftError::InvalidInput(
                "no input path given".to_string(),
            ));
        }

        let metadata = fs::metadata(&path).map_err(|_| {
            LangsiftError::InvalidInput(format!(
                "{} should be either a directory or a file",
                path.display()
            ))
        })?;

        if metadata.is_dir() {
            Ok(InputPath::Directory(path))
        } else if metadata.is_file() {
            Ok(InputPath::File(path))
        } else {
            Err(LangsiftError::InvalidInput(format!(
                "{} should be either a directory or a file",
                path.display()
            )))
        }
    }

    /// The underlying path
    pub fn path(&self) -> &Path {
        match self {
            InputPath::File(path) | InputPath::Directory(path) => path,
        }
    }

    /// Whether the input is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, InputPath::Directory(_))
    }
}
