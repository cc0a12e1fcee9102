//! File path utilities for organizing downloaded assets.
//!
//! This module provides a centralized way to manage paths under the data
//! root: per-category image directories and the log directory.

use std::path::{Path, PathBuf};

/// File path manager for downloaded data
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the image root directory
    pub fn image_root(&self) -> PathBuf {
        self.root.join("img")
    }

    /// Get the image directory for a category's save dir
    pub fn category_dir(&self, save_dir: &str) -> PathBuf {
        self.image_root().join(save_dir)
    }

    /// Get the destination path for a sanitized image name
    pub fn image_file(&self, save_dir: &str, file_name: &str) -> PathBuf {
        self.category_dir(save_dir).join(file_name)
    }

    /// Get the logs directory
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// Create the root and log directories
    ///
    /// Per-category image directories are created lazily by the downloader,
    /// only once a download for that category succeeds.
    pub fn create_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.image_root())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths = DataPaths::new("/data");

        assert_eq!(paths.image_root(), PathBuf::from("/data/img"));
        assert_eq!(paths.category_dir("dragon"), PathBuf::from("/data/img/dragon"));
        assert_eq!(
            paths.image_file("amulet", "Resounding_Rendition.png"),
            PathBuf::from("/data/img/amulet/Resounding_Rendition.png")
        );
        assert_eq!(paths.logs_dir(), PathBuf::from("/data/logs"));
    }

    #[test]
    fn test_create_dirs() -> std::io::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let paths = DataPaths::new(temp_dir.path());

        paths.create_dirs()?;

        assert!(paths.image_root().is_dir());
        assert!(paths.logs_dir().is_dir());
        // Category dirs are not pre-created
        assert!(!paths.category_dir("dragon").exists());

        Ok(())
    }
}
