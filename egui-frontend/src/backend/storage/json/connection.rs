//! Storage connection: owns the base data directory and the atomic write
//! primitive every repository uses.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform data dir
const APP_DATA_DIR: &str = "OpenWorkLog";

/// Connection to the file-based store. Cheap to clone; repositories each
/// hold their own copy.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at an explicit directory, creating it if
    /// needed.
    pub fn new(base_directory: &Path) -> Result<Self> {
        fs::create_dir_all(base_directory).with_context(|| {
            format!("failed to create data directory {}", base_directory.display())
        })?;
        Ok(Self {
            base_directory: base_directory.to_path_buf(),
        })
    }

    /// Create a connection at the default platform location
    /// (`<data dir>/OpenWorkLog`, falling back to the home directory).
    pub fn new_default() -> Result<Self> {
        let parent = dirs::data_dir()
            .or_else(dirs::home_dir)
            .context("could not determine a data directory for this platform")?;
        Self::new(&parent.join(APP_DATA_DIR))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Write a file atomically: write to a sibling temp file, then rename
    /// over the target.
    pub fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("failed to move {} into place", temp_path.display()))?;
        debug!("💾 Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() -> Result<()> {
        let temp = TempDir::new()?;
        let base = temp.path().join("nested").join("data");
        let connection = JsonConnection::new(&base)?;
        assert!(connection.base_directory().exists());
        Ok(())
    }

    #[test]
    fn test_write_atomic_replaces_content() -> Result<()> {
        let temp = TempDir::new()?;
        let connection = JsonConnection::new(temp.path())?;
        let target = temp.path().join("blob.json");

        connection.write_atomic(&target, "first")?;
        connection.write_atomic(&target, "second")?;

        assert_eq!(fs::read_to_string(&target)?, "second");
        assert!(!target.with_extension("tmp").exists());
        Ok(())
    }
}
