//! Repository for the single persisted `AppData` blob.
//!
//! The aggregate is loaded once at startup and rewritten in full on every
//! mutation. A blob that fails to parse degrades to the supplied default
//! instead of aborting startup; the broken file stays on disk untouched
//! until the next save.

use anyhow::{Context, Result};
use log::{info, warn};
use shared::AppData;
use std::fs;
use std::path::PathBuf;

use super::connection::JsonConnection;

/// Fixed store key, kept identical to the original application's
/// localStorage key so backups stay recognizable.
pub const DATA_FILE_NAME: &str = "openWorkLog_data.json";

/// JSON-blob repository for the whole aggregate
#[derive(Clone)]
pub struct AppDataRepository {
    connection: JsonConnection,
}

impl AppDataRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn data_file_path(&self) -> PathBuf {
        self.connection.base_directory().join(DATA_FILE_NAME)
    }

    /// Whether a blob has ever been saved. Export refuses to run without one.
    pub fn data_file_exists(&self) -> bool {
        self.data_file_path().exists()
    }

    /// Read the persisted blob verbatim, or `None` if nothing was ever saved.
    pub fn load_raw(&self) -> Result<Option<String>> {
        let path = self.data_file_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(raw))
    }

    /// Load the stored aggregate, or the supplied default when the file is
    /// missing or fails to parse.
    pub fn load_or_default(&self, default: AppData) -> Result<AppData> {
        match self.load_raw()? {
            None => {
                info!("📂 No stored data found, starting from defaults");
                Ok(default)
            }
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(data) => Ok(data),
                Err(e) => {
                    warn!(
                        "⚠️ Stored data at {} failed to parse ({}), starting from defaults",
                        self.data_file_path().display(),
                        e
                    );
                    Ok(default)
                }
            },
        }
    }

    /// Persist the whole aggregate atomically.
    pub fn save(&self, data: &AppData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.connection.write_atomic(&self.data_file_path(), &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;
    use chrono::{NaiveDate, Utc};
    use shared::WorkEntry;

    fn sample_data() -> AppData {
        let mut data = AppData::default();
        data.work_entries.push(WorkEntry {
            id: "entry-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            hours: 4.0,
            task: "Development".to_string(),
            description: "Feature work".to_string(),
            created_at: Utc::now(),
        });
        data
    }

    #[test]
    fn test_load_or_default_when_missing() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());

        assert!(!repo.data_file_exists());
        let loaded = repo.load_or_default(AppData::default())?;
        assert_eq!(loaded, AppData::default());
        Ok(())
    }

    #[test]
    fn test_save_then_load_round_trips() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());

        let data = sample_data();
        repo.save(&data)?;
        assert!(repo.data_file_exists());

        let loaded = repo.load_or_default(AppData::default())?;
        assert_eq!(loaded, data);
        Ok(())
    }

    #[test]
    fn test_corrupt_blob_degrades_to_default() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());

        std::fs::write(env.base_path.join(DATA_FILE_NAME), "{ not json")?;
        let loaded = repo.load_or_default(AppData::default())?;
        assert_eq!(loaded, AppData::default());
        Ok(())
    }

    #[test]
    fn test_load_raw_is_verbatim() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());

        let data = sample_data();
        repo.save(&data)?;

        let raw = repo.load_raw()?.expect("blob should exist");
        let reparsed: AppData = serde_json::from_str(&raw)?;
        assert_eq!(reparsed, data);
        Ok(())
    }
}
