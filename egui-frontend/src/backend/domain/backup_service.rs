//! Backup domain logic: export the persisted blob verbatim as a JSON file,
//! and import a backup back in with schema and content validation.

use anyhow::Result;
use log::{error, info};
use shared::AppData;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::errors::ImportError;
use crate::backend::storage::json::AppDataRepository;

/// Fixed backup file name, shared with the original application
pub const BACKUP_FILE_NAME: &str = "openworklog-backup.json";

/// Result of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub file_path: String,
    pub bytes_written: usize,
}

/// Backup service. Export reads the raw blob through the repository so the
/// file on disk is byte-identical to the store; import never touches the
/// store itself — it hands a validated aggregate back to the caller.
pub struct BackupService;

impl BackupService {
    pub fn new() -> Self {
        Self
    }

    /// Export the persisted blob to `custom_path` (a directory) or the
    /// default location (Documents, falling back to home). Fails when
    /// nothing has ever been saved.
    pub fn export_to_path(
        &self,
        repository: &AppDataRepository,
        custom_path: Option<&str>,
    ) -> Result<ExportOutcome> {
        let raw = match repository.load_raw()? {
            Some(raw) => raw,
            None => {
                error!("❌ EXPORT: No stored data to export");
                return Err(anyhow::anyhow!("No data to export yet"));
            }
        };

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(self.sanitize_path(path)),
            _ => dirs::document_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| anyhow::anyhow!("Could not determine an export directory"))?,
        };

        fs::create_dir_all(&export_dir)?;
        let file_path = export_dir.join(BACKUP_FILE_NAME);
        fs::write(&file_path, &raw)?;

        info!(
            "📄 EXPORT: Wrote {} bytes to {}",
            raw.len(),
            file_path.display()
        );
        Ok(ExportOutcome {
            file_path: file_path.to_string_lossy().to_string(),
            bytes_written: raw.len(),
        })
    }

    /// Read and validate a backup file. Parsing into the typed aggregate is
    /// the schema check; content rules (non-negative numerics, unique ids,
    /// duplicate-free task list) run on top. The store is only replaced by
    /// the caller, after user confirmation.
    pub fn import_from_path(&self, path: &Path) -> Result<AppData, ImportError> {
        let raw = fs::read_to_string(path)?;
        let data: AppData = serde_json::from_str(&raw)?;
        self.validate(&data)?;
        info!(
            "📥 IMPORT: Parsed backup from {} ({} entries, {} notes, {} expenses)",
            path.display(),
            data.work_entries.len(),
            data.notes.len(),
            data.expenses.len()
        );
        Ok(data)
    }

    fn validate(&self, data: &AppData) -> Result<(), ImportError> {
        if !data.settings.hourly_rate.is_finite() || data.settings.hourly_rate < 0.0 {
            return Err(ImportError::Validation("hourly rate must be non-negative".to_string()));
        }

        let mut task_labels = HashSet::new();
        for task in &data.settings.tasks {
            if !task_labels.insert(task.as_str()) {
                return Err(ImportError::Validation(format!("duplicate task label: {}", task)));
            }
        }

        let mut ids = HashSet::new();
        for entry in &data.work_entries {
            if !entry.hours.is_finite() || entry.hours < 0.0 {
                return Err(ImportError::Validation(format!(
                    "work entry {} has negative hours",
                    entry.id
                )));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(ImportError::Validation(format!("duplicate work entry id: {}", entry.id)));
            }
        }

        ids.clear();
        for expense in &data.expenses {
            if !expense.amount.is_finite() || expense.amount < 0.0 {
                return Err(ImportError::Validation(format!(
                    "expense {} has a negative amount",
                    expense.id
                )));
            }
            if !ids.insert(expense.id.as_str()) {
                return Err(ImportError::Validation(format!("duplicate expense id: {}", expense.id)));
            }
        }

        ids.clear();
        for note in &data.notes {
            if !ids.insert(note.id.as_str()) {
                return Err(ImportError::Validation(format!("duplicate note id: {}", note.id)));
            }
        }

        Ok(())
    }

    /// Basic path sanitization for user-typed export directories.
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if (cleaned.starts_with('"') && cleaned.ends_with('"') && cleaned.len() >= 2)
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'') && cleaned.len() >= 2)
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        cleaned = cleaned.trim().to_string();

        // Handle escaped spaces
        cleaned = cleaned.replace("\\ ", " ");

        // Remove trailing slashes/backslashes
        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Tilde expansion for the home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for BackupService {
    fn default() -> Self {
        Self::new()
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
            hours: 3.0,
            task: "Design".to_string(),
            description: "Wireframes".to_string(),
            created_at: Utc::now(),
        });
        data.settings.hourly_rate = 40.0;
        data
    }

    #[test]
    fn test_export_fails_without_stored_data() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());
        let service = BackupService::new();

        let result = service.export_to_path(&repo, Some(env.base_path.to_str().unwrap()));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_export_then_import_round_trips() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = AppDataRepository::new(env.connection.clone());
        let service = BackupService::new();

        let data = sample_data();
        repo.save(&data)?;

        let export_dir = env.base_path.join("exports");
        let outcome = service.export_to_path(&repo, Some(export_dir.to_str().unwrap()))?;
        assert!(outcome.file_path.ends_with(BACKUP_FILE_NAME));
        assert!(outcome.bytes_written > 0);

        let imported = service.import_from_path(Path::new(&outcome.file_path)).unwrap();
        assert_eq!(imported, data);
        Ok(())
    }

    #[test]
    fn test_import_rejects_non_backup_json() -> Result<()> {
        let env = TestEnvironment::new()?;
        let service = BackupService::new();

        let path = env.base_path.join("bogus.json");
        std::fs::write(&path, r#"{"unrelated": true}"#)?;

        match service.import_from_path(&path) {
            Err(ImportError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
        Ok(())
    }

    #[test]
    fn test_import_rejects_invalid_content() -> Result<()> {
        let env = TestEnvironment::new()?;
        let service = BackupService::new();

        let mut data = sample_data();
        data.work_entries[0].hours = -5.0;
        let path = env.base_path.join("invalid.json");
        std::fs::write(&path, serde_json::to_string(&data)?)?;

        match service.import_from_path(&path) {
            Err(ImportError::Validation(msg)) => assert!(msg.contains("negative hours")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        Ok(())
    }

    #[test]
    fn test_import_rejects_duplicate_ids() -> Result<()> {
        let env = TestEnvironment::new()?;
        let service = BackupService::new();

        let mut data = sample_data();
        let dup = data.work_entries[0].clone();
        data.work_entries.push(dup);
        let path = env.base_path.join("dup.json");
        std::fs::write(&path, serde_json::to_string(&data)?)?;

        assert!(matches!(
            service.import_from_path(&path),
            Err(ImportError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn test_sanitize_path() {
        let service = BackupService::new();

        assert_eq!(service.sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(service.sanitize_path("/path\\ to\\ dir"), "/path to dir");
        assert_eq!(service.sanitize_path("/path/to/dir/"), "/path/to/dir");
        assert_eq!(service.sanitize_path("\"/quoted/path\""), "/quoted/path");

        let home = dirs::home_dir().unwrap();
        assert_eq!(
            service.sanitize_path("~/Documents"),
            home.join("Documents").to_string_lossy().to_string()
        );
    }
}
