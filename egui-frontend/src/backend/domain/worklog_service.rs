//! Record store for the work log: work entries, notes, expenses and
//! settings, held in memory and persisted as one blob after every mutation.
//!
//! Validation happens here at the input boundary; downstream consumers
//! (calendar, stats) never re-check. A record is created fully formed or
//! not at all.

use anyhow::Result;
use chrono::Utc;
use log::info;
use shared::{AppData, Expense, NewExpense, NewNote, NewWorkEntry, Note, Settings, WorkEntry};
use uuid::Uuid;

use crate::backend::domain::errors::DomainError;
use crate::backend::storage::json::{AppDataRepository, JsonConnection};

/// Record store service. Owns the in-memory aggregate and its repository.
pub struct WorklogService {
    repository: AppDataRepository,
    data: AppData,
}

impl WorklogService {
    /// Load the stored aggregate (or defaults) and wrap it in a service.
    pub fn new(connection: JsonConnection) -> Result<Self> {
        let repository = AppDataRepository::new(connection);
        let data = repository.load_or_default(AppData::default())?;
        info!(
            "📊 Loaded work log: {} entries, {} notes, {} expenses",
            data.work_entries.len(),
            data.notes.len(),
            data.expenses.len()
        );
        Ok(Self { repository, data })
    }

    /// Current snapshot. Derived views recompute from this on every render.
    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn repository(&self) -> &AppDataRepository {
        &self.repository
    }

    fn persist(&self) -> Result<()> {
        self.repository.save(&self.data)
    }

    // --- work entries ---

    pub fn add_work_entry(&mut self, draft: NewWorkEntry) -> Result<WorkEntry> {
        validate_hours(draft.hours)?;
        validate_required("task", &draft.task)?;
        validate_required("description", &draft.description)?;

        let entry = WorkEntry {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            hours: draft.hours,
            task: draft.task,
            description: draft.description,
            created_at: Utc::now(),
        };
        self.data.work_entries.push(entry.clone());
        self.persist()?;
        info!("🕒 Added work entry {} ({}h on {})", entry.id, entry.hours, entry.date);
        Ok(entry)
    }

    /// Full replacement by id; the edit form submits a complete record.
    pub fn update_work_entry(&mut self, updated: WorkEntry) -> Result<()> {
        validate_hours(updated.hours)?;
        validate_required("task", &updated.task)?;
        validate_required("description", &updated.description)?;

        let slot = self
            .data
            .work_entries
            .iter_mut()
            .find(|e| e.id == updated.id)
            .ok_or(DomainError::NotFound {
                kind: "work entry",
                id: updated.id.clone(),
            })?;
        *slot = updated;
        self.persist()
    }

    /// Remove exactly the entry with this id. Returns whether it existed.
    pub fn delete_work_entry(&mut self, id: &str) -> Result<bool> {
        let before = self.data.work_entries.len();
        self.data.work_entries.retain(|e| e.id != id);
        let removed = self.data.work_entries.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    // --- notes ---

    pub fn add_note(&mut self, draft: NewNote) -> Result<Note> {
        validate_required("title", &draft.title)?;
        validate_required("content", &draft.content)?;

        let note = Note {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            title: draft.title,
            content: draft.content,
            created_at: Utc::now(),
        };
        self.data.notes.push(note.clone());
        self.persist()?;
        Ok(note)
    }

    pub fn update_note(&mut self, updated: Note) -> Result<()> {
        validate_required("title", &updated.title)?;
        validate_required("content", &updated.content)?;

        let slot = self
            .data
            .notes
            .iter_mut()
            .find(|n| n.id == updated.id)
            .ok_or(DomainError::NotFound {
                kind: "note",
                id: updated.id.clone(),
            })?;
        *slot = updated;
        self.persist()
    }

    pub fn delete_note(&mut self, id: &str) -> Result<bool> {
        let before = self.data.notes.len();
        self.data.notes.retain(|n| n.id != id);
        let removed = self.data.notes.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    // --- expenses ---

    pub fn add_expense(&mut self, draft: NewExpense) -> Result<Expense> {
        validate_amount(draft.amount)?;
        validate_required("description", &draft.description)?;
        validate_required("category", &draft.category)?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            created_at: Utc::now(),
        };
        self.data.expenses.push(expense.clone());
        self.persist()?;
        Ok(expense)
    }

    pub fn update_expense(&mut self, updated: Expense) -> Result<()> {
        validate_amount(updated.amount)?;
        validate_required("description", &updated.description)?;
        validate_required("category", &updated.category)?;

        let slot = self
            .data
            .expenses
            .iter_mut()
            .find(|x| x.id == updated.id)
            .ok_or(DomainError::NotFound {
                kind: "expense",
                id: updated.id.clone(),
            })?;
        *slot = updated;
        self.persist()
    }

    pub fn delete_expense(&mut self, id: &str) -> Result<bool> {
        let before = self.data.expenses.len();
        self.data.expenses.retain(|x| x.id != id);
        let removed = self.data.expenses.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    // --- settings ---

    /// Replace settings wholesale (the settings panel edits a copy).
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        if settings.hourly_rate < 0.0 || !settings.hourly_rate.is_finite() {
            return Err(DomainError::Validation("hourly rate must be non-negative".to_string()).into());
        }
        let mut seen = std::collections::HashSet::new();
        for task in &settings.tasks {
            if !seen.insert(task.as_str()) {
                return Err(
                    DomainError::Validation(format!("duplicate task label: {}", task)).into(),
                );
            }
        }
        self.data.settings = settings;
        self.persist()
    }

    /// Append a task label; empty and duplicate labels are rejected.
    pub fn add_task(&mut self, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(DomainError::Validation("task label must not be empty".to_string()).into());
        }
        if self.data.settings.tasks.iter().any(|t| t == label) {
            return Err(
                DomainError::Validation(format!("task already exists: {}", label)).into(),
            );
        }
        self.data.settings.tasks.push(label.to_string());
        self.persist()
    }

    /// Remove a task label. Entries referencing it keep their label; the
    /// task reference is a soft free-text convention.
    pub fn remove_task(&mut self, label: &str) -> Result<bool> {
        let before = self.data.settings.tasks.len();
        self.data.settings.tasks.retain(|t| t != label);
        let removed = self.data.settings.tasks.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Replace the entire store (import path). Caller is responsible for
    /// confirmation; the new content has already passed import validation.
    pub fn replace_all(&mut self, data: AppData) -> Result<()> {
        self.data = data;
        self.persist()?;
        info!(
            "📥 Store replaced: {} entries, {} notes, {} expenses",
            self.data.work_entries.len(),
            self.data.notes.len(),
            self.data.expenses.len()
        );
        Ok(())
    }
}

fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(DomainError::Validation("hours must be a non-negative number".to_string()).into());
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::Validation("amount must be a non-negative number".to_string()).into());
    }
    Ok(())
}

fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn service() -> (TestEnvironment, WorklogService) {
        let env = TestEnvironment::new().unwrap();
        let service = WorklogService::new(env.connection.clone()).unwrap();
        (env, service)
    }

    fn draft(date: &str, hours: f64, task: &str) -> NewWorkEntry {
        NewWorkEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            hours,
            task: task.to_string(),
            description: "some work".to_string(),
        }
    }

    #[test]
    fn test_add_work_entry_assigns_id_and_persists() {
        let (env, mut service) = service();
        let entry = service.add_work_entry(draft("2024-06-01", 2.0, "Design")).unwrap();
        assert!(!entry.id.is_empty());

        // A fresh service over the same directory sees the entry
        let reloaded = WorklogService::new(env.connection.clone()).unwrap();
        assert_eq!(reloaded.data().work_entries.len(), 1);
        assert_eq!(reloaded.data().work_entries[0].id, entry.id);
    }

    #[test]
    fn test_add_work_entry_rejects_negative_hours() {
        let (_env, mut service) = service();
        assert!(service.add_work_entry(draft("2024-06-01", -1.0, "Design")).is_err());
        assert!(service.data().work_entries.is_empty());
    }

    #[test]
    fn test_add_work_entry_rejects_blank_task() {
        let (_env, mut service) = service();
        assert!(service.add_work_entry(draft("2024-06-01", 1.0, "  ")).is_err());
        assert!(service.data().work_entries.is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one_entry() {
        let (_env, mut service) = service();
        let a = service.add_work_entry(draft("2024-06-01", 1.0, "Design")).unwrap();
        let b = service.add_work_entry(draft("2024-06-02", 2.0, "Meeting")).unwrap();
        let c = service.add_work_entry(draft("2024-06-03", 3.0, "Testing")).unwrap();

        assert!(service.delete_work_entry(&b.id).unwrap());

        let remaining: Vec<_> = service.data().work_entries.iter().map(|e| e.id.clone()).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
        assert_eq!(service.data().work_entries[0].hours, 1.0);
        assert_eq!(service.data().work_entries[1].hours, 3.0);

        // Deleting again is a no-op
        assert!(!service.delete_work_entry(&b.id).unwrap());
    }

    #[test]
    fn test_update_work_entry_replaces_in_place() {
        let (_env, mut service) = service();
        let entry = service.add_work_entry(draft("2024-06-01", 1.0, "Design")).unwrap();

        let mut updated = entry.clone();
        updated.hours = 7.5;
        updated.description = "Revised".to_string();
        service.update_work_entry(updated).unwrap();

        assert_eq!(service.data().work_entries.len(), 1);
        assert_eq!(service.data().work_entries[0].hours, 7.5);
        assert_eq!(service.data().work_entries[0].created_at, entry.created_at);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let (_env, mut service) = service();
        let entry = service.add_work_entry(draft("2024-06-01", 1.0, "Design")).unwrap();
        let mut ghost = entry;
        ghost.id = "missing".to_string();
        assert!(service.update_work_entry(ghost).is_err());
    }

    #[test]
    fn test_expense_validation() {
        let (_env, mut service) = service();
        let bad = NewExpense {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            description: "Lunch".to_string(),
            amount: -3.0,
            category: "Food".to_string(),
        };
        assert!(service.add_expense(bad).is_err());
        assert!(service.data().expenses.is_empty());
    }

    #[test]
    fn test_add_task_rejects_duplicates() {
        let (_env, mut service) = service();
        service.add_task("Oncall").unwrap();
        assert!(service.add_task("Oncall").is_err());
        assert!(service.add_task("  ").is_err());
        // Default list already contains Design
        assert!(service.add_task("Design").is_err());
    }

    #[test]
    fn test_remove_task_leaves_entries_untouched() {
        let (_env, mut service) = service();
        service.add_work_entry(draft("2024-06-01", 2.0, "Design")).unwrap();

        assert!(service.remove_task("Design").unwrap());
        assert!(!service.data().settings.tasks.contains(&"Design".to_string()));
        // Entry keeps its now-freeform label
        assert_eq!(service.data().work_entries[0].task, "Design");
        assert!(!service.remove_task("Design").unwrap());
    }

    #[test]
    fn test_update_settings_rejects_duplicate_tasks() {
        let (_env, mut service) = service();
        let mut settings = service.data().settings.clone();
        settings.tasks = vec!["A".to_string(), "A".to_string()];
        assert!(service.update_settings(settings).is_err());
    }

    #[test]
    fn test_replace_all_swaps_everything() {
        let (_env, mut service) = service();
        service.add_work_entry(draft("2024-06-01", 2.0, "Design")).unwrap();

        let mut incoming = AppData::default();
        incoming.settings.hourly_rate = 99.0;
        service.replace_all(incoming).unwrap();

        assert!(service.data().work_entries.is_empty());
        assert_eq!(service.data().settings.hourly_rate, 99.0);
    }
}
