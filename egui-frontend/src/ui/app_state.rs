//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the work log app.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining available tabs (Dashboard, Calendar, Entries, Calculator)
//! - `OpenWorkLogApp` - Main application state struct
//! - Form state structs for the work entry / note / expense / settings modals
//!
//! ## Purpose:
//! The OpenWorkLogApp struct holds all application state in a single location,
//! making it easy to manage and pass between different UI components. This follows
//! the single source of truth principle for state management:
//! - Backend services and data access
//! - UI state (messages, current tab, selected day)
//! - Modal visibility states
//! - Form input states

use chrono::{DateTime, Local, NaiveDate, Utc};
use log::info;
use shared::{AppData, Expense, Note, WorkEntry};

use crate::backend::Backend;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Calendar,
    Entries,
    Calculator,
}

/// Form state for the work entry modal. Doubles as the edit form: when
/// `editing_id` is set, submit updates instead of creating.
pub struct WorkEntryFormState {
    pub editing_id: Option<String>,
    /// Original creation timestamp, carried through edits unchanged
    pub created_at: Option<DateTime<Utc>>,
    pub date: NaiveDate,
    pub hours: String,
    pub task: String,
    pub description: String,
}

impl WorkEntryFormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, entry: &WorkEntry) {
        self.editing_id = Some(entry.id.clone());
        self.created_at = Some(entry.created_at);
        self.date = entry.date;
        self.hours = entry.hours.to_string();
        self.task = entry.task.clone();
        self.description = entry.description.clone();
    }

    /// Parsed hours, if the field currently holds a usable number.
    pub fn parsed_hours(&self) -> Option<f64> {
        self.hours
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h >= 0.0)
    }

    pub fn is_valid(&self) -> bool {
        self.parsed_hours().is_some()
            && !self.task.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

impl Default for WorkEntryFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            created_at: None,
            date: Local::now().date_naive(),
            hours: String::new(),
            task: String::new(),
            description: String::new(),
        }
    }
}

/// Form state for the note modal.
pub struct NoteFormState {
    pub editing_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

impl NoteFormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, note: &Note) {
        self.editing_id = Some(note.id.clone());
        self.created_at = Some(note.created_at);
        self.date = note.date;
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

impl Default for NoteFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            created_at: None,
            date: Local::now().date_naive(),
            title: String::new(),
            content: String::new(),
        }
    }
}

/// Form state for the expense modal.
pub struct ExpenseFormState {
    pub editing_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub date: NaiveDate,
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseFormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, expense: &Expense) {
        self.editing_id = Some(expense.id.clone());
        self.created_at = Some(expense.created_at);
        self.date = expense.date;
        self.description = expense.description.clone();
        self.amount = expense.amount.to_string();
        self.category = expense.category.clone();
    }

    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
    }

    pub fn is_valid(&self) -> bool {
        self.parsed_amount().is_some()
            && !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            created_at: None,
            date: Local::now().date_naive(),
            description: String::new(),
            amount: String::new(),
            category: String::new(),
        }
    }
}

/// Form state for the settings modal. Edits a copy; nothing touches the
/// store until Save.
#[derive(Default)]
pub struct SettingsFormState {
    pub hourly_rate: String,
    pub currency: String,
    pub tasks: Vec<String>,
    pub new_task: String,
    pub export_path: String,
    pub import_path: String,
    /// Validated import awaiting the user's replace confirmation
    pub pending_import: Option<AppData>,
}

impl SettingsFormState {
    pub fn load(&mut self, settings: &shared::Settings) {
        self.hourly_rate = settings.hourly_rate.to_string();
        self.currency = settings.currency.clone();
        self.tasks = settings.tasks.clone();
        self.new_task.clear();
        self.pending_import = None;
    }

    pub fn parsed_rate(&self) -> Option<f64> {
        self.hourly_rate
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r >= 0.0)
    }
}

/// State for the calculator tab.
#[derive(Default)]
pub struct CalculatorState {
    pub input: String,
    pub history: Vec<String>,
}

/// Main application struct for the egui work log
pub struct OpenWorkLogApp {
    pub backend: Backend,

    // UI state
    pub password_input: String,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub current_tab: MainTab,

    // Calendar state
    pub selected_day: Option<NaiveDate>,

    // Modal states
    pub show_work_entry_modal: bool,
    pub show_note_modal: bool,
    pub show_expense_modal: bool,
    pub show_settings_modal: bool,

    // Form states
    pub work_entry_form: WorkEntryFormState,
    pub note_form: NoteFormState,
    pub expense_form: ExpenseFormState,
    pub settings_form: SettingsFormState,
    pub calculator: CalculatorState,
}

impl OpenWorkLogApp {
    /// Create a new OpenWorkLogApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing OpenWorkLogApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,

            // UI state
            password_input: String::new(),
            error_message: None,
            success_message: None,
            current_tab: MainTab::Dashboard,

            // Calendar state
            selected_day: None,

            // Modal states
            show_work_entry_modal: false,
            show_note_modal: false,
            show_expense_modal: false,
            show_settings_modal: false,

            // Form states
            work_entry_form: WorkEntryFormState::default(),
            note_form: NoteFormState::default(),
            expense_form: ExpenseFormState::default(),
            settings_form: SettingsFormState::default(),
            calculator: CalculatorState::default(),
        })
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Open the work entry modal as a blank create form, optionally
    /// pre-filled with a calendar day.
    pub fn open_work_entry_modal(&mut self, date: Option<NaiveDate>) {
        self.work_entry_form.clear();
        if let Some(date) = date {
            self.work_entry_form.date = date;
        }
        if let Some(first) = self.backend.worklog_service.data().settings.tasks.first() {
            self.work_entry_form.task = first.clone();
        }
        self.show_work_entry_modal = true;
    }

    /// Open the work entry modal loaded with an existing entry.
    pub fn open_work_entry_editor(&mut self, entry: &WorkEntry) {
        self.work_entry_form.load(entry);
        self.show_work_entry_modal = true;
    }

    /// Open the settings modal seeded from current settings.
    pub fn open_settings_modal(&mut self) {
        let settings = self.backend.worklog_service.data().settings.clone();
        self.settings_form.load(&settings);
        self.show_settings_modal = true;
    }
}
