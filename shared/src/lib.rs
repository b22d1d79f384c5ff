use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A single logged block of work. Entry ID format: uuid v4.
///
/// Field names serialize in camelCase so backup files stay interchangeable
/// with the `openworklog-backup.json` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: String,
    /// Calendar date the work happened on (no time component)
    pub date: NaiveDate,
    /// Hours worked, non-negative (enforced at the input boundary)
    pub hours: f64,
    /// Free-text task/project label; usually one of `Settings::tasks`
    pub task: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A dated free-text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A dated expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Expense amount, non-negative (enforced at the input boundary)
    pub amount: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// User settings, mutated wholesale from the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub hourly_rate: f64,
    /// Currency symbol used for display ("$", "€", ...)
    pub currency: String,
    /// Ordered list of distinct task labels offered by the work-entry form
    pub tasks: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: 25.0,
            currency: "$".to_string(),
            tasks: vec![
                "Development".to_string(),
                "Design".to_string(),
                "Meeting".to_string(),
                "Research".to_string(),
                "Documentation".to_string(),
                "Testing".to_string(),
                "Support".to_string(),
                "Admin".to_string(),
            ],
        }
    }
}

/// Aggregate root for everything the app persists. The whole aggregate is
/// the unit of persistence; there are no partial writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub work_entries: Vec<WorkEntry>,
    pub notes: Vec<Note>,
    pub expenses: Vec<Expense>,
    pub settings: Settings,
}

/// Draft payload for creating a work entry; id/created_at are assigned by
/// the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub task: String,
    pub description: String,
}

/// Draft payload for creating a note.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

/// Draft payload for creating an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

/// Fixed 10-color palette for task labels, assigned cyclically by order of
/// first appearance. Hex strings so the domain layer stays UI-agnostic.
pub const TASK_COLOR_PALETTE: [&str; 10] = [
    "#2563eb", "#059669", "#f59e42", "#e11d48", "#a21caf",
    "#fbbf24", "#10b981", "#6366f1", "#f43f5e", "#0ea5e9",
];

/// Calendar display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Month,
    Week,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the grid
    MonthDay,
    /// Empty padding cell after the last day of the month
    PaddingAfter,
}

/// A single cell of the calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day-of-month number; 0 for padding cells
    pub day: u32,
    /// None for padding cells
    pub date: Option<NaiveDate>,
    pub entries: Vec<WorkEntry>,
    /// Sum of `hours` over `entries`; 0 renders as a placeholder marker
    pub total_hours: f64,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl CalendarDay {
    pub fn padding(day_type: CalendarDayType) -> Self {
        Self {
            day: 0,
            date: None,
            entries: Vec::new(),
            total_hours: 0.0,
            day_type,
            is_today: false,
            is_weekend: false,
        }
    }
}

/// A month grid: leading/trailing padding plus every day of the month, so
/// the cells always complete full Sunday-start weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    /// Weekday index of day 1 (0 = Sunday) == number of leading padding cells
    pub first_day_of_week: u32,
}

/// A 7-day Sunday-start window used by week mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// Exactly 7 days, ascending from Sunday
    pub days: Vec<CalendarDay>,
}

impl CalendarWeek {
    /// Fixed display split: a Monday-Thursday row of 4 and a Friday-Sunday
    /// row of 3. Display only; the underlying window stays Sunday-start.
    pub fn display_rows(&self) -> (Vec<&CalendarDay>, Vec<&CalendarDay>) {
        let top = vec![&self.days[1], &self.days[2], &self.days[3], &self.days[4]];
        let bottom = vec![&self.days[5], &self.days[6], &self.days[0]];
        (top, bottom)
    }
}

/// The anchor date determining what the calendar currently displays.
/// Month navigation snaps it to day 1; week navigation moves it ±7 days so
/// week views cross month boundaries correctly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub date: NaiveDate,
}

impl CalendarFocusDate {
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        Self {
            date: chrono::Local::now().date_naive(),
        }
    }
}

/// Derived dashboard totals. All pure functions of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_hours: f64,
    pub estimated_earnings: f64,
    pub total_expenses: f64,
    /// `estimated_earnings - total_expenses`; may be negative
    pub net_earnings: f64,
}

/// Which collection an activity feed item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Work,
    Note,
    Expense,
}

/// One row of the merged recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub date: NaiveDate,
    pub title: String,
    pub subtitle: String,
}

/// True for Saturday and Sunday; styling only, never excluded from totals.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
