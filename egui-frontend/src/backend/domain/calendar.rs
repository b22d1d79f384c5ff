//! Calendar domain logic for the work log.
//!
//! All date math, grouping and task-color assignment lives here; the UI only
//! handles presentation. The service also owns the view anchor (focus date)
//! and the month/week display mode.

use chrono::{Datelike, Duration, Local, NaiveDate};
use log::info;
use shared::{
    is_weekend, CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth, CalendarWeek,
    ViewMode, WorkEntry, TASK_COLOR_PALETTE,
};
use std::collections::HashMap;

/// Task label → color mapping, ordered by first appearance so the legend is
/// stable across renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskColors {
    ordered: Vec<(String, String)>,
}

impl TaskColors {
    pub fn get(&self, task: &str) -> Option<&str> {
        self.ordered
            .iter()
            .find(|(label, _)| label == task)
            .map(|(_, color)| color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ordered.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Calendar service: view anchor, display mode, and the pure grid math.
pub struct CalendarService {
    focus: CalendarFocusDate,
    mode: ViewMode,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            focus: CalendarFocusDate::default(),
            mode: ViewMode::Month,
        }
    }

    pub fn focus(&self) -> CalendarFocusDate {
        self.focus
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Every date of the month from day 1 to the last day, ascending. The
    /// last day is the day before day 1 of the following month.
    pub fn month_days(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Vec::new();
        }
        let last = Self::last_day_of_month(year, month);
        (1..=last.day())
            .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
            .collect()
    }

    fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        // Day 1 of the following month always exists for valid input
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .map(|d| d - Duration::days(1))
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap_or_default())
    }

    /// The 7-day window starting from the Sunday on or before `anchor`.
    pub fn week_days(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        let start = anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64);
        (0..7).map(|i| start + Duration::days(i)).collect()
    }

    /// Group entries by their calendar date.
    pub fn group_entries_by_date(
        &self,
        entries: &[WorkEntry],
    ) -> HashMap<NaiveDate, Vec<WorkEntry>> {
        let mut by_date: HashMap<NaiveDate, Vec<WorkEntry>> = HashMap::new();
        for entry in entries {
            by_date.entry(entry.date).or_default().push(entry.clone());
        }
        by_date
    }

    /// Assign each distinct task label a palette color by order of first
    /// appearance (`index mod 10`); caller overrides win per label.
    /// Deterministic: the same entry sequence always yields the same map.
    pub fn assign_task_colors(
        &self,
        entries: &[WorkEntry],
        overrides: &HashMap<String, String>,
    ) -> TaskColors {
        let mut ordered: Vec<(String, String)> = Vec::new();
        for entry in entries {
            if ordered.iter().any(|(label, _)| label == &entry.task) {
                continue;
            }
            let color = overrides
                .get(&entry.task)
                .cloned()
                .unwrap_or_else(|| TASK_COLOR_PALETTE[ordered.len() % TASK_COLOR_PALETTE.len()].to_string());
            ordered.push((entry.task.clone(), color));
        }
        TaskColors { ordered }
    }

    /// Generate the month grid: leading padding up to the weekday of day 1
    /// (Sunday = 0), every real day with its entries, then trailing padding
    /// so the grid completes full weeks.
    pub fn generate_calendar_month(
        &self,
        year: i32,
        month: u32,
        entries: &[WorkEntry],
    ) -> CalendarMonth {
        let by_date = self.group_entries_by_date(entries);
        let today = Local::now().date_naive();
        let days = self.month_days(year, month);

        let first_day_of_week = days
            .first()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0);
        let last_day_of_week = days
            .last()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(6);

        let mut cells = Vec::with_capacity(days.len() + 12);
        for _ in 0..first_day_of_week {
            cells.push(CalendarDay::padding(CalendarDayType::PaddingBefore));
        }
        for date in &days {
            cells.push(Self::day_cell(*date, &by_date, today));
        }
        for _ in 0..(6 - last_day_of_week) {
            cells.push(CalendarDay::padding(CalendarDayType::PaddingAfter));
        }

        CalendarMonth {
            month,
            year,
            days: cells,
            first_day_of_week,
        }
    }

    /// Generate the week strip for the Sunday-start window containing
    /// `anchor`. Cells may span two months; all are real days.
    pub fn generate_calendar_week(&self, anchor: NaiveDate, entries: &[WorkEntry]) -> CalendarWeek {
        let by_date = self.group_entries_by_date(entries);
        let today = Local::now().date_naive();
        let days = self
            .week_days(anchor)
            .into_iter()
            .map(|date| Self::day_cell(date, &by_date, today))
            .collect();
        CalendarWeek { days }
    }

    fn day_cell(
        date: NaiveDate,
        by_date: &HashMap<NaiveDate, Vec<WorkEntry>>,
        today: NaiveDate,
    ) -> CalendarDay {
        let entries = by_date.get(&date).cloned().unwrap_or_default();
        let total_hours = entries.iter().map(|e| e.hours).sum();
        CalendarDay {
            day: date.day(),
            date: Some(date),
            entries,
            total_hours,
            day_type: CalendarDayType::MonthDay,
            is_today: date == today,
            is_weekend: is_weekend(date),
        }
    }

    /// Step the anchor back one month (snapping to day 1), wrapping
    /// December ← January with year rollover.
    pub fn navigate_previous_month(&mut self) {
        let (month, year) = Self::previous_month(self.focus.month(), self.focus.year());
        self.set_focus_month(year, month);
    }

    /// Step the anchor forward one month (snapping to day 1).
    pub fn navigate_next_month(&mut self) {
        let (month, year) = Self::next_month(self.focus.month(), self.focus.year());
        self.set_focus_month(year, month);
    }

    pub fn navigate_previous_year(&mut self) {
        self.set_focus_month(self.focus.year() - 1, self.focus.month());
    }

    pub fn navigate_next_year(&mut self) {
        self.set_focus_month(self.focus.year() + 1, self.focus.month());
    }

    /// Shift the anchor date itself by ±7 days, so week navigation crosses
    /// month boundaries correctly.
    pub fn navigate_previous_week(&mut self) {
        self.focus.date -= Duration::days(7);
        info!("📅 Week navigation → anchor {}", self.focus.date);
    }

    pub fn navigate_next_week(&mut self) {
        self.focus.date += Duration::days(7);
        info!("📅 Week navigation → anchor {}", self.focus.date);
    }

    fn set_focus_month(&mut self, year: i32, month: u32) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            self.focus = CalendarFocusDate { date };
            info!("📅 Calendar focus set to {}/{}", month, year);
        }
    }

    /// Previous (month, year), wrapping January → December.
    pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
        if month == 1 {
            (12, year - 1)
        } else {
            (month - 1, year)
        }
    }

    /// Next (month, year), wrapping December → January.
    pub fn next_month(month: u32, year: i32) -> (u32, i32) {
        if month == 12 {
            (1, year + 1)
        } else {
            (month + 1, year)
        }
    }

    /// Human-readable month name for the calendar header.
    pub fn month_name(month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Utc, Weekday};

    fn entry(date: &str, hours: f64, task: &str) -> WorkEntry {
        WorkEntry {
            id: format!("test_{}_{}", date, task),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            hours,
            task: task.to_string(),
            description: "work".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_month_days_leap_february() {
        let service = CalendarService::new();

        let days = service.month_days(2024, 2);
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let days = service.month_days(2023, 2);
        assert_eq!(days.len(), 28);
        assert_eq!(*days.last().unwrap(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_month_days_regular_months() {
        let service = CalendarService::new();
        assert_eq!(service.month_days(2025, 1).len(), 31);
        assert_eq!(service.month_days(2025, 4).len(), 30);
        assert_eq!(service.month_days(2025, 12).len(), 31);
    }

    #[test]
    fn test_week_days_starts_on_sunday() {
        let service = CalendarService::new();

        // A Wednesday
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let week = service.week_days(anchor);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }

        // A Sunday anchors its own week
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(service.week_days(sunday)[0], sunday);
    }

    #[test]
    fn test_week_days_crosses_month_boundary() {
        let service = CalendarService::new();
        // Saturday 2024-06-01: its week starts Sunday 2024-05-26
        let week = service.week_days(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_month_grid_padding() {
        let service = CalendarService::new();

        // May 2024: first day is Wednesday (index 3), last day Friday (index 5)
        let month = service.generate_calendar_month(2024, 5, &[]);
        let leading = month
            .days
            .iter()
            .take_while(|d| d.day_type == CalendarDayType::PaddingBefore)
            .count();
        let trailing = month
            .days
            .iter()
            .rev()
            .take_while(|d| d.day_type == CalendarDayType::PaddingAfter)
            .count();
        assert_eq!(leading, 3);
        assert_eq!(trailing, 1);
        assert_eq!(month.first_day_of_week, 3);
        // Full weeks
        assert_eq!(month.days.len() % 7, 0);
        assert_eq!(month.days.len(), 35);
    }

    #[test]
    fn test_empty_month_still_renders_full_grid() {
        let service = CalendarService::new();
        let month = service.generate_calendar_month(2024, 6, &[]);
        let real_days = month
            .days
            .iter()
            .filter(|d| d.day_type == CalendarDayType::MonthDay)
            .count();
        assert_eq!(real_days, 30);
        assert!(month.days.iter().all(|d| d.entries.is_empty()));
    }

    #[test]
    fn test_day_cell_grouping_and_totals() {
        let service = CalendarService::new();
        let entries = vec![
            entry("2024-06-01", 2.0, "Design"),
            entry("2024-06-01", 3.5, "Design"),
            entry("2024-06-01", 1.0, "Design"),
        ];

        let month = service.generate_calendar_month(2024, 6, &entries);
        let day = month
            .days
            .iter()
            .find(|d| d.day == 1 && d.day_type == CalendarDayType::MonthDay)
            .unwrap();
        assert_eq!(day.entries.len(), 3);
        assert!((day.total_hours - 6.5).abs() < 1e-9);
        assert!(day.is_weekend); // 2024-06-01 is a Saturday

        let colors = service.assign_task_colors(&entries, &HashMap::new());
        assert_eq!(colors.get("Design"), Some(TASK_COLOR_PALETTE[0]));
    }

    #[test]
    fn test_assign_task_colors_deterministic_and_cyclic() {
        let service = CalendarService::new();
        let entries: Vec<WorkEntry> = (0..12)
            .map(|i| entry("2024-06-01", 1.0, &format!("Task{}", i)))
            .collect();

        let first = service.assign_task_colors(&entries, &HashMap::new());
        let second = service.assign_task_colors(&entries, &HashMap::new());
        assert_eq!(first, second);

        // 11th and 12th tasks wrap back to the start of the palette
        assert_eq!(first.get("Task10"), Some(TASK_COLOR_PALETTE[0]));
        assert_eq!(first.get("Task11"), Some(TASK_COLOR_PALETTE[1]));
    }

    #[test]
    fn test_assign_task_colors_respects_overrides() {
        let service = CalendarService::new();
        let entries = vec![entry("2024-06-01", 1.0, "Design"), entry("2024-06-02", 1.0, "Meeting")];
        let mut overrides = HashMap::new();
        overrides.insert("Design".to_string(), "#000000".to_string());

        let colors = service.assign_task_colors(&entries, &overrides);
        assert_eq!(colors.get("Design"), Some("#000000"));
        // Non-overridden tasks still take their first-appearance palette slot
        assert_eq!(colors.get("Meeting"), Some(TASK_COLOR_PALETTE[1]));
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        let mut service = CalendarService::new();
        service.set_focus_month(2025, 1);

        service.navigate_previous_month();
        assert_eq!(service.focus().month(), 12);
        assert_eq!(service.focus().year(), 2024);

        service.navigate_next_month();
        assert_eq!(service.focus().month(), 1);
        assert_eq!(service.focus().year(), 2025);
    }

    #[test]
    fn test_year_navigation_steps_year_only() {
        let mut service = CalendarService::new();
        service.set_focus_month(2025, 6);

        service.navigate_previous_year();
        assert_eq!(service.focus().year(), 2024);
        assert_eq!(service.focus().month(), 6);

        service.navigate_next_year();
        service.navigate_next_year();
        assert_eq!(service.focus().year(), 2026);
    }

    #[test]
    fn test_week_navigation_crosses_month_boundary() {
        let mut service = CalendarService::new();
        service.focus = CalendarFocusDate {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };

        service.navigate_previous_week();
        assert_eq!(service.focus().date, NaiveDate::from_ymd_opt(2024, 5, 25).unwrap());
        assert_eq!(service.focus().month(), 5);

        service.navigate_next_week();
        service.navigate_next_week();
        assert_eq!(service.focus().date, NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
    }

    #[test]
    fn test_generate_calendar_week_window() {
        let service = CalendarService::new();
        let entries = vec![entry("2024-06-05", 4.0, "Development")];

        let week =
            service.generate_calendar_week(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(), &entries);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].date.unwrap(), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

        let wednesday = week.days.iter().find(|d| d.day == 5).unwrap();
        assert_eq!(wednesday.entries.len(), 1);
        assert_eq!(wednesday.total_hours, 4.0);

        // Zero-entry days are present with an empty list, never missing
        assert!(week.days.iter().all(|d| d.date.is_some()));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(CalendarService::month_name(1), "January");
        assert_eq!(CalendarService::month_name(12), "December");
        assert_eq!(CalendarService::month_name(13), "Invalid Month");
    }
}
