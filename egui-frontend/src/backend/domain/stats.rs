//! Dashboard aggregation: totals and the merged recent-activity feed.
//! Pure reads of the current snapshot; recomputed on every render.

use shared::{ActivityItem, ActivityKind, AppData, DashboardSummary};

/// Most recent items shown in the activity feed
const ACTIVITY_FEED_LIMIT: usize = 10;
/// Note previews are truncated to this many characters
const NOTE_PREVIEW_CHARS: usize = 100;

/// Aggregation service. Stateless; methods take the snapshot explicitly.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Totals for the dashboard cards. Empty collections yield zeros.
    pub fn summary(&self, data: &AppData) -> DashboardSummary {
        let total_hours: f64 = data.work_entries.iter().map(|e| e.hours).sum();
        let estimated_earnings = total_hours * data.settings.hourly_rate;
        let total_expenses: f64 = data.expenses.iter().map(|x| x.amount).sum();
        DashboardSummary {
            total_hours,
            estimated_earnings,
            total_expenses,
            net_earnings: estimated_earnings - total_expenses,
        }
    }

    /// Merge the three collections into one feed: kind-specific title and
    /// subtitle, stable sort descending by date (ties keep the combined
    /// work → note → expense insertion order), most recent 10.
    pub fn recent_activity(&self, data: &AppData) -> Vec<ActivityItem> {
        let currency = &data.settings.currency;
        let mut feed: Vec<ActivityItem> = Vec::with_capacity(
            data.work_entries.len() + data.notes.len() + data.expenses.len(),
        );

        for entry in &data.work_entries {
            feed.push(ActivityItem {
                id: entry.id.clone(),
                kind: ActivityKind::Work,
                date: entry.date,
                title: format!("{}h - {}", entry.hours, entry.task),
                subtitle: entry.description.clone(),
            });
        }
        for note in &data.notes {
            feed.push(ActivityItem {
                id: note.id.clone(),
                kind: ActivityKind::Note,
                date: note.date,
                title: note.title.clone(),
                subtitle: truncate_preview(&note.content),
            });
        }
        for expense in &data.expenses {
            feed.push(ActivityItem {
                id: expense.id.clone(),
                kind: ActivityKind::Expense,
                date: expense.date,
                title: format!("{}{:.2} - {}", currency, expense.amount, expense.category),
                subtitle: expense.description.clone(),
            });
        }

        // sort_by is stable, so same-date items keep their combined order
        feed.sort_by(|a, b| b.date.cmp(&a.date));
        feed.truncate(ACTIVITY_FEED_LIMIT);
        feed
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_preview(content: &str) -> String {
    if content.chars().count() > NOTE_PREVIEW_CHARS {
        let preview: String = content.chars().take(NOTE_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::{Expense, Note, WorkEntry};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn work(id: &str, on: &str, hours: f64, task: &str) -> WorkEntry {
        WorkEntry {
            id: id.to_string(),
            date: date(on),
            hours,
            task: task.to_string(),
            description: format!("{} description", id),
            created_at: Utc::now(),
        }
    }

    fn expense(id: &str, on: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date: date(on),
            description: format!("{} description", id),
            amount,
            category: "Tools".to_string(),
            created_at: Utc::now(),
        }
    }

    fn note(id: &str, on: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            date: date(on),
            title: format!("{} title", id),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_data_yields_zero_summary_and_empty_feed() {
        let service = StatsService::new();
        let data = AppData::default();

        let summary = service.summary(&data);
        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.estimated_earnings, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.net_earnings, 0.0);
        assert!(service.recent_activity(&data).is_empty());
    }

    #[test]
    fn test_earnings_formula() {
        let service = StatsService::new();
        let mut data = AppData::default();
        data.settings.hourly_rate = 30.0;
        data.work_entries.push(work("w1", "2024-06-01", 2.0, "Design"));
        data.work_entries.push(work("w2", "2024-06-02", 3.5, "Meeting"));
        data.expenses.push(expense("x1", "2024-06-03", 40.0));

        let summary = service.summary(&data);
        assert_eq!(summary.total_hours, 5.5);
        assert_eq!(summary.estimated_earnings, 5.5 * 30.0);
        assert_eq!(summary.total_expenses, 40.0);
        assert_eq!(summary.net_earnings, 5.5 * 30.0 - 40.0);
    }

    #[test]
    fn test_zero_hourly_rate() {
        let service = StatsService::new();
        let mut data = AppData::default();
        data.settings.hourly_rate = 0.0;
        data.work_entries.push(work("w1", "2024-06-01", 8.0, "Design"));

        let summary = service.summary(&data);
        assert_eq!(summary.total_hours, 8.0);
        assert_eq!(summary.estimated_earnings, 0.0);
    }

    #[test]
    fn test_net_earnings_can_be_negative() {
        let service = StatsService::new();
        let mut data = AppData::default();
        data.expenses.push(expense("x1", "2024-06-01", 100.0));

        assert_eq!(service.summary(&data).net_earnings, -100.0);
    }

    #[test]
    fn test_feed_titles_per_kind() {
        let service = StatsService::new();
        let mut data = AppData::default();
        data.settings.currency = "€".to_string();
        data.work_entries.push(work("w1", "2024-06-01", 2.5, "Design"));
        data.notes.push(note("n1", "2024-06-02", "short note"));
        data.expenses.push(expense("x1", "2024-06-03", 12.5));

        let feed = service.recent_activity(&data);
        assert_eq!(feed.len(), 3);

        let work_item = feed.iter().find(|i| i.kind == ActivityKind::Work).unwrap();
        assert_eq!(work_item.title, "2.5h - Design");
        assert_eq!(work_item.subtitle, "w1 description");

        let note_item = feed.iter().find(|i| i.kind == ActivityKind::Note).unwrap();
        assert_eq!(note_item.title, "n1 title");
        assert_eq!(note_item.subtitle, "short note");

        let expense_item = feed.iter().find(|i| i.kind == ActivityKind::Expense).unwrap();
        assert_eq!(expense_item.title, "€12.50 - Tools");
    }

    #[test]
    fn test_note_preview_truncation() {
        let service = StatsService::new();
        let mut data = AppData::default();
        let long = "x".repeat(150);
        data.notes.push(note("n1", "2024-06-01", &long));

        let feed = service.recent_activity(&data);
        assert_eq!(feed[0].subtitle.chars().count(), 103);
        assert!(feed[0].subtitle.ends_with("..."));

        // Exactly 100 characters is not truncated
        let mut data = AppData::default();
        data.notes.push(note("n2", "2024-06-01", &"y".repeat(100)));
        let feed = service.recent_activity(&data);
        assert_eq!(feed[0].subtitle.chars().count(), 100);
        assert!(!feed[0].subtitle.ends_with("..."));
    }

    #[test]
    fn test_feed_sorted_descending_capped_at_ten() {
        let service = StatsService::new();
        let mut data = AppData::default();
        for i in 1..=12 {
            data.work_entries.push(work(&format!("w{}", i), &format!("2024-06-{:02}", i), 1.0, "Design"));
        }

        let feed = service.recent_activity(&data);
        assert_eq!(feed.len(), 10);
        for pair in feed.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        // Oldest two entries fell off
        assert!(feed.iter().all(|i| i.id != "w1" && i.id != "w2"));
    }

    #[test]
    fn test_feed_ties_keep_combined_order() {
        let service = StatsService::new();
        let mut data = AppData::default();
        data.work_entries.push(work("w1", "2024-06-01", 1.0, "Design"));
        data.notes.push(note("n1", "2024-06-01", "same day"));
        data.expenses.push(expense("x1", "2024-06-01", 5.0));

        let feed = service.recent_activity(&data);
        let ids: Vec<_> = feed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "n1", "x1"]);
    }
}
