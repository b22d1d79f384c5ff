//! # Dashboard Renderer Module
//!
//! This module renders the dashboard tab: summary stat cards, quick action
//! buttons and the merged recent-activity feed.
//!
//! ## Key Functions:
//! - `render_dashboard()` - Main dashboard layout
//! - `render_stat_cards()` - Four derived totals
//! - `render_recent_activity()` - Last 10 records across all collections
//!
//! ## Purpose:
//! Everything shown here is recomputed from the current snapshot each
//! frame; the dashboard holds no state of its own.

use eframe::egui;
use shared::{ActivityKind, DashboardSummary};

use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::{color_from_hex, CARD_BACKGROUND, MUTED_TEXT};

impl OpenWorkLogApp {
    /// Render the dashboard tab
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let data = self.backend.worklog_service.data();
        let summary = self.backend.stats_service.summary(data);
        let activity = self.backend.stats_service.recent_activity(data);
        let currency = data.settings.currency.clone();

        ui.add_space(8.0);
        self.render_stat_cards(ui, &summary, &currency);
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("➕ Log Work").clicked() {
                self.open_work_entry_modal(None);
            }
            if ui.button("📝 Add Note").clicked() {
                self.note_form.clear();
                self.show_note_modal = true;
            }
            if ui.button("💳 Add Expense").clicked() {
                self.expense_form.clear();
                self.show_expense_modal = true;
            }
        });

        ui.add_space(16.0);
        ui.heading("Recent Activity");
        ui.add_space(4.0);
        self.render_recent_activity(ui, &activity);
    }

    fn render_stat_cards(
        &self,
        ui: &mut egui::Ui,
        summary: &DashboardSummary,
        currency: &str,
    ) {
        let cards = [
            ("Total Hours", format!("{:.1}h", summary.total_hours)),
            (
                "Estimated Earnings",
                format!("{}{:.2}", currency, summary.estimated_earnings),
            ),
            (
                "Total Expenses",
                format!("{}{:.2}", currency, summary.total_expenses),
            ),
            (
                "Net Earnings",
                format!("{}{:.2}", currency, summary.net_earnings),
            ),
        ];

        ui.horizontal(|ui| {
            let card_width = (ui.available_width() - 3.0 * 12.0) / 4.0;
            for (label, value) in cards {
                egui::Frame::none()
                    .fill(CARD_BACKGROUND)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_width(card_width.max(120.0));
                        ui.vertical(|ui| {
                            ui.colored_label(MUTED_TEXT, label);
                            ui.label(
                                egui::RichText::new(value)
                                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                                    .strong(),
                            );
                        });
                    });
                ui.add_space(12.0);
            }
        });
    }

    fn render_recent_activity(&self, ui: &mut egui::Ui, activity: &[shared::ActivityItem]) {
        if activity.is_empty() {
            ui.colored_label(
                MUTED_TEXT,
                "No activity yet. Start by logging your work hours!",
            );
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(ui.available_height())
            .show(ui, |ui| {
                for item in activity {
                    let (icon, accent) = match item.kind {
                        ActivityKind::Work => ("🕒", color_from_hex("#2563eb")),
                        ActivityKind::Note => ("📝", color_from_hex("#059669")),
                        ActivityKind::Expense => ("💳", color_from_hex("#e11d48")),
                    };

                    egui::Frame::none()
                        .fill(CARD_BACKGROUND)
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.colored_label(accent, icon);
                                ui.vertical(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(egui::RichText::new(&item.title).strong());
                                        ui.colored_label(
                                            MUTED_TEXT,
                                            item.date.format("%Y-%m-%d").to_string(),
                                        );
                                    });
                                    if !item.subtitle.is_empty() {
                                        ui.colored_label(MUTED_TEXT, &item.subtitle);
                                    }
                                });
                            });
                        });
                    ui.add_space(4.0);
                }
            });
    }
}
