//! # Calendar Renderer Module
//!
//! This module handles all calendar-related rendering functionality for the
//! work log app. It provides a visual, interactive calendar view where users
//! can see their work entries displayed on specific dates.
//!
//! ## Key Functions:
//! - `render_calendar_tab()` - Navigation controls, legend and the grid
//! - `render_month_grid()` - Sunday-start month grid with padding cells
//! - `render_week_rows()` - Week mode with the Mon-Thu / Fri-Sun split
//! - `render_day_detail_window()` - Per-day entry list with edit/delete
//!
//! ## Purpose:
//! All date math lives in the calendar service; this module only draws the
//! cells it is handed and reports clicks back into app state.

use eframe::egui;
use shared::{CalendarDay, CalendarDayType, ViewMode};
use std::collections::HashMap;

use crate::backend::domain::{CalendarService, TaskColors};
use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::{
    color_from_hex, CARD_BACKGROUND, ACCENT, MUTED_TEXT, WEEKEND_BACKGROUND,
};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_CELL_HEIGHT: f32 = 86.0;
const WEEK_CELL_HEIGHT: f32 = 150.0;

impl OpenWorkLogApp {
    /// Render the calendar tab
    pub fn render_calendar_tab(&mut self, ui: &mut egui::Ui) {
        let entries = self.backend.worklog_service.data().work_entries.clone();
        let colors = self
            .backend
            .calendar_service
            .assign_task_colors(&entries, &HashMap::new());

        self.render_calendar_controls(ui);
        ui.add_space(6.0);
        self.render_task_legend(ui, &colors);
        ui.add_space(6.0);

        let focus = self.backend.calendar_service.focus();
        let clicked = match self.backend.calendar_service.mode() {
            ViewMode::Month => {
                let month = self.backend.calendar_service.generate_calendar_month(
                    focus.year(),
                    focus.month(),
                    &entries,
                );
                Self::render_month_grid(ui, &month.days, &colors)
            }
            ViewMode::Week => {
                let week = self
                    .backend
                    .calendar_service
                    .generate_calendar_week(focus.date, &entries);
                Self::render_week_rows(ui, &week, &colors)
            }
        };

        if let Some(date) = clicked {
            self.selected_day = Some(date);
        }
    }

    fn render_calendar_controls(&mut self, ui: &mut egui::Ui) {
        let mode = self.backend.calendar_service.mode();
        let focus = self.backend.calendar_service.focus();

        ui.horizontal(|ui| {
            match mode {
                ViewMode::Month => {
                    if ui.button("⏮").on_hover_text("Previous year").clicked() {
                        self.backend.calendar_service.navigate_previous_year();
                    }
                    if ui.button("◀").on_hover_text("Previous month").clicked() {
                        self.backend.calendar_service.navigate_previous_month();
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} {}",
                                CalendarService::month_name(focus.month()),
                                focus.year()
                            ))
                            .strong(),
                        )
                        .selectable(false),
                    );
                    if ui.button("▶").on_hover_text("Next month").clicked() {
                        self.backend.calendar_service.navigate_next_month();
                    }
                    if ui.button("⏭").on_hover_text("Next year").clicked() {
                        self.backend.calendar_service.navigate_next_year();
                    }
                }
                ViewMode::Week => {
                    if ui.button("◀").on_hover_text("Previous week").clicked() {
                        self.backend.calendar_service.navigate_previous_week();
                    }
                    let window = self.backend.calendar_service.week_days(focus.date);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} – {}",
                                window[0].format("%b %-d"),
                                window[6].format("%b %-d, %Y")
                            ))
                            .strong(),
                        )
                        .selectable(false),
                    );
                    if ui.button("▶").on_hover_text("Next week").clicked() {
                        self.backend.calendar_service.navigate_next_week();
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.selectable_label(mode == ViewMode::Week, "Week").clicked() {
                    self.backend.calendar_service.set_mode(ViewMode::Week);
                }
                if ui.selectable_label(mode == ViewMode::Month, "Month").clicked() {
                    self.backend.calendar_service.set_mode(ViewMode::Month);
                }
            });
        });
    }

    fn render_task_legend(&self, ui: &mut egui::Ui, colors: &TaskColors) {
        if colors.is_empty() {
            return;
        }
        ui.horizontal_wrapped(|ui| {
            for (task, hex) in colors.iter() {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(2.0), color_from_hex(hex));
                ui.label(task);
                ui.add_space(8.0);
            }
        });
    }

    /// Render the month grid. Returns the clicked day, if any.
    fn render_month_grid(
        ui: &mut egui::Ui,
        days: &[CalendarDay],
        colors: &TaskColors,
    ) -> Option<chrono::NaiveDate> {
        let mut clicked = None;
        let spacing = 4.0;
        let cell_width = (ui.available_width() - 6.0 * spacing) / 7.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for name in DAY_NAMES {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(cell_width, 20.0),
                    egui::Sense::hover(),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    name,
                    egui::FontId::new(13.0, egui::FontFamily::Proportional),
                    MUTED_TEXT,
                );
            }
        });

        egui::ScrollArea::vertical().show(ui, |ui| {
            for week in days.chunks(7) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = spacing;
                    for day in week {
                        if Self::draw_day_cell(ui, day, cell_width, MONTH_CELL_HEIGHT, colors) {
                            clicked = day.date;
                        }
                    }
                });
                ui.add_space(spacing);
            }
        });

        clicked
    }

    /// Render week mode as two rows: Monday-Thursday, then Friday-Sunday.
    fn render_week_rows(
        ui: &mut egui::Ui,
        week: &shared::CalendarWeek,
        colors: &TaskColors,
    ) -> Option<chrono::NaiveDate> {
        let (top, bottom) = week.display_rows();
        let mut clicked = None;
        let spacing = 6.0;

        let top_width = (ui.available_width() - 3.0 * spacing) / 4.0;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for day in &top {
                if Self::draw_day_cell(ui, day, top_width, WEEK_CELL_HEIGHT, colors) {
                    clicked = day.date;
                }
            }
        });
        ui.add_space(spacing);

        let bottom_width = (ui.available_width() - 2.0 * spacing) / 3.0;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for day in &bottom {
                if Self::draw_day_cell(ui, day, bottom_width, WEEK_CELL_HEIGHT, colors) {
                    clicked = day.date;
                }
            }
        });

        clicked
    }

    /// Draw one day cell. Returns true when a real (non-padding) day was
    /// clicked.
    fn draw_day_cell(
        ui: &mut egui::Ui,
        day: &CalendarDay,
        width: f32,
        height: f32,
        colors: &TaskColors,
    ) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

        // Padding cells keep grid alignment but draw almost nothing
        if day.day_type != CalendarDayType::MonthDay {
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(4.0),
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 8),
            );
            return false;
        }

        let fill = if day.is_weekend {
            WEEKEND_BACKGROUND
        } else {
            CARD_BACKGROUND
        };
        ui.painter().rect_filled(rect, egui::Rounding::same(4.0), fill);
        if response.hovered() {
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(4.0),
                egui::Color32::from_rgba_unmultiplied(37, 99, 235, 18),
            );
        }
        let stroke = if day.is_today {
            egui::Stroke::new(2.0, ACCENT)
        } else {
            egui::Stroke::new(0.5, egui::Color32::from_gray(200))
        };
        ui.painter().rect_stroke(rect, egui::Rounding::same(4.0), stroke);

        // Day number, top-left
        ui.painter().text(
            rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            day.day.to_string(),
            egui::FontId::new(13.0, egui::FontFamily::Proportional),
            if day.is_today {
                ACCENT
            } else {
                egui::Color32::from_gray(70)
            },
        );

        // Total hours (or placeholder), top-right
        let total = if day.entries.is_empty() {
            "-".to_string()
        } else {
            format!("{:.1}h", day.total_hours)
        };
        ui.painter().text(
            egui::pos2(rect.max.x - 6.0, rect.min.y + 4.0),
            egui::Align2::RIGHT_TOP,
            total,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
            MUTED_TEXT,
        );

        // Entry chips, as many as fit
        let chip_height = 16.0;
        let chip_top = rect.min.y + 24.0;
        let max_chips = ((rect.max.y - chip_top - 4.0) / (chip_height + 2.0)).floor() as usize;
        for (i, entry) in day.entries.iter().take(max_chips).enumerate() {
            let chip_rect = egui::Rect::from_min_size(
                egui::pos2(rect.min.x + 4.0, chip_top + i as f32 * (chip_height + 2.0)),
                egui::vec2(rect.width() - 8.0, chip_height),
            );
            let color = colors
                .get(&entry.task)
                .map(color_from_hex)
                .unwrap_or(egui::Color32::GRAY);
            ui.painter()
                .rect_filled(chip_rect, egui::Rounding::same(3.0), color);
            ui.painter().text(
                chip_rect.left_center() + egui::vec2(4.0, 0.0),
                egui::Align2::LEFT_CENTER,
                format!("{}h {}", entry.hours, entry.task),
                egui::FontId::new(11.0, egui::FontFamily::Proportional),
                egui::Color32::WHITE,
            );
        }
        let hidden = day.entries.len().saturating_sub(max_chips);
        if hidden > 0 {
            ui.painter().text(
                egui::pos2(rect.max.x - 6.0, rect.max.y - 4.0),
                egui::Align2::RIGHT_BOTTOM,
                format!("+{} more", hidden),
                egui::FontId::new(10.0, egui::FontFamily::Proportional),
                MUTED_TEXT,
            );
        }

        response.clicked()
    }

    /// Day detail window: entries for the selected day with edit/delete,
    /// plus an add button pre-filled with that date.
    pub fn render_day_detail_window(&mut self, ctx: &egui::Context) {
        let Some(date) = self.selected_day else {
            return;
        };

        let entries: Vec<shared::WorkEntry> = self
            .backend
            .worklog_service
            .data()
            .work_entries
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        let total: f64 = entries.iter().map(|e| e.hours).sum();

        let mut open = true;
        let mut edit_entry = None;
        let mut delete_id = None;
        let mut add_clicked = false;

        egui::Window::new(date.format("%A, %B %-d, %Y").to_string())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(360.0);

                if entries.is_empty() {
                    ui.colored_label(MUTED_TEXT, "No work logged on this day.");
                } else {
                    for entry in &entries {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{}h - {}", entry.hours, entry.task))
                                    .strong(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("🗑").clicked() {
                                        delete_id = Some(entry.id.clone());
                                    }
                                    if ui.small_button("✏").clicked() {
                                        edit_entry = Some(entry.clone());
                                    }
                                },
                            );
                        });
                        ui.colored_label(MUTED_TEXT, &entry.description);
                        ui.separator();
                    }
                    ui.label(format!("Total: {:.1}h", total));
                }

                ui.add_space(8.0);
                if ui.button("➕ Add Entry").clicked() {
                    add_clicked = true;
                }
            });

        if let Some(entry) = edit_entry {
            self.open_work_entry_editor(&entry);
        }
        if let Some(id) = delete_id {
            match self.backend.worklog_service.delete_work_entry(&id) {
                Ok(_) => self.success_message = Some("Work entry deleted".to_string()),
                Err(e) => self.error_message = Some(format!("Delete failed: {}", e)),
            }
        }
        if add_clicked {
            self.open_work_entry_modal(Some(date));
        }
        if !open {
            self.selected_day = None;
        }
    }
}
