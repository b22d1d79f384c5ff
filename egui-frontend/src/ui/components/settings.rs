//! # Settings Module
//!
//! This module renders the settings modal: hourly rate, currency, the task
//! label list, and the backup/restore section.
//!
//! ## Key Functions:
//! - `render_settings_modal()` - Main settings window
//! - `apply_settings()` - Validate and persist the edited copy on Save
//!
//! ## Purpose:
//! The modal edits a copy of the current settings; nothing reaches the
//! store until Save. Export and import act immediately, but an import only
//! replaces the store after an explicit confirmation step showing what the
//! backup contains.

use eframe::egui;
use shared::Settings;
use std::path::Path;

use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::{ERROR_TEXT, MUTED_TEXT};

const CURRENCIES: [&str; 5] = ["$", "€", "£", "¥", "₹"];

impl OpenWorkLogApp {
    /// Render the settings modal
    pub fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings_modal {
            return;
        }

        let mut open = true;
        let mut save = false;
        let mut cancelled = false;
        let mut export_clicked = false;
        let mut import_clicked = false;
        let mut confirm_replace = false;
        let mut discard_import = false;
        let mut remove_task: Option<usize> = None;
        let mut add_task = false;

        egui::Window::new("⚙ Settings")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                egui::Grid::new("settings_general")
                    .num_columns(2)
                    .spacing(egui::vec2(12.0, 10.0))
                    .show(ui, |ui| {
                        ui.label("Hourly rate:");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.settings_form.hourly_rate)
                                    .desired_width(80.0),
                            );
                            if self.settings_form.parsed_rate().is_none() {
                                ui.colored_label(ERROR_TEXT, "must be a non-negative number");
                            }
                        });
                        ui.end_row();

                        ui.label("Currency:");
                        egui::ComboBox::from_id_source("settings_currency")
                            .selected_text(self.settings_form.currency.clone())
                            .show_ui(ui, |ui| {
                                for symbol in CURRENCIES {
                                    ui.selectable_value(
                                        &mut self.settings_form.currency,
                                        symbol.to_string(),
                                        symbol,
                                    );
                                }
                            });
                        ui.end_row();
                    });

                ui.add_space(6.0);
                ui.separator();
                ui.label(egui::RichText::new("Tasks").strong());
                for (i, task) in self.settings_form.tasks.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(task);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("🗑").clicked() {
                                remove_task = Some(i);
                            }
                        });
                    });
                }
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.settings_form.new_task)
                            .hint_text("New task label")
                            .desired_width(180.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || submitted {
                        add_task = true;
                    }
                });

                ui.add_space(6.0);
                ui.separator();
                ui.label(egui::RichText::new("Backup & Restore").strong());

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_form.export_path)
                            .hint_text("Export directory (default: Documents)")
                            .desired_width(240.0),
                    );
                    if ui.button("📤 Export").clicked() {
                        export_clicked = true;
                    }
                });
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_form.import_path)
                            .hint_text("Path to openworklog-backup.json")
                            .desired_width(240.0),
                    );
                    if ui.button("📥 Import").clicked() {
                        import_clicked = true;
                    }
                });

                if let Some(pending) = &self.settings_form.pending_import {
                    ui.add_space(4.0);
                    ui.colored_label(
                        MUTED_TEXT,
                        format!(
                            "Backup contains {} entries, {} notes, {} expenses. Replace everything?",
                            pending.work_entries.len(),
                            pending.notes.len(),
                            pending.expenses.len()
                        ),
                    );
                    ui.horizontal(|ui| {
                        if ui.button("Replace All Data").clicked() {
                            confirm_replace = true;
                        }
                        if ui.button("Keep Current Data").clicked() {
                            discard_import = true;
                        }
                    });
                }

                ui.add_space(10.0);
                ui.separator();
                ui.horizontal(|ui| {
                    let valid = self.settings_form.parsed_rate().is_some();
                    if ui.add_enabled(valid, egui::Button::new("Save")).clicked() {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if let Some(i) = remove_task {
            self.settings_form.tasks.remove(i);
        }
        if add_task {
            let label = self.settings_form.new_task.trim().to_string();
            if label.is_empty() {
                self.error_message = Some("Task label must not be empty".to_string());
            } else if self.settings_form.tasks.contains(&label) {
                self.error_message = Some(format!("Task already exists: {}", label));
            } else {
                self.settings_form.tasks.push(label);
                self.settings_form.new_task.clear();
            }
        }
        if export_clicked {
            self.run_export();
        }
        if import_clicked {
            self.run_import();
        }
        if confirm_replace {
            if let Some(data) = self.settings_form.pending_import.take() {
                match self.backend.worklog_service.replace_all(data) {
                    Ok(()) => {
                        // Re-seed the form from the imported settings
                        let settings = self.backend.worklog_service.data().settings.clone();
                        self.settings_form.load(&settings);
                        self.success_message = Some("Backup imported".to_string());
                    }
                    Err(e) => self.error_message = Some(format!("Import failed: {}", e)),
                }
            }
        }
        if discard_import {
            self.settings_form.pending_import = None;
        }
        if save {
            self.apply_settings();
        }
        if cancelled || !open {
            self.show_settings_modal = false;
        }
    }

    fn apply_settings(&mut self) {
        let Some(hourly_rate) = self.settings_form.parsed_rate() else {
            return;
        };
        let settings = Settings {
            hourly_rate,
            currency: self.settings_form.currency.clone(),
            tasks: self.settings_form.tasks.clone(),
        };
        match self.backend.worklog_service.update_settings(settings) {
            Ok(()) => {
                self.success_message = Some("Settings saved".to_string());
                self.show_settings_modal = false;
            }
            Err(e) => {
                self.error_message = Some(format!("Could not save settings: {}", e));
            }
        }
    }

    fn run_export(&mut self) {
        let custom = if self.settings_form.export_path.trim().is_empty() {
            None
        } else {
            Some(self.settings_form.export_path.as_str())
        };
        match self
            .backend
            .backup_service
            .export_to_path(self.backend.worklog_service.repository(), custom)
        {
            Ok(outcome) => {
                self.success_message = Some(format!(
                    "Exported {} bytes to {}",
                    outcome.bytes_written, outcome.file_path
                ));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn run_import(&mut self) {
        let path = self.settings_form.import_path.trim().to_string();
        if path.is_empty() {
            self.error_message = Some("Enter the path to a backup file".to_string());
            return;
        }
        match self.backend.backup_service.import_from_path(Path::new(&path)) {
            Ok(data) => {
                self.settings_form.pending_import = Some(data);
                self.error_message = None;
            }
            Err(e) => {
                self.settings_form.pending_import = None;
                self.error_message = Some(format!("Import failed: {}", e));
            }
        }
    }
}
