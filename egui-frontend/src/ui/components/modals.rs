//! # Modals Module
//!
//! This module contains the record form modals: work entry, note and
//! expense. Each modal doubles as the edit form for its record type.
//!
//! ## Key Functions:
//! - `render_work_entry_modal()` - Create/edit work entries
//! - `render_note_modal()` - Create/edit notes
//! - `render_expense_modal()` - Create/edit expenses
//!
//! ## Purpose:
//! Forms keep their text as raw strings and only parse on submit; the
//! submit button stays disabled until the current values would pass the
//! record store's validation. Edits carry the original creation timestamp
//! through unchanged.

use chrono::Utc;
use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{Expense, NewExpense, NewNote, NewWorkEntry, Note, WorkEntry};

use crate::ui::app_state::OpenWorkLogApp;

impl OpenWorkLogApp {
    /// Render the work entry create/edit modal
    pub fn render_work_entry_modal(&mut self, ctx: &egui::Context) {
        if !self.show_work_entry_modal {
            return;
        }

        let tasks = self.backend.worklog_service.data().settings.tasks.clone();
        let editing = self.work_entry_form.editing_id.is_some();
        let title = if editing { "Edit Work Entry" } else { "Log Work" };

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(340.0);

                egui::Grid::new("work_entry_form")
                    .num_columns(2)
                    .spacing(egui::vec2(12.0, 10.0))
                    .show(ui, |ui| {
                        ui.label("Date:");
                        ui.add(
                            DatePickerButton::new(&mut self.work_entry_form.date)
                                .id_source("work_entry_date"),
                        );
                        ui.end_row();

                        ui.label("Hours:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.work_entry_form.hours)
                                .hint_text("e.g. 2.5")
                                .desired_width(100.0),
                        );
                        ui.end_row();

                        ui.label("Task:");
                        egui::ComboBox::from_id_source("work_entry_task")
                            .selected_text(if self.work_entry_form.task.is_empty() {
                                "Select task".to_string()
                            } else {
                                self.work_entry_form.task.clone()
                            })
                            .show_ui(ui, |ui| {
                                for task in &tasks {
                                    ui.selectable_value(
                                        &mut self.work_entry_form.task,
                                        task.clone(),
                                        task,
                                    );
                                }
                            });
                        ui.end_row();
                    });

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.work_entry_form.description)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let valid = self.work_entry_form.is_valid();
                    let label = if editing { "Save" } else { "Add Entry" };
                    let response = ui.add_enabled(valid, egui::Button::new(label));
                    if response.clicked() {
                        submitted = true;
                    }
                    if !valid {
                        response.on_hover_text("Fill in hours, task and description");
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.submit_work_entry_form();
        }
        if cancelled || !open {
            self.work_entry_form.clear();
            self.show_work_entry_modal = false;
        }
    }

    fn submit_work_entry_form(&mut self) {
        // is_valid gated the submit button, so parse cannot fail here
        let Some(hours) = self.work_entry_form.parsed_hours() else {
            return;
        };

        let result = match &self.work_entry_form.editing_id {
            Some(id) => self.backend.worklog_service.update_work_entry(WorkEntry {
                id: id.clone(),
                date: self.work_entry_form.date,
                hours,
                task: self.work_entry_form.task.trim().to_string(),
                description: self.work_entry_form.description.trim().to_string(),
                created_at: self.work_entry_form.created_at.unwrap_or_else(Utc::now),
            }),
            None => self
                .backend
                .worklog_service
                .add_work_entry(NewWorkEntry {
                    date: self.work_entry_form.date,
                    hours,
                    task: self.work_entry_form.task.trim().to_string(),
                    description: self.work_entry_form.description.trim().to_string(),
                })
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.success_message = Some("Work entry saved".to_string());
                self.work_entry_form.clear();
                self.show_work_entry_modal = false;
            }
            Err(e) => {
                self.error_message = Some(format!("Could not save work entry: {}", e));
            }
        }
    }

    /// Render the note create/edit modal
    pub fn render_note_modal(&mut self, ctx: &egui::Context) {
        if !self.show_note_modal {
            return;
        }

        let editing = self.note_form.editing_id.is_some();
        let title = if editing { "Edit Note" } else { "Add Note" };

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(340.0);

                ui.horizontal(|ui| {
                    ui.label("Date:");
                    ui.add(DatePickerButton::new(&mut self.note_form.date).id_source("note_date"));
                });
                ui.horizontal(|ui| {
                    ui.label("Title:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.note_form.title)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.label("Content:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.note_form.content)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let valid = self.note_form.is_valid();
                    let label = if editing { "Save" } else { "Add Note" };
                    if ui.add_enabled(valid, egui::Button::new(label)).clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.submit_note_form();
        }
        if cancelled || !open {
            self.note_form.clear();
            self.show_note_modal = false;
        }
    }

    fn submit_note_form(&mut self) {
        let result = match &self.note_form.editing_id {
            Some(id) => self.backend.worklog_service.update_note(Note {
                id: id.clone(),
                date: self.note_form.date,
                title: self.note_form.title.trim().to_string(),
                content: self.note_form.content.trim().to_string(),
                created_at: self.note_form.created_at.unwrap_or_else(Utc::now),
            }),
            None => self
                .backend
                .worklog_service
                .add_note(NewNote {
                    date: self.note_form.date,
                    title: self.note_form.title.trim().to_string(),
                    content: self.note_form.content.trim().to_string(),
                })
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.success_message = Some("Note saved".to_string());
                self.note_form.clear();
                self.show_note_modal = false;
            }
            Err(e) => {
                self.error_message = Some(format!("Could not save note: {}", e));
            }
        }
    }

    /// Render the expense create/edit modal
    pub fn render_expense_modal(&mut self, ctx: &egui::Context) {
        if !self.show_expense_modal {
            return;
        }

        let currency = self
            .backend
            .worklog_service
            .data()
            .settings
            .currency
            .clone();
        let editing = self.expense_form.editing_id.is_some();
        let title = if editing { "Edit Expense" } else { "Add Expense" };

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(340.0);

                egui::Grid::new("expense_form")
                    .num_columns(2)
                    .spacing(egui::vec2(12.0, 10.0))
                    .show(ui, |ui| {
                        ui.label("Date:");
                        ui.add(
                            DatePickerButton::new(&mut self.expense_form.date)
                                .id_source("expense_date"),
                        );
                        ui.end_row();

                        ui.label("Amount:");
                        ui.horizontal(|ui| {
                            ui.label(&currency);
                            ui.add(
                                egui::TextEdit::singleline(&mut self.expense_form.amount)
                                    .hint_text("0.00")
                                    .desired_width(100.0),
                            );
                        });
                        ui.end_row();

                        ui.label("Category:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.expense_form.category)
                                .hint_text("e.g. Software")
                                .desired_width(160.0),
                        );
                        ui.end_row();
                    });

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.expense_form.description)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let valid = self.expense_form.is_valid();
                    let label = if editing { "Save" } else { "Add Expense" };
                    if ui.add_enabled(valid, egui::Button::new(label)).clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.submit_expense_form();
        }
        if cancelled || !open {
            self.expense_form.clear();
            self.show_expense_modal = false;
        }
    }

    fn submit_expense_form(&mut self) {
        let Some(amount) = self.expense_form.parsed_amount() else {
            return;
        };

        let result = match &self.expense_form.editing_id {
            Some(id) => self.backend.worklog_service.update_expense(Expense {
                id: id.clone(),
                date: self.expense_form.date,
                description: self.expense_form.description.trim().to_string(),
                amount,
                category: self.expense_form.category.trim().to_string(),
                created_at: self.expense_form.created_at.unwrap_or_else(Utc::now),
            }),
            None => self
                .backend
                .worklog_service
                .add_expense(NewExpense {
                    date: self.expense_form.date,
                    description: self.expense_form.description.trim().to_string(),
                    amount,
                    category: self.expense_form.category.trim().to_string(),
                })
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.success_message = Some("Expense saved".to_string());
                self.expense_form.clear();
                self.show_expense_modal = false;
            }
            Err(e) => {
                self.error_message = Some(format!("Could not save expense: {}", e));
            }
        }
    }
}
