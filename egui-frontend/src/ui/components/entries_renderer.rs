//! # Entries Renderer Module
//!
//! This module renders the entries tab: the full work entry table plus the
//! notes and expenses lists, each with edit and delete controls.
//!
//! ## Key Functions:
//! - `render_entries_tab()` - Tab layout with the three record sections
//! - `render_work_entry_table()` - Date-descending work entry table
//!
//! ## Purpose:
//! The calendar shows entries in context; this tab is the flat management
//! view where every stored record can be reached.

use eframe::egui;
use shared::{Expense, Note, WorkEntry};

use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::MUTED_TEXT;

impl OpenWorkLogApp {
    /// Render the entries tab
    pub fn render_entries_tab(&mut self, ui: &mut egui::Ui) {
        let data = self.backend.worklog_service.data();
        let mut entries = data.work_entries.clone();
        let notes = data.notes.clone();
        let expenses = data.expenses.clone();
        let currency = data.settings.currency.clone();

        entries.sort_by(|a, b| b.date.cmp(&a.date));

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Work Entries");
            self.render_work_entry_table(ui, &entries);

            ui.add_space(16.0);
            ui.heading("Notes");
            self.render_notes_list(ui, &notes);

            ui.add_space(16.0);
            ui.heading("Expenses");
            self.render_expenses_list(ui, &expenses, &currency);
        });
    }

    fn render_work_entry_table(&mut self, ui: &mut egui::Ui, entries: &[WorkEntry]) {
        if entries.is_empty() {
            ui.colored_label(MUTED_TEXT, "No work entries yet.");
            return;
        }

        let mut edit_entry = None;
        let mut delete_id = None;

        egui::Grid::new("work_entry_table")
            .num_columns(5)
            .striped(true)
            .spacing(egui::vec2(16.0, 6.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Date").strong());
                ui.label(egui::RichText::new("Hours").strong());
                ui.label(egui::RichText::new("Task").strong());
                ui.label(egui::RichText::new("Description").strong());
                ui.label("");
                ui.end_row();

                for entry in entries {
                    ui.label(entry.date.format("%Y-%m-%d").to_string());
                    ui.label(format!("{:.1}", entry.hours));
                    ui.label(&entry.task);
                    ui.label(&entry.description);
                    ui.horizontal(|ui| {
                        if ui.small_button("✏").clicked() {
                            edit_entry = Some(entry.clone());
                        }
                        if ui.small_button("🗑").clicked() {
                            delete_id = Some(entry.id.clone());
                        }
                    });
                    ui.end_row();
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
    }

    fn render_notes_list(&mut self, ui: &mut egui::Ui, notes: &[Note]) {
        if notes.is_empty() {
            ui.colored_label(MUTED_TEXT, "No notes yet.");
            return;
        }

        let mut edit_note = None;
        let mut delete_id = None;

        for note in notes {
            ui.horizontal(|ui| {
                ui.label(note.date.format("%Y-%m-%d").to_string());
                ui.label(egui::RichText::new(&note.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").clicked() {
                        delete_id = Some(note.id.clone());
                    }
                    if ui.small_button("✏").clicked() {
                        edit_note = Some(note.clone());
                    }
                });
            });
            ui.colored_label(MUTED_TEXT, &note.content);
            ui.separator();
        }

        if let Some(note) = edit_note {
            self.note_form.load(&note);
            self.show_note_modal = true;
        }
        if let Some(id) = delete_id {
            match self.backend.worklog_service.delete_note(&id) {
                Ok(_) => self.success_message = Some("Note deleted".to_string()),
                Err(e) => self.error_message = Some(format!("Delete failed: {}", e)),
            }
        }
    }

    fn render_expenses_list(&mut self, ui: &mut egui::Ui, expenses: &[Expense], currency: &str) {
        if expenses.is_empty() {
            ui.colored_label(MUTED_TEXT, "No expenses yet.");
            return;
        }

        let mut edit_expense = None;
        let mut delete_id = None;

        egui::Grid::new("expense_table")
            .num_columns(5)
            .striped(true)
            .spacing(egui::vec2(16.0, 6.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Date").strong());
                ui.label(egui::RichText::new("Amount").strong());
                ui.label(egui::RichText::new("Category").strong());
                ui.label(egui::RichText::new("Description").strong());
                ui.label("");
                ui.end_row();

                for expense in expenses {
                    ui.label(expense.date.format("%Y-%m-%d").to_string());
                    ui.label(format!("{}{:.2}", currency, expense.amount));
                    ui.label(&expense.category);
                    ui.label(&expense.description);
                    ui.horizontal(|ui| {
                        if ui.small_button("✏").clicked() {
                            edit_expense = Some(expense.clone());
                        }
                        if ui.small_button("🗑").clicked() {
                            delete_id = Some(expense.id.clone());
                        }
                    });
                    ui.end_row();
                }
            });

        if let Some(expense) = edit_expense {
            self.expense_form.load(&expense);
            self.show_expense_modal = true;
        }
        if let Some(id) = delete_id {
            match self.backend.worklog_service.delete_expense(&id) {
                Ok(_) => self.success_message = Some("Expense deleted".to_string()),
                Err(e) => self.error_message = Some(format!("Delete failed: {}", e)),
            }
        }
    }
}
