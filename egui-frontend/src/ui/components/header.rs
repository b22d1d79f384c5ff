//! # Header Module
//!
//! This module handles rendering the application header: title, tab
//! navigation, and the settings/logout buttons on the right.
//!
//! ## Key Functions:
//! - `render_header()` - Title, tab buttons, settings gear and logout
//! - `render_messages()` - Success/error message display

use eframe::egui;

use crate::ui::app_state::{MainTab, OpenWorkLogApp};
use crate::ui::components::styling::{ERROR_TEXT, SUCCESS_TEXT};

impl OpenWorkLogApp {
    /// Render the header row
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("🦉 Open Work Log")
                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                        .strong(),
                )
                .selectable(false),
            );

            ui.add_space(20.0);

            ui.selectable_value(&mut self.current_tab, MainTab::Dashboard, "Dashboard");
            ui.selectable_value(&mut self.current_tab, MainTab::Calendar, "Calendar");
            ui.selectable_value(&mut self.current_tab, MainTab::Entries, "Entries");
            ui.selectable_value(&mut self.current_tab, MainTab::Calculator, "Calculator");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    if let Err(e) = self.backend.auth_service.logout() {
                        self.error_message = Some(format!("Logout failed: {}", e));
                    }
                }
                if ui.button("⚙").on_hover_text("Settings").clicked() {
                    self.open_settings_modal();
                }
            });
        });
    }

    /// Render error and success messages
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;
        if let Some(error) = &self.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(ERROR_TEXT, format!("❌ {}", error));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }
        if let Some(success) = &self.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(SUCCESS_TEXT, format!("✅ {}", success));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }
        if dismissed {
            self.clear_messages();
        }
    }
}
