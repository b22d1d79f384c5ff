//! # Login Module
//!
//! Password gate rendered before any work log content. The session
//! persists across restarts, so this screen only shows until the first
//! successful unlock (or after an explicit logout).

use eframe::egui;
use log::info;

use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::{ACCENT, ERROR_TEXT};

impl OpenWorkLogApp {
    /// Render the full-screen password prompt.
    pub fn render_login_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);

                ui.label(
                    egui::RichText::new("🦉 Open Work Log")
                        .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label("Enter the password to unlock your work log");
                ui.add_space(20.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.password_input)
                        .password(true)
                        .hint_text("Password")
                        .desired_width(220.0),
                );

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(12.0);

                let unlock = egui::Button::new(
                    egui::RichText::new("Unlock").color(egui::Color32::WHITE),
                )
                .fill(ACCENT)
                .min_size(egui::vec2(120.0, 32.0));

                if ui.add(unlock).clicked() || submitted {
                    self.try_login();
                }

                if let Some(error) = &self.error_message {
                    ui.add_space(10.0);
                    ui.colored_label(ERROR_TEXT, error);
                }
            });
        });
    }

    fn try_login(&mut self) {
        match self.backend.auth_service.login(&self.password_input) {
            Ok(true) => {
                info!("🔓 Unlocked");
                self.password_input.clear();
                self.clear_messages();
            }
            Ok(false) => {
                self.error_message = Some("Incorrect password".to_string());
            }
            Err(e) => {
                self.error_message = Some(format!("Login failed: {}", e));
            }
        }
    }
}
