//! # Calculator Renderer Module
//!
//! This module renders the calculator tab: an expression field, a button
//! pad, and the evaluation history.
//!
//! ## Key Functions:
//! - `render_calculator_tab()` - Display, button pad and history
//!
//! ## Purpose:
//! Expressions are parsed and evaluated by the calculator module in the
//! domain layer; this renderer only collects input and shows results.

use eframe::egui;

use crate::backend::domain::calculator;
use crate::ui::app_state::OpenWorkLogApp;
use crate::ui::components::styling::{CARD_BACKGROUND, MUTED_TEXT};

const BUTTON_ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

impl OpenWorkLogApp {
    /// Render the calculator tab
    pub fn render_calculator_tab(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            // Button pad and display on the left, history on the right
            ui.vertical(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.calculator.input)
                        .font(egui::FontId::new(22.0, egui::FontFamily::Monospace))
                        .hint_text("0")
                        .desired_width(240.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.evaluate_calculator_input();
                }

                ui.add_space(8.0);

                for row in BUTTON_ROWS {
                    ui.horizontal(|ui| {
                        for key in row {
                            let button = egui::Button::new(
                                egui::RichText::new(key)
                                    .font(egui::FontId::new(18.0, egui::FontFamily::Monospace)),
                            )
                            .min_size(egui::vec2(54.0, 44.0));
                            if ui.add(button).clicked() {
                                if key == "=" {
                                    self.evaluate_calculator_input();
                                } else {
                                    self.calculator.input.push_str(key);
                                }
                            }
                        }
                    });
                }
                ui.horizontal(|ui| {
                    let clear = egui::Button::new("C").min_size(egui::vec2(54.0, 44.0));
                    if ui.add(clear).clicked() {
                        self.calculator.input.clear();
                    }
                });
            });

            ui.add_space(24.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading("History");
                    if !self.calculator.history.is_empty() && ui.small_button("Clear").clicked() {
                        self.calculator.history.clear();
                    }
                });
                if self.calculator.history.is_empty() {
                    ui.colored_label(MUTED_TEXT, "No calculations yet.");
                } else {
                    egui::Frame::none()
                        .fill(CARD_BACKGROUND)
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                                // Most recent first
                                for line in self.calculator.history.iter().rev() {
                                    ui.monospace(line);
                                }
                            });
                        });
                }
            });
        });
    }

    fn evaluate_calculator_input(&mut self) {
        match calculator::evaluate(&self.calculator.input) {
            Ok(result) => {
                self.calculator
                    .history
                    .push(format!("{} = {}", self.calculator.input.trim(), result));
                self.calculator.input = result.to_string();
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(format!("Calculation error: {}", e));
            }
        }
    }
}
