//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//!
//! ## Application Flow:
//! 1. Set up global styling
//! 2. Gate on authentication (password screen until unlocked)
//! 3. Render header with tab navigation
//! 4. Render the active tab's content
//! 5. Render any active modals on top
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::{MainTab, OpenWorkLogApp};
use crate::ui::components::styling::setup_app_style;

impl eframe::App for OpenWorkLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Everything behind the password gate
        if !self.backend.auth_service.is_authenticated() {
            self.render_login_screen(ctx);
            return;
        }

        // Keep repainting while a message is shown so it can be dismissed
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            self.render_messages(ui);

            match self.current_tab {
                MainTab::Dashboard => self.render_dashboard(ui),
                MainTab::Calendar => self.render_calendar_tab(ui),
                MainTab::Entries => self.render_entries_tab(ui),
                MainTab::Calculator => self.render_calculator_tab(ui),
            }
        });

        // Modals render above the central panel
        self.render_work_entry_modal(ctx);
        self.render_note_modal(ctx);
        self.render_expense_modal(ctx);
        self.render_settings_modal(ctx);
        self.render_day_detail_window(ctx);
    }
}
