//! # UI Components Module
//!
//! This module organizes all UI components for the work log application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, colors, and theme management
//! - `login` - Password gate screen
//! - `header` - Application header with tab navigation and settings/logout
//! - `dashboard_renderer` - Summary cards, quick actions and activity feed
//! - `calendar_renderer` - Month/week calendar rendering with entry chips
//! - `entries_renderer` - Work entry table view
//! - `calculator_renderer` - Built-in calculator tab
//! - `modals` - Work entry / note / expense form modals and day detail
//! - `settings` - Settings modal including backup and restore

pub mod calculator_renderer;
pub mod calendar_renderer;
pub mod dashboard_renderer;
pub mod entries_renderer;
pub mod header;
pub mod login;
pub mod modals;
pub mod settings;
pub mod styling;

pub use styling::{color_from_hex, setup_app_style};
