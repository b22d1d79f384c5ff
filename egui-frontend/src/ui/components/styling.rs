//! # Styling Module
//!
//! Global egui styling and small color helpers shared by the renderers.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `color_from_hex()` - Convert domain palette hex strings to Color32
//!
//! ## Purpose:
//! The domain layer hands out task colors as `#rrggbb` strings so it stays
//! UI-agnostic; this module is where those strings become egui colors.

use eframe::egui;

/// Accent used for primary buttons and the active tab
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
/// Card background for dashboard stat cards and calendar cells
pub const CARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
/// Weekend tint for calendar cells
pub const WEEKEND_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(238, 242, 248);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(22, 140, 70);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);

/// Setup global UI styling for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.button_frame = true;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Parse a `#rrggbb` palette string into a Color32. Unparseable input
/// falls back to gray rather than panicking mid-frame.
pub fn color_from_hex(hex: &str) -> egui::Color32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return egui::Color32::GRAY;
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) => egui::Color32::from_rgb(r, g, b),
        _ => egui::Color32::GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex_parses_palette_entries() {
        assert_eq!(color_from_hex("#2563eb"), egui::Color32::from_rgb(0x25, 0x63, 0xeb));
        assert_eq!(color_from_hex("0ea5e9"), egui::Color32::from_rgb(0x0e, 0xa5, 0xe9));
    }

    #[test]
    fn test_color_from_hex_falls_back_on_garbage() {
        assert_eq!(color_from_hex("#xyzxyz"), egui::Color32::GRAY);
        assert_eq!(color_from_hex("#fff"), egui::Color32::GRAY);
        assert_eq!(color_from_hex(""), egui::Color32::GRAY);
    }
}
