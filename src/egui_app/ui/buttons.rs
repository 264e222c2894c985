use eframe::egui::{self, RichText};

use super::style;

pub(super) fn action_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(label).color(style::palette().text))
}

/// Filled button for the main call to action.
pub(super) fn primary_button(label: &str) -> egui::Button<'_> {
    let palette = style::palette();
    egui::Button::new(RichText::new(label).color(egui::Color32::WHITE).strong())
        .fill(palette.primary)
        .min_size(egui::vec2(160.0, 32.0))
}
