use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub outline: Color32,
    pub warning: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        primary: Color32::from_rgb(0x21, 0x96, 0xF3),
        secondary: Color32::from_rgb(0x64, 0xB5, 0xF6),
        background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
        surface: Color32::WHITE,
        text: Color32::from_rgb(0x21, 0x21, 0x21),
        text_muted: Color32::from_rgb(0x75, 0x75, 0x75),
        accent: Color32::from_rgb(0x19, 0x76, 0xD2),
        outline: Color32::from_rgb(0xDD, 0xDD, 0xDD),
        warning: Color32::from_rgb(0xF5, 0x7C, 0x00),
        error: Color32::from_rgb(0xD3, 0x2F, 0x2F),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.background;
    visuals.override_text_color = Some(palette.text);
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.background;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.secondary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    set_widget(&mut visuals.widgets.inactive, palette.surface, palette);
    set_widget(&mut visuals.widgets.hovered, palette.secondary, palette);
    set_widget(&mut visuals.widgets.active, palette.accent, palette);
    set_widget(&mut visuals.widgets.open, palette.secondary, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_widget(vis: &mut WidgetVisuals, fill: Color32, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_fill = fill;
    vis.weak_bg_fill = fill;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text);
}

/// Badge color for the footer status.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.outline,
        StatusTone::Busy => palette.secondary,
        StatusTone::Info => palette.primary,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().outline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_distinguish_problems() {
        assert_ne!(
            status_badge_color(StatusTone::Warning),
            status_badge_color(StatusTone::Error)
        );
        assert_eq!(status_badge_color(StatusTone::Info), palette().primary);
    }
}
