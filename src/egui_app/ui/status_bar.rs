use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use super::EguiApp;
use super::style;
use crate::recommender::ModelStatus;

impl EguiApp {
    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.surface)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 2.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        2.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let training = &self.controller.ui.training;
                        let model_label = match training.model_status {
                            ModelStatus::Loaded => "Model ready",
                            ModelStatus::NoModel => "No model",
                        };
                        ui.label(RichText::new(model_label).color(palette.text_muted));
                        if let Some(summary) = &training.summary {
                            ui.separator();
                            let color = if summary.catalog_drift > 0 {
                                palette.warning
                            } else {
                                palette.text_muted
                            };
                            ui.label(RichText::new(summary.describe()).color(color));
                        }
                    });
                });
            });
    }
}
