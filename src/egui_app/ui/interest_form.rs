use eframe::egui::{self, RichText};

use super::EguiApp;
use super::buttons;
use super::style;
use crate::interests::{INTEREST_GROUPS, interest_index};

const GRID_COLUMNS: usize = 3;

impl EguiApp {
    pub(super) fn render_interest_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Course Recommendation System")
                    .size(24.0)
                    .strong()
                    .color(palette.accent),
            );
            ui.label(
                RichText::new(
                    "Select your interests in each category to get personalized \
                     course recommendations",
                )
                .color(palette.text_muted),
            );
        });
        ui.add_space(12.0);
        self.render_group_tabs(ui);
        ui.add_space(6.0);
        egui::Frame::new()
            .fill(palette.surface)
            .stroke(style::section_stroke())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_height(220.0);
                self.render_group_checkboxes(ui);
            });
        ui.add_space(12.0);
        self.render_actions(ui);
        ui.add_space(12.0);
        self.render_result(ui);
    }

    fn render_group_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (index, group) in INTEREST_GROUPS.iter().enumerate() {
                let selected = self.controller.ui.form.active_tab == index;
                if ui.selectable_label(selected, group.title).clicked() {
                    self.controller.select_tab(index);
                }
            }
        });
    }

    fn render_group_checkboxes(&mut self, ui: &mut egui::Ui) {
        let Some(group) = INTEREST_GROUPS.get(self.controller.ui.form.active_tab) else {
            return;
        };
        egui::Grid::new(("interest_grid", group.title))
            .num_columns(GRID_COLUMNS)
            .spacing([24.0, 10.0])
            .show(ui, |ui| {
                for (position, name) in group.members.iter().enumerate() {
                    let Some(index) = interest_index(name) else {
                        continue;
                    };
                    let mut checked = self.controller.ui.form.selection.is_active(index);
                    if ui.checkbox(&mut checked, *name).changed() {
                        self.controller.set_interest(index, checked);
                    }
                    if (position + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.add(buttons::action_button("Select All")).clicked() {
                self.controller.select_all();
            }
            if ui.add(buttons::action_button("Clear All")).clicked() {
                self.controller.clear_all();
            }
            ui.add_space(12.0);
            if ui
                .add(buttons::primary_button("Get Recommendation"))
                .clicked()
            {
                self.controller.request_recommendation();
            }
        });
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let result = &self.controller.ui.result;
        let text = if result.course.is_some() {
            RichText::new(&result.text).size(16.0).color(palette.accent)
        } else {
            RichText::new(&result.text).size(16.0).color(palette.text_muted)
        };
        egui::Frame::new()
            .fill(palette.surface)
            .stroke(style::section_stroke())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(text);
                });
            });
    }
}
