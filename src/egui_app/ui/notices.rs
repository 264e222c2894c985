use eframe::egui::{self, Align2, RichText};

use super::EguiApp;
use super::buttons;
use super::style;
use crate::egui_app::controller::{ABOUT_TEXT, ABOUT_TITLE};
use crate::egui_app::state::NoticeLevel;

impl EguiApp {
    /// Modal notice with an OK button; closing it in any way dismisses it.
    ///
    /// Enter only dismisses a notice that was already on screen in an earlier
    /// pass, so the key press that raised it cannot also close it.
    pub(super) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.ui.notice.clone() else {
            self.shown_notice = None;
            return;
        };
        let pass = ctx.cumulative_pass_nr();
        let first_pass = match &self.shown_notice {
            Some((first, shown)) if *shown == notice => *first,
            _ => {
                self.shown_notice = Some((pass, notice.clone()));
                pass
            }
        };
        let palette = style::palette();
        let color = match notice.level {
            NoticeLevel::Info => palette.text,
            NoticeLevel::Warning => palette.warning,
            NoticeLevel::Error => palette.error,
        };
        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_window"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(RichText::new(&notice.message).color(color));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.add(buttons::action_button("OK")).clicked() {
                        acknowledged = true;
                    }
                });
            });
        let enter = first_pass < pass && ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if !open || acknowledged || enter {
            self.controller.dismiss_notice();
            self.shown_notice = None;
        }
    }

    pub(super) fn render_about(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.about_open {
            return;
        }
        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new(ABOUT_TITLE)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(ABOUT_TEXT);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    acknowledged = ui.add(buttons::action_button("OK")).clicked();
                });
            });
        if !open || acknowledged {
            self.controller.close_about();
        }
    }
}
