use eframe::egui;

use super::EguiApp;
use super::buttons;

impl EguiApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add(buttons::action_button("Load Data & Train Model..."))
                        .clicked()
                    {
                        ui.close();
                        self.controller.load_data_and_train();
                    }
                    ui.separator();
                    if ui.add(buttons::action_button("Exit")).clicked() {
                        ui.close();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.add(buttons::action_button("About")).clicked() {
                        ui.close();
                        self.controller.show_about();
                    }
                });
            });
        });
    }
}
