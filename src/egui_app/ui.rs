//! egui renderer for the application UI.

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::Notice;
use eframe::egui;

mod buttons;
mod interest_form;
mod menu_bar;
mod notices;
mod status_bar;
pub mod style;

/// Smallest window that still fits the form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 560.0);
/// Initial window size.
pub const DEFAULT_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(1000.0, 800.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Notice on screen and the pass it first appeared in.
    shown_notice: Option<(u64, Notice)>,
}

impl EguiApp {
    /// Create the app: load settings, then load or auto-train the model.
    pub fn new() -> Result<Self, String> {
        let config = EguiController::load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        let working_dir = std::env::current_dir()
            .map_err(|err| format!("Failed to resolve working directory: {err}"))?;
        let mut controller = EguiController::new(&config, &working_dir);
        controller.resolve_startup_model();
        Ok(Self::with_controller(controller))
    }

    fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
            shown_notice: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_menu_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(style::palette().background)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                self.render_interest_form(ui);
            });
        self.render_notice(ctx);
        self.render_about(ctx);
    }
}
