//! egui renderer for the dashboard UI.

mod charts;
mod form;
pub mod style;

use eframe::egui::{self, Frame, RichText};

use crate::config;
use crate::egui_app::controller::DashboardController;

/// Smallest window the layout stays readable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 600.0);

/// Renders the dashboard using the shared controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app from persisted configuration and start the initial
    /// stats fetch.
    pub fn new() -> Result<Self, String> {
        let config =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        config
            .api
            .checked_base_url()
            .map_err(|err| err.to_string())?;
        let mut controller = DashboardController::new(config);
        controller.refresh_stats();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.bg_tertiary))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Sentiment Dashboard")
                            .color(palette.text_primary)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(20.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        self.render_top_bar(ctx);
        egui::SidePanel::left("comment_form")
            .resizable(false)
            .min_width(300.0)
            .max_width(340.0)
            .show(ctx, |ui| self.render_comment_form(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_stats_panels(ui);
        });
        self.render_status(ctx);
        ctx.request_repaint();
    }
}
