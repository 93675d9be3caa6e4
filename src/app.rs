use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatVizApp {
    pub state: AppState,
}

impl HeatVizApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HeatVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The repaint timer drives the animation: advance when the frame
        // interval has elapsed, then schedule the next wake-up.
        self.state.advance_if_due();

        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Right side panel: color bar ----
        egui::SidePanel::right("colorbar_panel")
            .default_width(90.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::colorbar_panel(ui, &self.state);
            });

        // ---- Central panel: animated scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::temperature_plot(ui, &self.state);
        });

        ctx.request_repaint_after(self.state.time_until_next_frame());
    }
}
