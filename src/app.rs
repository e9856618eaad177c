use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlatefulApp {
    pub state: AppState,
}

impl PlatefulApp {
    /// Start with an already-initialised state (e.g. a dataset preloaded
    /// from the command line).
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }
}

impl Default for PlatefulApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for PlatefulApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: headline, table, scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::central(ui, &self.state);
        });
    }
}
