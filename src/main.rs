mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PlatefulApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional positional argument: a dataset to load at startup.
    let mut state = AppState::default();
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Preloaded {} restaurants from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                // Keep the window alive: the user can recover via File → Open.
                log::error!("Failed to load {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Plateful – Restaurant Recommendations",
        options,
        Box::new(|_cc| Ok(Box::new(PlatefulApp::with_state(state)))),
    )
}
