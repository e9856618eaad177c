use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::{AppState, MIN_COST_BOUND};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: city selector, rating and budget sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (cities, cost_ceiling) = match &state.dataset {
        Some(ds) => (ds.cities.clone(), ds.max_cost.max(MIN_COST_BOUND)),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let before = state.criteria.clone();

    // ---- City selector ----
    ui.strong("City");
    egui::ComboBox::from_id_salt("city_select")
        .selected_text(state.criteria.city.clone())
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            for city in &cities {
                if ui
                    .selectable_label(state.criteria.city == *city, city)
                    .clicked()
                {
                    state.criteria.city = city.clone();
                }
            }
        });
    ui.add_space(8.0);

    // ---- Minimum rating ----
    ui.strong("Minimum rating");
    ui.add(
        Slider::new(&mut state.criteria.min_rating, 0.0..=5.0)
            .step_by(0.1)
            .fixed_decimals(1),
    );
    ui.add_space(8.0);

    // ---- Maximum cost ----
    ui.strong("Max cost");
    ui.add(
        Slider::new(&mut state.criteria.max_cost, MIN_COST_BOUND..=cost_ceiling)
            .integer()
            .suffix(" ₹"),
    );

    // Recompute only when a widget actually changed something.
    if state.criteria != before {
        state.rerank();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} restaurants loaded, {} matching",
                ds.len(),
                state.ranked.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open restaurant data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} restaurants across {} cities",
                    dataset.len(),
                    dataset.cities.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
