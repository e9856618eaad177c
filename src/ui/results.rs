use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::ui::plot;

/// How many rows the recommendation table shows.
const TABLE_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Central panel – headline, table, scatter
// ---------------------------------------------------------------------------

/// Render the central results panel for the current ranking.
pub fn central(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a restaurant dataset to begin  (File → Open…)");
            });
            return;
        }
    };

    ui.heading(format!("Best food picks in {}", state.criteria.city));
    ui.add_space(4.0);

    // Empty result is expected, not an error; never index into it.
    if state.ranked.is_empty() {
        ui.label(
            RichText::new("No restaurants match your filters. Try adjusting rating or budget.")
                .italics(),
        );
        return;
    }

    // ---- Headline: the single top pick ----
    let top = &dataset.records[state.ranked[0].index];
    ui.columns(3, |cols: &mut [Ui]| {
        cols[0].vertical(|ui: &mut Ui| {
            ui.label("Restaurant");
            ui.strong(RichText::new(&top.name).size(20.0));
        });
        cols[1].vertical(|ui: &mut Ui| {
            ui.label("Rating");
            ui.strong(RichText::new(format!("{:.1} ★", top.rating)).size(20.0));
        });
        cols[2].vertical(|ui: &mut Ui| {
            ui.label("Cost");
            ui.strong(RichText::new(format!("₹{:.0}", top.cost)).size(20.0));
        });
    });
    ui.add_space(8.0);
    ui.separator();

    // ---- Top 10 table ----
    ui.strong(format!("Top {} recommendations", TABLE_LIMIT.min(state.ranked.len())));
    ui.add_space(4.0);
    recommendation_table(ui, state);

    ui.add_space(8.0);
    ui.separator();

    // ---- Scatter chart fills the remaining height ----
    plot::scatter(ui, state);
}

fn recommendation_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Name", "Cuisine", "Rating", "Ratings", "Cost", "Score"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for scored in state.ranked.iter().take(TABLE_LIMIT) {
                let r = &dataset.records[scored.index];
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.name);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(if r.cuisine.is_empty() {
                            "—"
                        } else {
                            r.cuisine.as_str()
                        });
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", r.rating));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", r.rating_count));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("₹{:.0}", r.cost));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.3}", scored.score));
                    });
                });
            }
        });
}
