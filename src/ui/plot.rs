use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::AppState;

/// How many ranked records the scatter chart shows.
const CHART_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// Rating-vs-cost scatter (bottom of the central panel)
// ---------------------------------------------------------------------------

/// Scatter the top-ranked records: x = cost, y = rating, point size from
/// the log-dampened rating count, colour and legend by cuisine.
pub fn scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    if state.ranked.is_empty() {
        return;
    }

    Plot::new("rating_cost_scatter")
        .legend(Legend::default())
        .x_axis_label("Cost")
        .y_axis_label("Rating")
        .height(ui.available_height())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for scored in state.ranked.iter().take(CHART_LIMIT) {
                let r = &dataset.records[scored.index];

                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&r.cuisine))
                    .unwrap_or(Color32::LIGHT_BLUE);

                // Legend entries merge by name, so one Points per record
                // still yields one legend row per cuisine.
                let name = if r.cuisine.is_empty() {
                    "other"
                } else {
                    r.cuisine.as_str()
                };

                let radius = 2.5 + (r.rating_count as f64).ln_1p() as f32 * 0.9;

                let points: PlotPoints = vec![[r.cost, r.rating]].into();
                plot_ui.points(
                    Points::new(points)
                        .name(name)
                        .color(color)
                        .radius(radius)
                        .filled(true),
                );
            }
        });
}
