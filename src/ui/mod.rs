/// Presentation layer: panels, result views, and the scatter chart.
///
/// Everything here reads from [`crate::state::AppState`] and calls back
/// into it for criteria changes; the data layer stays UI-free.

pub mod panels;
pub mod plot;
pub mod results;
