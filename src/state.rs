use crate::color::ColorMap;
use crate::data::model::RestaurantDataset;
use crate::data::recommend::{Criteria, ScoredRecord, recommend};

/// Slider defaults matching the dashboard's initial view.
const DEFAULT_MIN_RATING: f64 = 4.0;
const DEFAULT_MAX_COST: f64 = 500.0;
/// Budget slider lower bound.
pub const MIN_COST_BOUND: f64 = 100.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Immutable once set;
    /// replaced wholesale when the user opens another file.
    pub dataset: Option<RestaurantDataset>,

    /// Current filter criteria, recreated from defaults on every load.
    pub criteria: Criteria,

    /// Ranking for the current criteria (cached until criteria change).
    pub ranked: Vec<ScoredRecord>,

    /// Cuisine → colour mapping for the scatter chart.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: Criteria {
                city: String::new(),
                min_rating: DEFAULT_MIN_RATING,
                max_cost: DEFAULT_MAX_COST,
            },
            ranked: Vec::new(),
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset criteria to defaults, rebuild
    /// the colour map, and compute the initial ranking.
    pub fn set_dataset(&mut self, dataset: RestaurantDataset) {
        self.criteria = Criteria {
            // Loader guarantees a non-empty dataset, hence at least one city.
            city: dataset.cities.first().cloned().unwrap_or_default(),
            min_rating: DEFAULT_MIN_RATING,
            max_cost: DEFAULT_MAX_COST.clamp(MIN_COST_BOUND, dataset.max_cost.max(MIN_COST_BOUND)),
        };
        self.color_map = Some(ColorMap::new(&dataset.cuisines));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.rerank();
    }

    /// Recompute the ranking after a criteria change.  One synchronous
    /// pass; the previous result is simply discarded.
    pub fn rerank(&mut self) {
        self.ranked = match &self.dataset {
            Some(ds) => recommend(ds, &self.criteria),
            None => Vec::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Restaurant;

    fn dataset() -> RestaurantDataset {
        RestaurantDataset::from_records(vec![
            Restaurant {
                name: "Spice Villa".to_string(),
                city: "Pune".to_string(),
                cuisine: "North Indian".to_string(),
                rating: 4.3,
                rating_count: 523,
                cost: 350.0,
            },
            Restaurant {
                name: "Corner Dosa".to_string(),
                city: "Agra".to_string(),
                cuisine: "South Indian".to_string(),
                rating: 4.6,
                rating_count: 8_000,
                cost: 150.0,
            },
        ])
    }

    #[test]
    fn set_dataset_selects_first_city_and_ranks() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.criteria.city, "Agra");
        assert_eq!(state.ranked.len(), 1);
        assert!(state.color_map.is_some());
    }

    #[test]
    fn default_budget_is_clamped_to_dataset_range() {
        let mut state = AppState::default();
        let mut ds = dataset();
        ds.max_cost = 220.0;
        state.set_dataset(ds);
        assert_eq!(state.criteria.max_cost, 220.0);
    }

    #[test]
    fn rerank_follows_criteria_changes() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.criteria.city = "Pune".to_string();
        state.rerank();
        assert_eq!(state.ranked.len(), 1);
        assert_eq!(
            state.dataset.as_ref().unwrap().records[state.ranked[0].index].name,
            "Spice Villa"
        );

        state.criteria.max_cost = 100.0;
        state.rerank();
        assert!(state.ranked.is_empty());
    }
}
