use super::model::RestaurantDataset;

// ---------------------------------------------------------------------------
// Filter criteria: one user interaction's worth of constraints
// ---------------------------------------------------------------------------

/// The user-selected filter tuple for a single interaction.
///
/// `PartialEq` lets the UI detect when a widget actually changed something
/// and only then trigger a recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// City to match exactly.
    pub city: String,
    /// Inclusive lower bound on rating.
    pub min_rating: f64,
    /// Inclusive upper bound on cost.
    pub max_cost: f64,
}

/// A record that passed the filter, with its derived score.
///
/// Holds an index into [`RestaurantDataset::records`] rather than a copy;
/// the dataset itself is never mutated and never grows a score column.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub index: usize,
    pub score: f64,
}

/// Weight of the raw rating in the ranking score.
pub const RATING_WEIGHT: f64 = 0.7;
/// Weight of the dampened popularity term.
pub const POPULARITY_WEIGHT: f64 = 0.3;

/// Weighted ranking score: quality plus log-dampened popularity.
///
/// `ln(1 + rating_count)` gives diminishing returns for very large rating
/// counts; a record with zero ratings scores purely on its (weighted)
/// rating since `ln(1) = 0`.
pub fn score(rating: f64, rating_count: u64) -> f64 {
    rating * RATING_WEIGHT + (rating_count as f64).ln_1p() * POPULARITY_WEIGHT
}

/// Filter, score, and rank the dataset against one set of criteria.
///
/// Returns every matching record (city equal, rating at least
/// `min_rating`, cost at most `max_cost`) sorted by score descending.
/// The sort is stable, so ties keep their dataset order. An empty result
/// is a legitimate outcome, not an error; a city absent from the dataset
/// behaves exactly like any other no-match. Callers truncate as needed
/// (top 1 for the headline, top 10 for the table, top 50 for the chart).
pub fn recommend(dataset: &RestaurantDataset, criteria: &Criteria) -> Vec<ScoredRecord> {
    let mut scored: Vec<ScoredRecord> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.city == criteria.city
                && r.rating >= criteria.min_rating
                && r.cost <= criteria.max_cost
        })
        .map(|(index, r)| ScoredRecord {
            index,
            score: score(r.rating, r.rating_count),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
