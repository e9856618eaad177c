use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Restaurant – one row of the source table
// ---------------------------------------------------------------------------

/// A single cleaned restaurant record (one row of the source table).
///
/// The loader guarantees `name` and `city` are non-empty, `cost` is
/// non-negative, and `rating_count` parsed as a non-negative integer, so
/// scoring never sees an invalid row.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub city: String,
    /// Descriptive only; may be empty. Used for chart coloring.
    pub cuisine: String,
    /// Expected range 0.0–5.0.
    pub rating: f64,
    pub rating_count: u64,
    /// Approximate cost for two, in currency units.
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// RestaurantDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset, immutable after construction.
///
/// Besides the records themselves this carries what the UI needs to build
/// its filter widgets: the sorted distinct cities, the distinct cuisines
/// (for the colour map), and the maximum cost (budget slider upper bound).
#[derive(Debug, Clone)]
pub struct RestaurantDataset {
    /// All records, in source order.
    pub records: Vec<Restaurant>,
    /// Sorted distinct city names.
    pub cities: Vec<String>,
    /// Distinct cuisine names (non-empty only).
    pub cuisines: BTreeSet<String>,
    /// Highest cost present in the dataset.
    pub max_cost: f64,
}

impl RestaurantDataset {
    /// Build the dataset indices from cleaned records.
    pub fn from_records(records: Vec<Restaurant>) -> Self {
        let mut city_set: BTreeSet<String> = BTreeSet::new();
        let mut cuisines: BTreeSet<String> = BTreeSet::new();
        let mut max_cost = 0.0_f64;

        for rec in &records {
            city_set.insert(rec.city.clone());
            if !rec.cuisine.is_empty() {
                cuisines.insert(rec.cuisine.clone());
            }
            max_cost = max_cost.max(rec.cost);
        }

        RestaurantDataset {
            records,
            cities: city_set.into_iter().collect(),
            cuisines,
            max_cost,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, city: &str, cuisine: &str, cost: f64) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            city: city.to_string(),
            cuisine: cuisine.to_string(),
            rating: 4.0,
            rating_count: 10,
            cost,
        }
    }

    #[test]
    fn cities_are_sorted_and_distinct() {
        let ds = RestaurantDataset::from_records(vec![
            rec("A", "Pune", "Thai", 100.0),
            rec("B", "Agra", "Cafe", 200.0),
            rec("C", "Pune", "Pizza", 300.0),
        ]);
        assert_eq!(ds.cities, vec!["Agra".to_string(), "Pune".to_string()]);
    }

    #[test]
    fn max_cost_is_highest_cost_present() {
        let ds = RestaurantDataset::from_records(vec![
            rec("A", "Pune", "Thai", 150.0),
            rec("B", "Pune", "Cafe", 920.0),
            rec("C", "Pune", "Pizza", 310.0),
        ]);
        assert_eq!(ds.max_cost, 920.0);
    }

    #[test]
    fn empty_cuisine_is_not_indexed() {
        let ds = RestaurantDataset::from_records(vec![
            rec("A", "Pune", "", 150.0),
            rec("B", "Pune", "Cafe", 920.0),
        ]);
        assert_eq!(ds.cuisines.len(), 1);
        assert!(ds.cuisines.contains("Cafe"));
    }
}
