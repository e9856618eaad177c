/// Data layer: core types, loading, and the recommendation pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, drop incomplete rows → RestaurantDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ RestaurantDataset │  Vec<Restaurant>, city/cuisine indices
///   └───────────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ recommend │  filter → score → rank → ordered ScoredRecords
///   └───────────┘
/// ```
///
/// The dataset is loaded once and immutable thereafter; every interaction
/// runs `recommend` fresh against it.

pub mod loader;
pub mod model;
pub mod recommend;
