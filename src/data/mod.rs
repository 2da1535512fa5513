/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FlightDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FlightDataset │  Vec<FlightRecord>, distinct values per dimension
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐       ┌─────────────┐
///   │  filter   │  ───▶ │  aggregate   │  KPIs, rankings, histogram, counts
///   └──────────┘       └─────────────┘
/// ```
///
/// Everything here is pure with respect to a loaded dataset: `loader` is the
/// only fallible piece, and `filter`/`aggregate` are total functions over
/// (dataset, selection) with documented empty-view fallbacks.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
