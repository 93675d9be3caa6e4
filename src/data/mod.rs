/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → HeatDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  HeatDataset  │  Vec<Sample>, frame index, fixed bounds
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
