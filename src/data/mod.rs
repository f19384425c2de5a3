/// Data layer: core types, the built-in dataset, and statistics.
///
/// Architecture:
/// ```text
///  embedded iris.csv
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  parse csv → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Record>, species labels
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  describe / group means / histogram
///   └──────────┘
/// ```

pub mod model;
pub mod source;
pub mod stats;
