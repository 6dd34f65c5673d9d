/// Data layer: core types, loading, filtering, and writing.
///
/// Architecture:
/// ```text
///  .csv file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (typed columns)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Column>, type fixed at load
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterSpec → matching rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  persist Table → .csv
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
