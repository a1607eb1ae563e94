/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json  (or fixed fallback)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ScoreDataset (quadrants derived from score)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ScoreDataset │  Vec<ScoreRecord>, team index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  filter   │ ──▶ │ aggregate  │  indices → Summary
///   └──────────┘      └───────────┘
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
