/// Data layer: core types, parsing, filtering and statistics.
///
/// Architecture:
/// ```text
///  sampled_voltage.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse headers + samples → SampleSet
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  moving average / median over a sliding window
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats   │  min / max / midpoint of the median series
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod stats;
