/// Data layer: core types, parsing, classification and chart projection.
///
/// Architecture:
/// ```text
///  pasted text + format (csv | json)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  text → Dataset (all-or-nothing, ParseError)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  Dataset → column names, numeric / categorical
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   axes    │  Schema → default X / Y
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  chart    │  Dataset + axes → ChartSeries, pie slices
///   └──────────┘
/// ```

pub mod axes;
pub mod chart;
pub mod demo;
pub mod error;
pub mod model;
pub mod parser;
pub mod schema;
