/// Data layer: core types and the log parser.
///
/// Architecture:
/// ```text
///  measurement log (text)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  scan lines → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Series>, file order
///   └──────────┘
/// ```

pub mod model;
pub mod parser;
