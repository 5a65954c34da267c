/// Data layer: core types, CSV loading, and JavaScript rendering.
///
/// Architecture:
/// ```text
///   <name>.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse header + records → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Row>, header order preserved
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  Table → `const <name> = [...];`
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod render;
