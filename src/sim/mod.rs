//! Input side of the checker: reading region tables from text.

/// Hex-lines region table loader.
pub mod loader;

pub use loader::{load_table, parse_hex, parse_table};
