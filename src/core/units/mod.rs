//! Functional units.

/// Physical Memory Protection: range resolution, region table and
/// access evaluation.
pub mod pmp;
