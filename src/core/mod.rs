//! PMP core: config decoding, range resolution and access evaluation.
//!
//! Everything under this module is pure. No function here performs I/O;
//! diagnostics are emitted as `tracing` events and through the
//! [`EvalObserver`](units::pmp::EvalObserver) hook.

/// Architectural encodings (the `pmpcfg` octet).
pub mod arch;

/// Functional units built on the architectural encodings.
pub mod units;

pub use units::pmp::{
    evaluate, AccessRequest, AccessResult, Evaluation, OverflowPolicy, RegionRange, RegionTable,
};
