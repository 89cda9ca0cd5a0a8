//! Physical Memory Protection.
//!
//! Three layers, leaf first:
//!
//! * [`range`]: decodes one entry into a `[base, limit)` range.
//! * [`table`]: the fixed 64-entry region table.
//! * [`checker`]: first-match evaluation of an access against a table.

pub mod checker;
pub mod range;
pub mod table;

pub use checker::{
    evaluate, evaluate_traced, evaluate_with, AccessRequest, AccessResult, EvalObserver,
    Evaluation, RegionTrace,
};
pub use range::{resolve, OverflowPolicy, RegionRange};
pub use table::{RegionEntry, RegionTable};
