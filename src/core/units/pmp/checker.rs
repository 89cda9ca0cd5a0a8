//! PMP Access Evaluation.
//!
//! Walks a [`RegionTable`] in index order and settles one access request.
//! The first region whose range covers the target address decides the
//! outcome, whether it grants or denies; later regions are not examined.

use super::range::{self, OverflowPolicy, RegionRange};
use super::table::RegionTable;
use crate::common::{AccessType, PmpError};
use crate::core::arch::pmpcfg::{RegionConfig, RegionMode};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// A single access to be checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessRequest {
    pub addr: u32,
    pub access: AccessType,
}

impl AccessRequest {
    pub fn new(addr: u32, access: AccessType) -> Self {
        Self { addr, access }
    }

    pub fn read(addr: u32) -> Self {
        Self::new(addr, AccessType::Read)
    }

    pub fn write(addr: u32) -> Self {
        Self::new(addr, AccessType::Write)
    }

    pub fn execute(addr: u32) -> Self {
        Self::new(addr, AccessType::Execute)
    }
}

/// Outcome of an access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum AccessResult {
    /// The address matched `region_index` and its permission bit is set.
    Granted { region_index: usize },
    /// The address matched `region_index` but its permission bit is clear.
    Fault { region_index: usize },
    /// No enabled region covers the address.
    FaultUnmapped,
}

impl AccessResult {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessResult::Granted { .. })
    }

    /// Index of the deciding region, if any region matched.
    pub fn region_index(&self) -> Option<usize> {
        match *self {
            AccessResult::Granted { region_index } | AccessResult::Fault { region_index } => {
                Some(region_index)
            }
            AccessResult::FaultUnmapped => None,
        }
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessResult::Granted { region_index } => write!(f, "Granted (region {})", region_index),
            AccessResult::Fault { region_index } => write!(f, "Fault (region {})", region_index),
            AccessResult::FaultUnmapped => write!(f, "Fault (no region)"),
        }
    }
}

/// What the evaluator saw at one table index.
///
/// `range` is `None` for `Off` entries; their raw address is still
/// recorded so it can be shown to an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionTrace {
    pub index: usize,
    pub mode: RegionMode,
    pub config: RegionConfig,
    pub addr: u32,
    pub range: Option<RegionRange>,
    pub matched: bool,
}

/// Receives one [`RegionTrace`] per examined entry, in index order.
///
/// Observers are notified after the match test and cannot change the
/// outcome.
pub trait EvalObserver {
    fn on_region(&mut self, step: &RegionTrace);
}

/// Observer that discards every step.
impl EvalObserver for () {
    fn on_region(&mut self, _step: &RegionTrace) {}
}

impl EvalObserver for Vec<RegionTrace> {
    fn on_region(&mut self, step: &RegionTrace) {
        self.push(*step);
    }
}

/// A verdict together with the ordered steps that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub request: AccessRequest,
    pub result: AccessResult,
    pub trace: Vec<RegionTrace>,
}

/// Checks `request` against `table`.
pub fn evaluate(
    table: &RegionTable,
    request: AccessRequest,
    policy: OverflowPolicy,
) -> Result<AccessResult, PmpError> {
    evaluate_with(table, request, policy, &mut ())
}

/// Checks `request` against `table` and records every examined entry.
pub fn evaluate_traced(
    table: &RegionTable,
    request: AccessRequest,
    policy: OverflowPolicy,
) -> Result<Evaluation, PmpError> {
    let mut trace = Vec::new();
    let result = evaluate_with(table, request, policy, &mut trace)?;
    Ok(Evaluation {
        request,
        result,
        trace,
    })
}

/// Checks `request` against `table`, reporting each step to `observer`.
///
/// # Errors
///
/// Returns [`PmpError::RangeOverflow`] if an entry examined before the
/// deciding one has a limit past `u32::MAX` and `policy` is
/// [`OverflowPolicy::Error`].
pub fn evaluate_with<O: EvalObserver + ?Sized>(
    table: &RegionTable,
    request: AccessRequest,
    policy: OverflowPolicy,
    observer: &mut O,
) -> Result<AccessResult, PmpError> {
    for (index, entry) in table.iter().enumerate() {
        let mode = entry.config.mode();
        let range = range::resolve(
            index,
            entry.config,
            entry.addr,
            table.prev_addr(index),
            policy,
        )?;
        let matched = range.is_some_and(|r| r.contains(request.addr));

        trace!(
            index,
            mode = %mode,
            config = entry.config.bits(),
            addr = entry.addr,
            range = ?range,
            matched,
            "pmp region"
        );
        observer.on_region(&RegionTrace {
            index,
            mode,
            config: entry.config,
            addr: entry.addr,
            range,
            matched,
        });

        if matched {
            let result = if entry.config.permits(request.access) {
                AccessResult::Granted {
                    region_index: index,
                }
            } else {
                AccessResult::Fault {
                    region_index: index,
                }
            };
            debug!(addr = request.addr, access = %request.access, %result, "pmp verdict");
            return Ok(result);
        }
    }

    debug!(addr = request.addr, access = %request.access, "pmp verdict: no region");
    Ok(AccessResult::FaultUnmapped)
}
