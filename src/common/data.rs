//! Memory Access Types.
//!
//! This module defines the classification of requested accesses. The
//! evaluator maps each variant onto one permission bit of the matching
//! region's config.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Requires the Read (R) bit of the matching region.
    Read,

    /// Data write access.
    ///
    /// Requires the Write (W) bit of the matching region.
    Write,

    /// Instruction fetch access.
    ///
    /// Requires the Execute (X) bit of the matching region.
    Execute,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessType::Read => "Read",
            AccessType::Write => "Write",
            AccessType::Execute => "Execute",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AccessType {
    type Err = String;

    /// Parses an operation from its first character (`R`, `W` or `X`,
    /// case-insensitive), so `read`, `Write` and `x` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('R') => Ok(AccessType::Read),
            Some('W') => Ok(AccessType::Write),
            Some('X') => Ok(AccessType::Execute),
            _ => Err(format!("invalid operation '{}' (expected R, W or X)", s)),
        }
    }
}
