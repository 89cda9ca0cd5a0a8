//! PMP Range Resolution.
//!
//! Converts one `(config, address)` entry into the concrete half-open
//! range `[base, limit)` it protects. All size arithmetic is done in 64
//! bits so that NAPOT runs of up to 32 trailing ones stay well defined;
//! the result is then narrowed back to the 32-bit address space under
//! the caller's [`OverflowPolicy`].

use crate::common::constants::NA4_SIZE;
use crate::common::PmpError;
use crate::core::arch::pmpcfg::{RegionConfig, RegionMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a region's exclusive limit does not fit in 32 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the evaluation with [`PmpError::RangeOverflow`].
    #[default]
    Error,
    /// Clamp the limit to `u32::MAX`.
    ///
    /// The limit stays exclusive, so a saturated NA4 or NAPOT region never
    /// covers `0xFFFF_FFFF`, even one encoding the whole address space.
    Saturate,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(OverflowPolicy::Error),
            "saturate" => Ok(OverflowPolicy::Saturate),
            _ => Err(format!("invalid overflow policy '{}' (expected error or saturate)", s)),
        }
    }
}

/// A resolved half-open address range `[base, limit)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionRange {
    pub base: u32,
    pub limit: u32,
}

impl RegionRange {
    pub const fn new(base: u32, limit: u32) -> Self {
        Self { base, limit }
    }

    /// Returns whether `addr` lies inside the range. `limit` is excluded.
    pub fn contains(&self, addr: u32) -> bool {
        self.base <= addr && addr < self.limit
    }

    /// Returns the number of bytes covered. Inverted TOR ranges are empty.
    pub fn size(&self) -> u32 {
        self.limit.saturating_sub(self.base)
    }

    pub fn is_empty(&self) -> bool {
        self.limit <= self.base
    }
}

impl fmt::Display for RegionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#010x}, {:#010x})", self.base, self.limit)
    }
}

/// Resolves the range of table entry `index`.
///
/// `prev_addr` is the raw address field of entry `index - 1`. It is only
/// read for TOR, and is used whatever that entry's own mode is, including
/// `Off`. Entry 0 always has a TOR base of 0.
///
/// Returns `Ok(None)` for disabled entries.
pub fn resolve(
    index: usize,
    config: RegionConfig,
    addr: u32,
    prev_addr: Option<u32>,
    policy: OverflowPolicy,
) -> Result<Option<RegionRange>, PmpError> {
    let mode = config.mode();
    let (base, limit) = match mode {
        RegionMode::Off => return Ok(None),
        RegionMode::Tor => {
            let base = if index == 0 {
                0
            } else {
                prev_addr.unwrap_or(0)
            };
            return Ok(Some(RegionRange::new(base, addr)));
        }
        RegionMode::Na4 => na4_bounds(addr),
        RegionMode::Napot => napot_bounds(addr),
    };

    narrow(base, limit, policy)
        .map(Some)
        .ok_or(PmpError::RangeOverflow {
            index,
            mode,
            address: addr,
        })
}

/// Bounds of a four-byte region starting at `addr`, in 64 bits.
fn na4_bounds(addr: u32) -> (u64, u64) {
    let base = u64::from(addr);
    (base, base + NA4_SIZE)
}

/// Decodes NAPOT bounds from the trailing ones of `addr`, in 64 bits.
///
/// An address with bit 0 clear has no trailing one and denotes the same
/// range as NA4. Otherwise `n` trailing ones give a size of `2^(n + 2)`
/// bytes, aligned down from `addr`.
fn napot_bounds(addr: u32) -> (u64, u64) {
    if addr & 1 == 0 {
        return na4_bounds(addr);
    }

    let count = addr.trailing_ones();
    let size = 1u64 << (count + 2);
    let base = u64::from(addr) & !(size - 1);
    (base, base + size)
}

/// Narrows 64-bit bounds to the 32-bit address space.
///
/// `base` always fits, since it is never above the original address.
/// Returns `None` when `limit` overflows and the policy is `Error`.
fn narrow(base: u64, limit: u64, policy: OverflowPolicy) -> Option<RegionRange> {
    let base = base as u32;
    match u32::try_from(limit) {
        Ok(limit) => Some(RegionRange::new(base, limit)),
        Err(_) => match policy {
            OverflowPolicy::Error => None,
            OverflowPolicy::Saturate => Some(RegionRange::new(base, u32::MAX)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn napot(addr: u32) -> Option<RegionRange> {
        let cfg = RegionConfig::from_parts(RegionMode::Napot, true, false, false);
        resolve(0, cfg, addr, None, OverflowPolicy::Error).unwrap()
    }

    #[test]
    fn napot_size_doubles_per_trailing_one() {
        assert_eq!(napot(0x1001), Some(RegionRange::new(0x1000, 0x1008)));
        assert_eq!(napot(0x1003), Some(RegionRange::new(0x1000, 0x1010)));
        assert_eq!(napot(0x1007), Some(RegionRange::new(0x1000, 0x1020)));
    }

    #[test]
    fn napot_count_of_thirty_spans_entire_space_only_when_saturated() {
        let cfg = RegionConfig::from_parts(RegionMode::Napot, true, true, true);
        let err = resolve(3, cfg, 0x3FFF_FFFF, None, OverflowPolicy::Error).unwrap_err();
        assert_eq!(
            err,
            PmpError::RangeOverflow {
                index: 3,
                mode: RegionMode::Napot,
                address: 0x3FFF_FFFF,
            }
        );

        let sat = resolve(3, cfg, 0x3FFF_FFFF, None, OverflowPolicy::Saturate).unwrap();
        assert_eq!(sat, Some(RegionRange::new(0, u32::MAX)));
    }

    #[test]
    fn all_ones_address_does_not_panic() {
        let cfg = RegionConfig::from_parts(RegionMode::Napot, true, false, false);
        let sat = resolve(0, cfg, u32::MAX, None, OverflowPolicy::Saturate).unwrap();
        assert_eq!(sat, Some(RegionRange::new(0, u32::MAX)));
    }

    #[test]
    fn range_size_of_inverted_tor_is_zero() {
        let r = RegionRange::new(0x2000, 0x1000);
        assert!(r.is_empty());
        assert_eq!(r.size(), 0);
        assert!(!r.contains(0x1800));
    }
}
