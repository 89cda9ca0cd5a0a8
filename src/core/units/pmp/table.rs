//! PMP Region Table.
//!
//! A fixed array of exactly [`PMP_ENTRIES`] entries. The index is the only
//! identity an entry has: it orders TOR chaining and match priority. A
//! table is built whole and never edited afterwards.

use crate::common::{PmpError, PMP_ENTRIES};
use crate::core::arch::pmpcfg::RegionConfig;
use serde::Serialize;

/// One raw region record as it appears in the `pmpcfg`/`pmpaddr` columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegionEntry {
    pub config: RegionConfig,
    pub addr: u32,
}

impl RegionEntry {
    pub fn new(config: impl Into<RegionConfig>, addr: u32) -> Self {
        Self {
            config: config.into(),
            addr,
        }
    }
}

/// Ordered, immutable set of 64 region records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionTable {
    entries: [RegionEntry; PMP_ENTRIES],
}

impl Default for RegionTable {
    /// Returns a table whose entries are all `Off` with a zero address.
    fn default() -> Self {
        Self {
            entries: [RegionEntry::default(); PMP_ENTRIES],
        }
    }
}

impl RegionTable {
    /// Wraps an already sized array of entries.
    pub fn new(entries: [RegionEntry; PMP_ENTRIES]) -> Self {
        Self { entries }
    }

    /// Builds a table from a list of entries, which must hold exactly
    /// [`PMP_ENTRIES`] records. Shorter lists are not padded.
    pub fn from_entries(entries: &[RegionEntry]) -> Result<Self, PmpError> {
        let entries: [RegionEntry; PMP_ENTRIES] =
            entries.try_into().map_err(|_| PmpError::MalformedRegionCount {
                expected: PMP_ENTRIES,
                found: entries.len(),
            })?;
        Ok(Self { entries })
    }

    /// Builds a table from the two parallel columns of the input format.
    pub fn from_columns(configs: &[u8], addrs: &[u32]) -> Result<Self, PmpError> {
        for found in [configs.len(), addrs.len()] {
            if found != PMP_ENTRIES {
                return Err(PmpError::MalformedRegionCount {
                    expected: PMP_ENTRIES,
                    found,
                });
            }
        }

        let mut entries = [RegionEntry::default(); PMP_ENTRIES];
        for (slot, (&cfg, &addr)) in entries.iter_mut().zip(configs.iter().zip(addrs)) {
            *slot = RegionEntry::new(cfg, addr);
        }
        Ok(Self { entries })
    }

    /// Copies the table with `entry` placed at `index`, leaving `self`
    /// untouched. Returns `None` when `index` is out of range.
    pub fn with_entry(&self, index: usize, entry: RegionEntry) -> Option<Self> {
        let mut entries = self.entries;
        *entries.get_mut(index)? = entry;
        Some(Self { entries })
    }

    pub const fn len(&self) -> usize {
        PMP_ENTRIES
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&RegionEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionEntry> {
        self.entries.iter()
    }

    /// Raw address field of the entry before `index`, used as a TOR base.
    pub fn prev_addr(&self, index: usize) -> Option<u32> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.addr)
    }
}
