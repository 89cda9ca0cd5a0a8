//! Region Table Loader.
//!
//! Reads the line-oriented hexadecimal format: 64 lines of config bytes
//! followed by 64 lines of address words. Only the first whitespace
//! separated token of each line is read, and lines past the 128th are
//! ignored.

use crate::common::constants::PMP_ENTRIES;
use crate::common::{LoadError, Section};
use crate::core::arch::pmpcfg::RegionMode;
use crate::core::units::pmp::{RegionEntry, RegionTable};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a hexadecimal word, with or without a `0x`/`0X` prefix.
pub fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Reads and parses a region table file.
pub fn load_table(path: impl AsRef<Path>) -> Result<RegionTable, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&text)?;
    debug!(path = %path.display(), "loaded region table");
    Ok(table)
}

/// Parses a region table from in-memory text.
pub fn parse_table(source: &str) -> Result<RegionTable, LoadError> {
    let mut lines = source.lines();
    let mut entries = [RegionEntry::default(); PMP_ENTRIES];

    for (i, entry) in entries.iter_mut().enumerate() {
        let value = next_value(&mut lines, Section::Config, i)?;
        let bits = u8::try_from(value).map_err(|_| LoadError::ConfigOutOfRange {
            line: i + 1,
            value,
        })?;
        entry.config = bits.into();
    }

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.addr = next_value(&mut lines, Section::Address, i)?;
    }

    let enabled = entries
        .iter()
        .filter(|e| e.config.mode() != RegionMode::Off)
        .count();
    debug!(enabled, "parsed region table");

    Ok(RegionTable::new(entries))
}

/// Reads the `i`-th value of `section` from `lines`.
fn next_value<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    section: Section,
    i: usize,
) -> Result<u32, LoadError> {
    let line_no = match section {
        Section::Config => i + 1,
        Section::Address => PMP_ENTRIES + i + 1,
    };

    let line = lines
        .next()
        .ok_or(LoadError::UnexpectedEof { section, line: i + 1 })?;
    let token = line.split_whitespace().next().unwrap_or("");

    parse_hex(token).ok_or_else(|| LoadError::InvalidHex {
        line: line_no,
        text: token.to_string(),
    })
}
