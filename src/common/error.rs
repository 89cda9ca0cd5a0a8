//! Error types for region decoding and table ingestion.

use crate::core::arch::pmpcfg::RegionMode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the PMP core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PmpError {
    /// A table was built from a number of entries other than 64.
    #[error("malformed region table: expected {expected} entries, found {found}")]
    MalformedRegionCount { expected: usize, found: usize },

    /// The exclusive limit of a region does not fit in 32 bits.
    #[error("region {index} ({mode}) at {address:#x} overflows the 32-bit address space")]
    RangeOverflow {
        index: usize,
        mode: RegionMode,
        address: u32,
    },
}

/// Which half of the input file a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Lines 1-64, one config byte each.
    Config,
    /// Lines 65-128, one address word each.
    Address,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Config => write!(f, "config"),
            Section::Address => write!(f, "addresses"),
        }
    }
}

/// Errors raised while reading a region table from text.
///
/// `line` is always the 1-based line number within the whole source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source ended before all 128 values were read. `line` counts
    /// from the start of the section.
    #[error("unexpected EOF while reading {section} at line {line}")]
    UnexpectedEof { section: Section, line: usize },

    #[error("line {line}: invalid hexadecimal value '{text}'")]
    InvalidHex { line: usize, text: String },

    #[error("line {line}: config value {value:#x} does not fit in 8 bits")]
    ConfigOutOfRange { line: usize, value: u32 },
}
