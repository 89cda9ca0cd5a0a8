//! PMP Configuration Octets.
//!
//! Each PMP entry carries one 8-bit config value: R/W/X permission bits
//! in bits 0-2 and the address-matching (A) field in bits 3-4. The
//! remaining bits are kept in the raw value but never interpreted.

use crate::common::constants::{CFG_A_MASK, CFG_A_SHIFT, CFG_R, CFG_W, CFG_X};
use crate::common::AccessType;
use serde::{Serialize, Serializer};
use std::fmt;

/// Address-matching mode of a PMP entry (the A field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RegionMode {
    /// Entry disabled; matches nothing.
    #[serde(rename = "OFF")]
    Off = 0,

    /// Top of range.
    ///
    /// The region spans from the previous entry's address field up to
    /// (not including) this entry's address field.
    #[serde(rename = "TOR")]
    Tor = 1,

    /// Naturally aligned four-byte region.
    #[serde(rename = "NA4")]
    Na4 = 2,

    /// Naturally aligned power-of-two region.
    ///
    /// Base and size are encoded together by the trailing run of ones
    /// in the address field.
    #[serde(rename = "NAPOT")]
    Napot = 3,
}

impl RegionMode {
    /// Decodes the A field from its two-bit value. Only the low two
    /// bits of `val` are considered.
    pub fn from_u8(val: u8) -> Self {
        match val & CFG_A_MASK {
            0 => RegionMode::Off,
            1 => RegionMode::Tor,
            2 => RegionMode::Na4,
            _ => RegionMode::Napot,
        }
    }

    /// Returns the numeric A-field value.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the short mnemonic of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            RegionMode::Off => "OFF",
            RegionMode::Tor => "TOR",
            RegionMode::Na4 => "NA4",
            RegionMode::Napot => "NAPOT",
        }
    }
}

impl fmt::Display for RegionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One PMP configuration octet.
///
/// Wraps the raw byte so reserved bits survive a round trip; accessors
/// decode the fields on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionConfig(u8);

impl RegionConfig {
    /// Wraps a raw config byte.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Builds a config from its decoded fields, with all reserved bits clear.
    pub fn from_parts(mode: RegionMode, readable: bool, writable: bool, executable: bool) -> Self {
        let mut bits = mode.to_u8() << CFG_A_SHIFT;
        if readable {
            bits |= CFG_R;
        }
        if writable {
            bits |= CFG_W;
        }
        if executable {
            bits |= CFG_X;
        }
        Self(bits)
    }

    /// Returns the raw byte, reserved bits included.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn readable(self) -> bool {
        self.0 & CFG_R != 0
    }

    pub fn writable(self) -> bool {
        self.0 & CFG_W != 0
    }

    pub fn executable(self) -> bool {
        self.0 & CFG_X != 0
    }

    /// Decodes the address-matching mode from bits 3-4.
    pub fn mode(self) -> RegionMode {
        RegionMode::from_u8(self.0 >> CFG_A_SHIFT)
    }

    /// Returns whether the permission bit for `access` is set.
    pub fn permits(self, access: AccessType) -> bool {
        match access {
            AccessType::Read => self.readable(),
            AccessType::Write => self.writable(),
            AccessType::Execute => self.executable(),
        }
    }
}

impl From<u8> for RegionConfig {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for RegionConfig {
    /// Formats as `0xNN (MODE rwx)`, with `-` for cleared permissions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn t(cond: bool, c: char) -> char {
            if cond {
                c
            } else {
                '-'
            }
        }

        write!(
            f,
            "{:#04x} ({} {}{}{})",
            self.0,
            self.mode(),
            t(self.readable(), 'r'),
            t(self.writable(), 'w'),
            t(self.executable(), 'x'),
        )
    }
}

impl Serialize for RegionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
