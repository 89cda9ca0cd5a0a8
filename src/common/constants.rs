//! PMP Constants.
//!
//! Bit layout of a `pmpcfg` octet and the fixed size of the region table.

/// Number of entries in a region table.
pub const PMP_ENTRIES: usize = 64;

/// Read permission bit (bit 0).
pub const CFG_R: u8 = 1 << 0;

/// Write permission bit (bit 1).
pub const CFG_W: u8 = 1 << 1;

/// Execute permission bit (bit 2).
pub const CFG_X: u8 = 1 << 2;

/// Shift of the address-matching (A) field.
pub const CFG_A_SHIFT: u8 = 3;

/// Mask of the A field after shifting.
pub const CFG_A_MASK: u8 = 0b11;

/// Size in bytes of an NA4 region.
pub const NA4_SIZE: u64 = 4;
