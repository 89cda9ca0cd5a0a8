//! RISC-V architecture-specific encodings.
//!
//! This module contains the decoder for the per-region PMP configuration
//! octet. Locking and privilege modes are not modelled.

/// PMP configuration octet and address-matching modes.
pub mod pmpcfg;
