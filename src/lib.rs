//! RISC-V Physical Memory Protection Checker Library.
//!
//! This crate decides whether a single memory access is allowed by a
//! table of 64 PMP entries. Each entry pairs an 8-bit config (R/W/X bits
//! and an address-matching mode) with a 32-bit address word. The entry
//! with the lowest index that covers the address decides the outcome.
//!
//! # Architecture
//!
//! * **Core**: pure range decoding (OFF, TOR, NA4, NAPOT) and first-match
//!   evaluation over an immutable table.
//! * **Loader**: reads the 64 + 64 hex-lines table format.
//! * **Report**: renders the per-region trace and verdict as text or JSON.
//!
//! # Modules
//!
//! * `common`: Shared types, constants, and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: PMP decoding and evaluation.
//! * `sim`: Table loaders.
//! * `report`: Verdict rendering.

/// Shared types, constants, and error handling.
///
/// Provides the access classification, the PMP config bit layout, and
/// the error types raised by the core and the loader.
pub mod common;

/// Configuration system for checking and reporting settings.
///
/// Loads TOML files selecting the overflow policy and report format.
pub mod config;

/// PMP configuration decoding, range resolution and access evaluation.
pub mod core;

/// Loaders that turn textual input into region tables.
pub mod sim;

/// Text and JSON rendering of evaluations.
pub mod report;

pub use crate::common::{AccessType, LoadError, PmpError};
pub use crate::core::{
    evaluate, AccessRequest, AccessResult, Evaluation, OverflowPolicy, RegionRange, RegionTable,
};
