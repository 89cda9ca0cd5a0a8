//! Common types shared by the PMP core and its collaborators.
//!
//! This module provides the access classification, table constants, and
//! error types used by the decoder, the evaluator, and the loader.

/// Common constants for the PMP table layout and config encoding.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for the core and for ingestion.
pub mod error;

pub use constants::PMP_ENTRIES;
pub use data::AccessType;
pub use error::{LoadError, PmpError, Section};
