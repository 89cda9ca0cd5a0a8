//! Test module organization.
//!
//! This module organizes all integration tests for the PMP checker.

/// Range decoding and overflow policy tests.
mod range_tests;
