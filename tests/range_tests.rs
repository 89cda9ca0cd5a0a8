//! Integration tests for PMP range resolution.
//!
//! These tests cover each address-matching mode, TOR chaining through the
//! previous entry's raw address, and the overflow policies at the top of
//! the 32-bit address space.

use pmp_checker::common::PmpError;
use pmp_checker::core::arch::pmpcfg::{RegionConfig, RegionMode};
use pmp_checker::core::units::pmp::{resolve, OverflowPolicy, RegionRange};
use proptest::prelude::*;

fn cfg(mode: RegionMode) -> RegionConfig {
    RegionConfig::from_parts(mode, true, true, true)
}

fn resolve_ok(
    index: usize,
    mode: RegionMode,
    addr: u32,
    prev: Option<u32>,
) -> Option<RegionRange> {
    resolve(index, cfg(mode), addr, prev, OverflowPolicy::Error).unwrap()
}

/// Tests that disabled entries resolve to no range.
#[test]
fn test_off_is_disabled() {
    assert_eq!(resolve_ok(0, RegionMode::Off, 0x8000_0000, None), None);
    assert_eq!(resolve_ok(5, RegionMode::Off, u32::MAX, Some(7)), None);
}

/// Tests NA4 decoding.
#[test]
fn test_na4_range() {
    assert_eq!(
        resolve_ok(0, RegionMode::Na4, 0x8000, None),
        Some(RegionRange::new(0x8000, 0x8004))
    );
}

/// Tests TOR at index 0 starts at address 0.
#[test]
fn test_tor_first_entry() {
    assert_eq!(
        resolve_ok(0, RegionMode::Tor, 0x1000, None),
        Some(RegionRange::new(0, 0x1000))
    );
    // A stray previous address is ignored for entry 0.
    assert_eq!(
        resolve_ok(0, RegionMode::Tor, 0x1000, Some(0x500)),
        Some(RegionRange::new(0, 0x1000))
    );
}

/// Tests TOR chaining takes the previous raw address field.
#[test]
fn test_tor_chaining() {
    assert_eq!(
        resolve_ok(1, RegionMode::Tor, 0x2000, Some(0x1000)),
        Some(RegionRange::new(0x1000, 0x2000))
    );
}

/// Tests that TOR never overflows, even at the top of the address space.
#[test]
fn test_tor_at_top_of_space() {
    assert_eq!(
        resolve_ok(3, RegionMode::Tor, u32::MAX, Some(0xFFFF_0000)),
        Some(RegionRange::new(0xFFFF_0000, u32::MAX))
    );
}

/// Tests the minimal NAPOT encoding (one trailing one, 8 bytes).
#[test]
fn test_napot_minimal() {
    let range = resolve_ok(0, RegionMode::Napot, 0x8000_1001, None).unwrap();
    assert_eq!(range, RegionRange::new(0x8000_1000, 0x8000_1008));
    assert_eq!(range.size(), 8);

    let addr = 0x8000_100D;
    let range = resolve_ok(0, RegionMode::Napot, addr, None).unwrap();
    assert_eq!(range.base, addr & !7);
    assert_eq!(range.size(), 8);
}

/// Tests that an even NAPOT address keeps its NA4 base, which need not
/// be aligned to the four-byte size.
#[test]
fn test_napot_even_base_is_unaligned() {
    let range = resolve_ok(0, RegionMode::Napot, 0x2, None).unwrap();
    assert_eq!(range, RegionRange::new(0x2, 0x6));
    assert_ne!(range.base % range.size(), 0);
    assert!(range.contains(0x2));
}

/// Tests NAPOT decoding of three trailing ones into a 32-byte region.
#[test]
fn test_napot_three_trailing_ones() {
    assert_eq!(
        resolve_ok(0, RegionMode::Napot, 0x8000_0007, None),
        Some(RegionRange::new(0x8000_0000, 0x8000_0020))
    );
}

/// Tests that a NAPOT region ending exactly at 2^32 overflows under the
/// error policy and saturates otherwise.
#[test]
fn test_napot_overflow_policies() {
    let addr = 0xFFFF_FFF3;
    let err = resolve(9, cfg(RegionMode::Napot), addr, None, OverflowPolicy::Error).unwrap_err();
    assert_eq!(
        err,
        PmpError::RangeOverflow {
            index: 9,
            mode: RegionMode::Napot,
            address: addr,
        }
    );

    let sat = resolve(9, cfg(RegionMode::Napot), addr, None, OverflowPolicy::Saturate).unwrap();
    assert_eq!(sat, Some(RegionRange::new(0xFFFF_FFF0, u32::MAX)));
}

/// Tests NA4 overflow in the last word of the address space.
#[test]
fn test_na4_overflow_policies() {
    let err = resolve(0, cfg(RegionMode::Na4), 0xFFFF_FFFC, None, OverflowPolicy::Error);
    assert!(matches!(err, Err(PmpError::RangeOverflow { index: 0, .. })));

    let sat = resolve(0, cfg(RegionMode::Na4), 0xFFFF_FFFC, None, OverflowPolicy::Saturate);
    assert_eq!(sat, Ok(Some(RegionRange::new(0xFFFF_FFFC, u32::MAX))));

    // The last NA4 region that still fits.
    assert_eq!(
        resolve_ok(0, RegionMode::Na4, 0xFFFF_FFFB, None),
        Some(RegionRange::new(0xFFFF_FFFB, 0xFFFF_FFFF))
    );
}

/// Tests the overflow policy parser.
#[test]
fn test_overflow_policy_from_str() {
    assert_eq!("error".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Error));
    assert_eq!("Saturate".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Saturate));
    assert!("wrap".parse::<OverflowPolicy>().is_err());
    assert_eq!(OverflowPolicy::default(), OverflowPolicy::Error);
}

proptest! {
    /// NAPOT with bit 0 clear decodes exactly like NA4.
    #[test]
    fn prop_napot_even_matches_na4(addr in any::<u32>().prop_map(|a| a & !1)) {
        for policy in [OverflowPolicy::Error, OverflowPolicy::Saturate] {
            let na4 = resolve(0, cfg(RegionMode::Na4), addr, None, policy);
            let napot = resolve(0, cfg(RegionMode::Napot), addr, None, policy);
            match (na4, napot) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                (a, b) => prop_assert!(false, "NA4 {:?} vs NAPOT {:?}", a, b),
            }
        }
    }

    /// A decoded NAPOT range always contains the encoded address.
    #[test]
    fn prop_napot_covers_addr(addr in any::<u32>()) {
        let resolved = resolve(0, cfg(RegionMode::Napot), addr, None, OverflowPolicy::Error);
        if let Ok(Some(range)) = resolved {
            prop_assert!(range.contains(addr));
        }
    }

    /// With at least one trailing one, a NAPOT range is a power of two
    /// in size and aligned to it.
    #[test]
    fn prop_napot_odd_is_size_aligned(addr in any::<u32>().prop_map(|a| a | 1)) {
        let resolved = resolve(0, cfg(RegionMode::Napot), addr, None, OverflowPolicy::Error);
        if let Ok(Some(range)) = resolved {
            let size = range.size();
            prop_assert!(size.is_power_of_two());
            prop_assert!(size >= 8);
            prop_assert_eq!(range.base % size, 0);
        }
    }

    /// TOR bounds are the two raw address fields, whatever their order.
    #[test]
    fn prop_tor_uses_raw_fields(index in 1usize..64, prev in any::<u32>(), addr in any::<u32>()) {
        let range = resolve(index, cfg(RegionMode::Tor), addr, Some(prev), OverflowPolicy::Error);
        prop_assert_eq!(range, Ok(Some(RegionRange::new(prev, addr))));
    }
}
