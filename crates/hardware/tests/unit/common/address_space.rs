//! # Address-Space Arithmetic Tests
//!
//! Verifies construction validation, truncation, and modular stepping of
//! the configured-width fetch address space, including wraparound at the
//! top of the range.

use fetchsim_core::common::addr::{AddressSpace, MAX_ADDR_WIDTH};
use fetchsim_core::common::error::ConfigError;

fn space(width: u32) -> AddressSpace {
    let Ok(space) = AddressSpace::new(width) else {
        panic!("width {width} must construct");
    };
    space
}

/// A typical 32-bit fetch space reports its width back.
#[test]
fn new_and_width() {
    assert_eq!(space(32).width(), 32);
}

/// Width zero is rejected at construction.
#[test]
fn zero_width_rejected() {
    assert_eq!(
        AddressSpace::new(0),
        Err(ConfigError::InvalidAddressWidth { width: 0 })
    );
}

/// Widths beyond the u64 carrier are rejected at construction.
#[test]
fn overwide_rejected() {
    assert_eq!(
        AddressSpace::new(MAX_ADDR_WIDTH + 1),
        Err(ConfigError::InvalidAddressWidth { width: 65 })
    );
}

/// The boundary widths 1 and 64 are both valid.
#[test]
fn boundary_widths_accepted() {
    assert_eq!(space(1).width(), 1);
    assert_eq!(space(MAX_ADDR_WIDTH).width(), 64);
}

/// Truncation keeps only the configured low bits.
#[test]
fn truncate_masks_high_bits() {
    let s = space(16);
    assert_eq!(s.truncate(0x0001_2345), 0x2345);
    assert_eq!(s.truncate(0xFFFF), 0xFFFF);
}

/// A 64-bit space truncates nothing.
#[test]
fn truncate_full_width_is_identity() {
    let s = space(64);
    assert_eq!(s.truncate(u64::MAX), u64::MAX);
}

/// Stepping inside the range is plain addition.
#[test]
fn step_within_range() {
    let s = space(32);
    assert_eq!(s.step(0x1000, 2), 0x1002);
    assert_eq!(s.step(0x1000, 4), 0x1004);
}

/// Stepping past the top of the range wraps to zero without error.
#[test]
fn step_wraps_at_top_of_range() {
    let s = space(16);
    assert_eq!(s.step(0xFFFE, 2), 0x0000, "0xFFFE + 2 wraps in 16 bits");
    assert_eq!(s.step(0xFFFE, 4), 0x0002);
}

/// Wraparound also holds for the full-width carrier.
#[test]
fn step_wraps_full_width() {
    let s = space(64);
    assert_eq!(s.step(u64::MAX, 4), 3);
}

/// The error is displayable with the offending width.
#[test]
fn error_display_names_width() {
    let err = ConfigError::InvalidAddressWidth { width: 0 };
    assert_eq!(
        err.to_string(),
        "invalid fetch address width 0: must be between 1 and 64 bits"
    );
}
