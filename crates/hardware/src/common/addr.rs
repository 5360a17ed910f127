//! Configured-width fetch address arithmetic.
//!
//! Fetch addresses are carried as raw `u64` values but live in an address
//! space whose width is a construction-time parameter. This module defines
//! the following:
//! 1. **Width Validation:** Rejects impossible widths (zero, or wider than the carrier).
//! 2. **Truncation:** Masks raw values into the configured space.
//! 3. **Modular Stepping:** Advances addresses with silent wraparound, matching
//!    fixed-width hardware registers.

use crate::common::error::ConfigError;

/// Widest address space representable in the `u64` carrier.
pub const MAX_ADDR_WIDTH: u32 = 64;

/// A fixed-width address space with modular arithmetic.
///
/// All fetch-address computation goes through this type so that wraparound
/// at the top of the range is uniform and silent; no address operation can
/// fail at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressSpace {
    /// Address width in bits.
    width: u32,
    /// Precomputed mask covering the low `width` bits.
    mask: u64,
}

impl AddressSpace {
    /// Creates an address space of the given width in bits.
    ///
    /// # Arguments
    ///
    /// * `width` - Address width in bits; must be between 1 and 64.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddressWidth`] when `width` is zero or
    /// exceeds [`MAX_ADDR_WIDTH`]. This is the only failure point of the
    /// whole unit; per-cycle evaluation is total.
    pub const fn new(width: u32) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_ADDR_WIDTH {
            return Err(ConfigError::InvalidAddressWidth { width });
        }
        let mask = if width == MAX_ADDR_WIDTH {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        Ok(Self { width, mask })
    }

    /// Returns the address width in bits.
    #[inline(always)]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Masks a raw value into this address space.
    #[inline(always)]
    pub const fn truncate(&self, addr: u64) -> u64 {
        addr & self.mask
    }

    /// Advances an address by `bytes`, wrapping modulo the address width.
    #[inline(always)]
    pub const fn step(&self, addr: u64, bytes: u64) -> u64 {
        addr.wrapping_add(bytes) & self.mask
    }
}
