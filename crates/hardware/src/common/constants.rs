//! Global fetch-unit constants.
//!
//! This module defines the instruction-encoding constants shared by the
//! front end. It includes:
//! 1. **Width Constants:** Sizes of the two instruction encodings.
//! 2. **Encoding Masks:** The compressed-instruction discriminator bits.
//! 3. **Return Patterns:** The register-indirect return encodings recognized
//!    by the return-address shortcut.
//! 4. **History Constants:** The fixed depth of the fetch ledger.

/// Size of a compressed (16-bit) instruction in bytes — the minimal
/// instruction unit of the architecture.
pub const INSTRUCTION_SIZE_16: u64 = 2;

/// Size of a standard (32-bit) instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Bit mask for checking if an instruction parcel is compressed.
pub const COMPRESSED_INSTRUCTION_MASK: u16 = 0x3;

/// Value indicating a standard (uncompressed) instruction when masked.
pub const COMPRESSED_INSTRUCTION_VALUE: u16 = 0x3;

/// Full-width register-indirect return: `jalr x0, 0(ra)`.
pub const RETURN_INSTRUCTION: u32 = 0x0000_8067;

/// Compressed register-indirect return: `c.jr ra`.
pub const COMPRESSED_RETURN: u16 = 0x8082;

/// Number of fetch transactions remembered by the history ledger.
pub const HISTORY_DEPTH: usize = 3;
