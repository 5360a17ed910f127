//! Construction-time error definitions.
//!
//! The fetch front end has no recoverable per-cycle errors: every input
//! combination is defined and all address arithmetic wraps. The only failure
//! surface is malformed configuration, rejected once at construction.
//! Misprediction is not an error; it is reported structurally through the
//! `is_prediction` output and recovered by the surrounding pipeline.

use thiserror::Error;

/// Fatal configuration errors detected when the unit is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured fetch address width cannot be realized.
    ///
    /// A zero-width address space has no addresses, and widths beyond 64
    /// bits do not fit the address carrier.
    #[error("invalid fetch address width {width}: must be between 1 and 64 bits")]
    InvalidAddressWidth {
        /// The rejected width in bits.
        width: u32,
    },
}
