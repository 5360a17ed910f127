//! Configuration system for the fetch front-end model.
//!
//! This module defines the structures used to parameterize the unit. It
//! provides:
//! 1. **Defaults:** Baseline hardware constants (address width).
//! 2. **Structures:** The front-end configuration consumed at construction.
//!
//! Configuration is supplied as JSON from an embedding driver, or use
//! `FrontendConfig::default()` directly.

use serde::Deserialize;

/// Default configuration constants for the front end.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden.
mod defaults {
    /// Default fetch address width in bits.
    ///
    /// Matches the 32-bit fetch bus of the modeled core. The instruction
    /// word ports stay 32 bits regardless of this value.
    pub const ADDR_WIDTH: u32 = 32;
}

/// Front-end configuration consumed by the fetch predictor at construction.
///
/// Width validation happens when the predictor is built, not here: an
/// out-of-range width deserializes fine and is rejected by
/// [`FetchPredictor::new`](crate::core::frontend::FetchPredictor::new).
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use fetchsim_core::config::FrontendConfig;
///
/// let config = FrontendConfig::default();
/// assert_eq!(config.addr_width, 32);
/// ```
///
/// Deserializing from JSON (typical driver usage):
///
/// ```
/// use fetchsim_core::config::FrontendConfig;
///
/// let config: FrontendConfig = serde_json::from_str(r#"{ "addr_width": 16 }"#).unwrap();
/// assert_eq!(config.addr_width, 16);
///
/// let config: FrontendConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.addr_width, 32);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Fetch address width in bits (1 to 64).
    #[serde(default = "FrontendConfig::default_addr_width")]
    pub addr_width: u32,
}

impl FrontendConfig {
    /// Returns the default fetch address width.
    const fn default_addr_width() -> u32 {
        defaults::ADDR_WIDTH
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            addr_width: Self::default_addr_width(),
        }
    }
}
