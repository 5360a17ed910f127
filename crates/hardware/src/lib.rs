//! Cycle-accurate instruction-fetch front-end model.
//!
//! This crate implements the fetch-prediction unit of a pipelined RISC-V
//! core with the following:
//! 1. **Core:** A three-slot fetch history ledger, combinational
//!    next-address/reuse decision logic, and a synchronously clocked
//!    predictor with active-low reset.
//! 2. **Prediction:** Sequential next-PC prediction over mixed 16/32-bit
//!    encodings plus a return-address shortcut; mispredictions are corrected
//!    by the executor's authoritative next-PC.
//! 3. **Reuse:** Half-word and whole-word reuse of previously returned fetch
//!    data, avoiding redundant memory requests.
//! 4. **Simulation:** Configuration, statistics collection, and a pure
//!    step-per-tick evaluation model driven by the surrounding pipeline.

/// Common types and constants (address space, encodings, errors).
pub mod common;
/// Front-end configuration (defaults, serde structures).
pub mod config;
/// CPU core (instruction-fetch front end).
pub mod core;
/// Statistics collection and reporting.
pub mod stats;

/// Front-end configuration; use `FrontendConfig::default()` or deserialize from JSON.
pub use crate::config::FrontendConfig;
/// The clocked fetch predictor; construct with `FetchPredictor::new`.
pub use crate::core::frontend::FetchPredictor;
/// Per-cycle port bundles driven by the pipeline.
pub use crate::core::frontend::{FetchInputs, FetchOutputs};
