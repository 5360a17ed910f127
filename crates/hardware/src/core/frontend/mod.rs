//! The instruction-fetch front end.
//!
//! A small synchronous unit that predicts the next fetch address and decides
//! whether previously fetched data can be reused instead of issuing a new
//! memory request. Split into:
//! 1. **History:** The three-slot fetch transaction ledger.
//! 2. **Decision:** Combinational next-address and reuse logic (crate
//!    internal; reachable only through the predictor's step function).
//! 3. **Predictor:** The clocked state registers and synchronous commit.
//! 4. **Signals:** Per-cycle input/output port bundles.

/// Fetch transaction history ledger.
pub mod history;

/// Per-cycle port bundles.
pub mod signals;

/// Clocked predictor and committed state.
pub mod predictor;

mod decision;

pub use predictor::FetchPredictor;
pub use signals::{FetchInputs, FetchOutputs};
