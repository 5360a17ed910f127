//! CPU core components.
//!
//! Only the instruction-fetch front end is modeled here; the rest of the
//! pipeline (decode, execute, memory) is represented by the port values it
//! drives into the front end each cycle.

/// Instruction-fetch front end (history, decision logic, clocked predictor).
pub mod frontend;
