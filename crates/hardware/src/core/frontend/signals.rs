//! Per-cycle port bundles for the fetch front end.
//!
//! These structures carry one clock cycle's worth of port values between the
//! surrounding pipeline driver and the predictor:
//! 1. **Inputs:** Memory-response signals plus the executor's authoritative
//!    next-PC and the return-address register.
//! 2. **Outputs:** The predicted next fetch address and the reuse decisions.
//!
//! The driver must hold every input stable for the cycle before invoking the
//! step function; clock and reset are the step call itself.

/// Input port values sampled for one clock cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchInputs {
    /// The memory subsystem accepted a fetch request this cycle.
    pub request_accepted: bool,
    /// The memory subsystem returned data this cycle.
    pub response_valid: bool,
    /// Address the returned data corresponds to (meaningful with
    /// `response_valid`).
    pub response_addr: u64,
    /// The fetched 32-bit instruction word (meaningful with
    /// `response_valid`).
    pub response_data: u32,
    /// Authoritative next-fetch address from the execute stage.
    pub executor_next_pc: u64,
    /// Current value of the return-address register.
    pub return_addr_reg: u64,
}

/// Output port values produced for one clock cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOutputs {
    /// The unit's guess for the next fetch address, truncated to the
    /// configured address width.
    pub predicted_next_pc: u64,
    /// Whether `predicted_next_pc` is a guess rather than an address
    /// dictated by already-resolved control flow. Downstream uses this to
    /// know the fetched address may later need to be discarded.
    pub is_prediction: bool,
    /// Serve the next instruction from the upper half of the last response;
    /// no new memory request is required.
    pub reuse_half: bool,
    /// Serve the next instruction from the entire last response; no new
    /// memory request is required. Takes priority over `reuse_half`.
    pub reuse_whole: bool,
}
