//! Combinational reuse and next-address decision logic.
//!
//! One call evaluates one clock cycle: given the input ports and the state
//! committed at the end of the previous cycle, it produces the four output
//! ports and the candidate state for the next commit. The function is pure;
//! the clocked commit in [`super::predictor`] is the only caller.
//!
//! The prediction policy is deliberately cheap: sequential stepping through
//! already-observed fetch words, plus the return-address shortcut. Anything
//! it gets wrong is corrected by the executor re-driving
//! `executor_next_pc`, which this logic adopts whenever that address is
//! nowhere in the observed history.

use tracing::trace;

use crate::common::addr::AddressSpace;
use crate::common::constants::{
    COMPRESSED_INSTRUCTION_MASK, COMPRESSED_INSTRUCTION_VALUE, COMPRESSED_RETURN,
    INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32, RETURN_INSTRUCTION,
};
use crate::core::frontend::predictor::PredictorState;
use crate::core::frontend::signals::{FetchInputs, FetchOutputs};

/// Result of one combinational evaluation.
pub(crate) struct Evaluation {
    /// The four output ports for this cycle.
    pub outputs: FetchOutputs,
    /// Candidate state to commit at the clock edge.
    pub next_state: PredictorState,
    /// Whether this cycle adopted a resolved address that also discarded
    /// in-flight requests (misprediction recovery, not cold start).
    pub redirected: bool,
}

/// Whether a 16-bit parcel begins a compressed instruction.
#[inline(always)]
fn is_compressed(parcel: u16) -> bool {
    (parcel & COMPRESSED_INSTRUCTION_MASK) != COMPRESSED_INSTRUCTION_VALUE
}

/// Whether a response word indicates a register-indirect return.
///
/// Recognizes the full-width return, the compressed return in the low half,
/// and the compressed return in the high half when the low half is itself a
/// compressed instruction (otherwise the high half is the tail of a 32-bit
/// encoding, not an instruction start).
pub(crate) fn is_return_word(word: u32) -> bool {
    if word == RETURN_INSTRUCTION {
        return true;
    }
    let lo = word as u16;
    let hi = (word >> 16) as u16;
    lo == COMPRESSED_RETURN || (is_compressed(lo) && hi == COMPRESSED_RETURN)
}

/// Sequential guess for the address following `needed`, if the observed
/// history can ground one.
///
/// `needed` is first matched against observed response addresses, oldest
/// slot first; from the match the walk follows `sequential_next` links
/// toward the newest contiguous slot and guesses one step past the chain
/// end. A `needed` that is the upper-half instruction of the newest word has
/// no slot of its own and is stepped by the latched upper-parcel width.
fn sequential_guess(state: &PredictorState, needed: u64, space: &AddressSpace) -> Option<u64> {
    let slots = state.history.slots();

    if let Some(start) = state.history.observed_match(needed) {
        let mut k = start;
        loop {
            let link = slots[k].sequential_next;
            match (0..k)
                .rev()
                .find(|&j| !slots[j].ignore && slots[j].response_addr == link)
            {
                Some(j) => k = j,
                None => break,
            }
        }
        return Some(slots[k].sequential_next);
    }

    let newest = state.history.latest_observed()?;
    if state.lower_compressed && needed == space.step(newest.response_addr, INSTRUCTION_SIZE_16) {
        let width = if state.upper_compressed {
            INSTRUCTION_SIZE_16
        } else {
            INSTRUCTION_SIZE_32
        };
        return Some(space.step(needed, width));
    }
    None
}

/// Evaluates one clock cycle of the fetch front end.
///
/// Outputs are a pure function of this cycle's inputs and the previously
/// committed state; `state` itself is never mutated.
pub(crate) fn evaluate(
    state: &PredictorState,
    inputs: &FetchInputs,
    space: &AddressSpace,
) -> Evaluation {
    let mut v = *state;

    // Fold an arriving response into the ledger before anything reads it.
    if inputs.response_valid {
        let resp = space.truncate(inputs.response_addr);
        let lower = is_compressed(inputs.response_data as u16);
        let upper = is_compressed((inputs.response_data >> 16) as u16);
        let width = if lower {
            INSTRUCTION_SIZE_16
        } else {
            INSTRUCTION_SIZE_32
        };
        if v.history.record_response(resp, space.step(resp, width)) {
            v.lower_compressed = lower;
            v.upper_compressed = upper;
        } else {
            trace!(addr = resp, "dropping response for superseded request");
        }
    }

    // Outstanding-request bookkeeping. A response and a new request in the
    // same cycle leave a request outstanding.
    if inputs.request_accepted {
        v.awaiting_response = true;
    } else if inputs.response_valid {
        v.awaiting_response = false;
    }

    let needed = space.truncate(inputs.executor_next_pc);
    let mut redirected = false;

    let (predicted_next_pc, is_prediction) =
        if inputs.response_valid && is_return_word(inputs.response_data) {
            // Return-address shortcut: substitute the link register for the
            // sequential guess in the cycle the return word is observed.
            (space.truncate(inputs.return_addr_reg), true)
        } else if let Some(target) = sequential_guess(&v, needed, space) {
            (target, true)
        } else if v.history.pending_match(needed) {
            // The needed address is already in flight; keep presenting it
            // until its response lands.
            (needed, false)
        } else {
            // Redirect or cold start: adopt the resolved address and drop
            // in-flight wrong-path requests.
            redirected = v.history.latest_observed().is_some();
            if redirected {
                trace!(
                    pc = needed,
                    awaiting = state.awaiting_response,
                    "redirect: adopting resolved fetch address"
                );
            }
            v.history.discard_pending();
            (needed, false)
        };

    // Reuse decisions are grounded in the newest observed word only; an
    // exact whole-word match suppresses the half-word overlap.
    let (reuse_whole, reuse_half) = v.history.latest_observed().map_or((false, false), |slot| {
        let whole = needed == slot.response_addr;
        let half = !whole && needed == space.step(slot.response_addr, INSTRUCTION_SIZE_16);
        (whole, half)
    });

    // The fetch stage requests the address presented this cycle; open its
    // slot after the response fold so a same-cycle response lands in the
    // slot it belongs to.
    if inputs.request_accepted {
        v.history.push_request(predicted_next_pc);
    }

    v.reuse_half = reuse_half;
    v.reuse_whole = reuse_whole;

    Evaluation {
        outputs: FetchOutputs {
            predicted_next_pc,
            is_prediction,
            reuse_half,
            reuse_whole,
        },
        next_state: v,
        redirected,
    }
}
