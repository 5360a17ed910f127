//! Clocked fetch predictor: state registers and synchronous commit.
//!
//! [`FetchPredictor`] owns the committed register state and performs the
//! once-per-tick cycle: evaluate the combinational decision against the
//! previous commit, update statistics, and latch the candidate state. Reset
//! is synchronous and active-low; while asserted, the committed state is
//! forced to the all-zero initial value regardless of the other inputs.

use crate::common::addr::AddressSpace;
use crate::common::error::ConfigError;
use crate::config::FrontendConfig;
use crate::core::frontend::decision;
use crate::core::frontend::history::FetchHistory;
use crate::core::frontend::signals::{FetchInputs, FetchOutputs};
use crate::stats::FrontendStats;

/// The latched register state of the front end.
///
/// Covers the composite state machine (reset, idle, awaiting response,
/// predicting) as flags rather than an explicit enumeration, since several
/// of them are meaningful at once. Replaced wholesale at each clock edge;
/// there is no field-level write path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PredictorState {
    /// The three-slot fetch transaction ledger.
    pub history: FetchHistory,
    /// A fetch request is outstanding and unanswered.
    pub awaiting_response: bool,
    /// Last cycle's half-word reuse decision.
    pub reuse_half: bool,
    /// Last cycle's whole-word reuse decision.
    pub reuse_whole: bool,
    /// The low parcel of the newest observed response word is a compressed
    /// instruction, so that word also contains an instruction start at
    /// `response_addr + 2`.
    pub lower_compressed: bool,
    /// The high parcel of the newest observed response word is a compressed
    /// instruction; decides the step width past an upper-half instruction.
    pub upper_compressed: bool,
}

/// Cycle-accurate model of the instruction-fetch predictor.
///
/// Construct once with a validated configuration, then call
/// [`step`](Self::step) exactly once per simulated clock edge. The unit
/// owns its state exclusively; callers observe only the four output ports.
///
/// # Examples
///
/// ```
/// use fetchsim_core::{FetchInputs, FetchPredictor, FrontendConfig};
///
/// let mut predictor = FetchPredictor::new(&FrontendConfig::default()).unwrap();
///
/// // One reset cycle, then present the reset vector as the resolved
/// // next-fetch address.
/// let _ = predictor.step(false, &FetchInputs::default());
/// let out = predictor.step(
///     true,
///     &FetchInputs {
///         executor_next_pc: 0x1000,
///         ..FetchInputs::default()
///     },
/// );
/// assert_eq!(out.predicted_next_pc, 0x1000);
/// assert!(!out.is_prediction);
/// ```
#[derive(Clone, Debug)]
pub struct FetchPredictor {
    /// The configured fetch address space.
    space: AddressSpace,
    /// State committed at the end of the previous cycle.
    state: PredictorState,
    /// Event counters.
    stats: FrontendStats,
}

impl FetchPredictor {
    /// Builds a predictor in the reset state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddressWidth`] when the configured
    /// address width is zero or wider than 64 bits. This is the unit's only
    /// failure point; stepping never fails.
    pub fn new(config: &FrontendConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            space: AddressSpace::new(config.addr_width)?,
            state: PredictorState::default(),
            stats: FrontendStats::default(),
        })
    }

    /// Advances the unit by one clock edge.
    ///
    /// While `reset_n` is low the committed state is forced to the initial
    /// value and the outputs are the zeroed defaults, regardless of the
    /// other inputs. Otherwise one combinational evaluation runs against
    /// the previously committed state and its result is latched: outputs of
    /// cycle N depend only on inputs of cycle N and state committed at the
    /// end of cycle N−1.
    pub fn step(&mut self, reset_n: bool, inputs: &FetchInputs) -> FetchOutputs {
        if !reset_n {
            self.state = PredictorState::default();
            return FetchOutputs::default();
        }

        let eval = decision::evaluate(&self.state, inputs, &self.space);
        self.update_stats(inputs, &eval);
        self.state = eval.next_state;
        eval.outputs
    }

    /// Returns the configured address width in bits.
    pub const fn addr_width(&self) -> u32 {
        self.space.width()
    }

    /// Read-only view of the accumulated statistics.
    pub const fn stats(&self) -> &FrontendStats {
        &self.stats
    }

    /// Updates counters for one evaluated cycle.
    ///
    /// Runs before the commit so the latched reuse flags still describe the
    /// previous cycle, which is what turns multi-cycle reuse stalls into
    /// single events.
    fn update_stats(&mut self, inputs: &FetchInputs, eval: &decision::Evaluation) {
        self.stats.cycles += 1;
        if eval.outputs.is_prediction {
            self.stats.guessed_predictions += 1;
        } else {
            self.stats.resolved_adoptions += 1;
        }
        if eval.redirected {
            self.stats.redirects += 1;
        }
        if eval.outputs.reuse_half && !self.state.reuse_half {
            self.stats.reuse_half_events += 1;
        }
        if eval.outputs.reuse_whole && !self.state.reuse_whole {
            self.stats.reuse_whole_events += 1;
        }
        if inputs.response_valid && decision::is_return_word(inputs.response_data) {
            self.stats.return_shortcuts += 1;
        }
    }
}
