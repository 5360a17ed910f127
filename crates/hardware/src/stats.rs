//! Front-end statistics collection and reporting.
//!
//! This module tracks what the predictor did over a run. It provides:
//! 1. **Cycle Counts:** Evaluated cycles outside reset.
//! 2. **Prediction Mix:** Guessed predictions versus resolved adoptions.
//! 3. **Reuse Events:** Half-word and whole-word reuse bursts (edge-counted,
//!    so a multi-cycle stall counts once).
//! 4. **Return Shortcuts:** Cycles in which a return word substituted the
//!    return-address register.

/// Statistics counters for the fetch front end.
///
/// Counters are updated once per evaluated clock cycle by the predictor;
/// reset cycles are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontendStats {
    /// Total clock cycles evaluated while out of reset.
    pub cycles: u64,
    /// Cycles whose predicted address was a guess (`is_prediction` high).
    pub guessed_predictions: u64,
    /// Cycles whose predicted address was dictated by resolved control flow.
    pub resolved_adoptions: u64,
    /// Redirects: resolved adoptions that also discarded in-flight requests.
    pub redirects: u64,
    /// Rising edges of the half-word reuse output.
    pub reuse_half_events: u64,
    /// Rising edges of the whole-word reuse output.
    pub reuse_whole_events: u64,
    /// Return words observed, each substituting the return-address register.
    pub return_shortcuts: u64,
}

impl FrontendStats {
    /// Fraction of evaluated cycles whose output was a guess.
    ///
    /// Returns 0.0 before any cycle has been evaluated.
    pub fn guess_rate(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.guessed_predictions as f64 / self.cycles as f64
    }

    /// Prints all counters to stdout in the simulator's report style.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("FETCH FRONT-END STATISTICS");
        println!("==========================================================");
        println!("cycles                   {}", self.cycles);
        println!("predictions.guessed      {}", self.guessed_predictions);
        println!("predictions.resolved     {}", self.resolved_adoptions);
        println!("predictions.guess_rate   {:.4}", self.guess_rate());
        println!("redirects                {}", self.redirects);
        println!("reuse.half_events        {}", self.reuse_half_events);
        println!("reuse.whole_events       {}", self.reuse_whole_events);
        println!("return_shortcuts         {}", self.return_shortcuts);
        println!("----------------------------------------------------------");
    }
}
