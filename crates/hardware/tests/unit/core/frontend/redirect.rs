//! # Misprediction and Redirect Tests
//!
//! The executor's next-PC is ground truth: when it diverges from what the
//! unit predicted, the corrected address is adopted the following cycle,
//! in-flight wrong-path requests are discarded, and the unit keeps running
//! with no stuck state.

use crate::common::builder::CycleBuilder;
use crate::common::harness::{COMPRESSED_PAIR, FULL_WIDTH_OP, TestBench};

/// The divergence scenario: the unit guessed sequentially, the executor
/// resolved a taken branch elsewhere.
#[test]
fn diverging_executor_address_is_adopted() {
    let mut bench = TestBench::new();
    let out = bench.boot(0x1000, FULL_WIDTH_OP);
    assert_eq!(out.predicted_next_pc, 0x1004, "sequential guess first");
    assert!(out.is_prediction);

    // The instruction at 0x1000 was a taken branch to 0x2000.
    let out = bench.cycle(&CycleBuilder::new().executor(0x2000).build());
    assert_eq!(out.predicted_next_pc, 0x2000);
    assert!(
        !out.is_prediction,
        "the corrected address is resolved, not guessed"
    );
    assert!(!out.reuse_half && !out.reuse_whole);
}

/// After the redirect the unit fetches down the corrected path exactly as
/// it would from a cold start: no stuck state.
#[test]
fn unit_continues_down_corrected_path() {
    let mut bench = TestBench::new();
    let _ = bench.boot(0x1000, FULL_WIDTH_OP);
    let _ = bench.cycle(
        &CycleBuilder::new()
            .executor(0x2000)
            .request_accepted()
            .build(),
    );

    let out = bench.cycle(
        &CycleBuilder::new()
            .executor(0x2000)
            .response(0x2000, COMPRESSED_PAIR)
            .build(),
    );
    assert_eq!(out.predicted_next_pc, 0x2002);
    assert!(out.is_prediction, "sequential guessing resumes immediately");
    assert!(out.reuse_whole, "the corrected word is in hand once observed");
}

/// A response for a request discarded by a redirect must never be folded
/// into the history.
#[test]
fn wrong_path_response_is_dropped() {
    let mut bench = TestBench::new();
    let _ = bench.boot(0x1000, FULL_WIDTH_OP);

    // Fire the sequential guess 0x1004, then redirect to 0x2000 while it is
    // still in flight.
    let _ = bench.cycle(
        &CycleBuilder::new()
            .executor(0x1000)
            .request_accepted()
            .build(),
    );
    let _ = bench.cycle(
        &CycleBuilder::new()
            .executor(0x2000)
            .request_accepted()
            .build(),
    );

    // The stale 0x1004 response arrives late, after the redirect.
    let _ = bench.cycle(
        &CycleBuilder::new()
            .executor(0x2000)
            .response(0x1004, COMPRESSED_PAIR)
            .build(),
    );

    // Were the stale word folded in, 0x1004 would now ground a whole-word
    // reuse and a sequential guess.
    let out = bench.cycle(&CycleBuilder::new().executor(0x1004).build());
    assert!(
        !out.reuse_whole && !out.reuse_half,
        "discarded requests must not become reusable data"
    );
    assert!(!out.is_prediction, "0x1004 is adopted as resolved, not walked");
    assert_eq!(out.predicted_next_pc, 0x1004);
}

/// Redirects are counted once per adoption that discarded history; the
/// cold-start adoption is not a redirect.
#[test]
fn redirect_statistics() {
    let mut bench = TestBench::new();
    let _ = bench.boot(0x1000, FULL_WIDTH_OP);
    assert_eq!(
        bench.predictor.stats().redirects,
        0,
        "cold start adopts without discarding anything observed"
    );

    let _ = bench.cycle(&CycleBuilder::new().executor(0x2000).build());
    assert_eq!(bench.predictor.stats().redirects, 1);

    let _ = bench.cycle(&CycleBuilder::new().executor(0x3000).build());
    assert_eq!(bench.predictor.stats().redirects, 2);
}
