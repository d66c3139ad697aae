//! The demonstration sequence.
//!
//! Steps run in a fixed order and each records its lines as soon as it has
//! computed them:
//!
//! 1. Banner.
//! 2. Four zero-argument closures, invoked in declaration order.
//! 3. Two-parameter sum closure.
//! 4. Three counting formulations over the sequence, each a full scan.
//! 5. Capture by value vs by reference: build both, reassign `x`, invoke both.

use std::cell::Cell;

use tracing::{debug, info, trace};

use crate::config::{CaptureConfig, DemoConfig, SumOperands};
use crate::core::closures::{capture_by_reference, capture_by_value, sum};
use crate::core::count::{count_matching, is_greater_than_5};
use crate::transcript::{Section, Transcript};

pub const BANNER_RULE: &str =
    "===============================================================================";
pub const BANNER_TITLE: &str =
    "=== Testing and training lambda expressions.                                ===";

/// Run every step against `cfg` and return the recorded transcript.
pub fn run_demo(cfg: &DemoConfig) -> Transcript {
    let transcript = Transcript::new();
    info!(numbers = cfg.numbers.len(), "demo started");

    banner(&transcript);
    no_arg_closures(&transcript);
    sum_closure(&transcript, cfg.sum);
    count_greater_than_5(&transcript, &cfg.numbers);
    capture_modes(&transcript, cfg.capture);

    info!(lines = transcript.len(), "demo finished");
    transcript
}

fn banner(transcript: &Transcript) {
    transcript.say(Section::Banner, BANNER_RULE);
    transcript.say(Section::Banner, BANNER_TITLE);
    transcript.say(Section::Banner, BANNER_RULE);
}

fn no_arg_closures(transcript: &Transcript) {
    debug!("zero-argument closures");
    for lambda in zero_arg_closures() {
        transcript.say(Section::NoArg, lambda());
    }
}

/// Four spellings of a closure with no parameters and no captures, in
/// declaration order.
///
/// Only capture-free closures coerce to a plain `fn` pointer.
fn zero_arg_closures() -> [fn() -> &'static str; 4] {
    // Block body.
    let lambda1 = || {
        trace!("lambda1 invoked");
        "Code within lambda1 expression "
    };

    // Expression body, no braces.
    let lambda2 = || "Code within lambda2 expression ";

    // Explicit return type.
    let lambda3 = || -> &'static str { "Code within lambda3 expression " };

    // Every part spelled out, binding included.
    let lambda4: fn() -> &'static str = || -> &'static str { "Code within lambda4 expression " };

    [lambda1, lambda2, lambda3, lambda4]
}

fn sum_closure(transcript: &Transcript, operands: SumOperands) {
    let sum = sum();
    let SumOperands { lhs, rhs } = operands;
    let total = sum(lhs, rhs);
    debug!(lhs, rhs, total, "sum closure");
    transcript.say(Section::Sum, format!("sum of {lhs} and {rhs} is: {total}"));
}

fn count_greater_than_5(transcript: &Transcript, numbers: &[i32]) {
    debug!(len = numbers.len(), "counting elements greater than 5");

    let named = count_matching(numbers, is_greater_than_5);
    transcript.say(Section::Count, count_line(named));

    let annotated = count_matching(numbers, |x: i32| -> bool { x > 5 });
    transcript.say(Section::Count, count_line(annotated));

    let inferred = count_matching(numbers, |x| x > 5);
    transcript.say(Section::Count, count_line(inferred));
}

fn count_line(count: usize) -> String {
    format!("Number of elements greater than 5 is: {count}")
}

fn capture_modes(transcript: &Transcript, capture: CaptureConfig) {
    let x = Cell::new(capture.initial);
    let by_value = capture_by_value(&x);
    let by_reference = capture_by_reference(&x);

    x.set(capture.reassigned);
    debug!(
        initial = capture.initial,
        reassigned = capture.reassigned,
        "x reassigned after both closures were built"
    );

    let by_value_line = format!("Capture x by value: x={}", by_value());
    transcript.say(Section::Capture, by_value_line);
    let by_reference_line = format!("Capture x by reference: x={}", by_reference());
    transcript.say(Section::Capture, by_reference_line);
}
