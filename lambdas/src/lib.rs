//! Closure syntax and capture semantics, demonstrated as an ordered transcript.
//!
//! - **[`core`]**: Pure closure logic (predicate counting, the sum closure,
//!   capture by value vs by reference). No I/O.
//! - **[`demo`]**: Runs every demonstration step in a fixed order and records
//!   each printed line into a [`transcript::Transcript`].
//!
//! The binary renders the transcript to stdout; diagnostics go to stderr via
//! [`logging`].

pub mod config;
pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod transcript;
