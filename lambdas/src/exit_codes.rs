//! Stable exit codes for the `lambdas` binary.

/// Demo ran to completion.
pub const OK: i32 = 0;
/// Configuration could not be loaded or output could not be written.
pub const INVALID: i32 = 1;
