//! Closure constructors for the sum and capture demonstrations.
//!
//! `x` is modeled as a [`Cell<i32>`] so it can be reassigned while a closure
//! still holds a shared reference to it.

use std::cell::Cell;

/// Two-parameter closure returning `a + b` with native `i32` addition.
pub fn sum() -> impl Fn(i32, i32) -> i32 {
    |a: i32, b: i32| -> i32 { a + b }
}

/// Closure that copies the current value of `x` at construction time.
///
/// The returned closure borrows nothing, so it stays valid after `x` is
/// reassigned or dropped.
pub fn capture_by_value(x: &Cell<i32>) -> impl Fn() -> i32 + use<> {
    let snapshot = x.get();
    move || snapshot
}

/// Closure that reads `x` at invocation time.
pub fn capture_by_reference(x: &Cell<i32>) -> impl Fn() -> i32 + '_ {
    move || x.get()
}
