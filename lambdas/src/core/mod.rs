//! Pure closure logic shared by the demo.
//!
//! Nothing here performs I/O. Every function is deterministic over its inputs
//! and returns values (or closures) that tests can inspect directly.

pub mod closures;
pub mod count;
