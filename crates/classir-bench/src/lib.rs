//! Timing harness for class IR programs.
//!
//! The harness plays the caller role the IR leaves to its users: it owns a
//! catalog of programs built from the IR, each paired with a native Rust
//! twin, checks that both compute the same results, and measures how long a
//! fixed number of invocations of each takes.

pub mod harness;
pub mod programs;

pub use harness::{run, verify, BenchReport};
pub use programs::{catalog, find, Benchmark};
