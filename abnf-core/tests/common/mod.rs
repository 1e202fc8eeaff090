//! Test infrastructure for the transcriber
//!
//! Provides seeded random CST generation and failure reporting.

#![allow(dead_code, unused_imports)]

mod generators;
mod harness;

pub use generators::{single_char_node, Gen};
pub use harness::{run_sequence, SequenceResult};
