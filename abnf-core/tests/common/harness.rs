//! Harness for transcribing random node sequences

use crate::common::Gen;
use abnf_core::{Node, Transcribe};

/// Result of transcribing one random sequence
#[derive(Debug)]
pub struct SequenceResult {
    pub passed: bool,
    pub nodes: Vec<Node>,
    pub expected: Vec<u8>,
    pub actual: Vec<u8>,
    pub seed: u64,
}

/// Generate `len` random nodes, transcribe them as one sequence, and compare
/// against the bytes the generator predicted.
pub fn run_sequence(gen: &mut Gen, len: usize) -> SequenceResult {
    let mut nodes = Vec::with_capacity(len);
    let mut expected = Vec::new();
    for _ in 0..len {
        let (node, bytes) = gen.node();
        nodes.push(node);
        expected.extend(bytes);
    }

    let actual = nodes.transcribe_to_bytes();

    SequenceResult {
        passed: actual == expected,
        nodes,
        expected,
        actual,
        seed: gen.seed,
    }
}

impl SequenceResult {
    /// Print detailed failure info
    pub fn print_failure(&self) {
        eprintln!("\n=== FAILED ===");
        eprintln!("Seed: {} (set ABNF_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nNodes:");
        for (i, node) in self.nodes.iter().enumerate() {
            eprintln!("  {}: {:?}", i, node);
        }
        eprintln!("\nExpected: {:?}", String::from_utf8_lossy(&self.expected));
        eprintln!("Actual:   {:?}", String::from_utf8_lossy(&self.actual));
    }
}
