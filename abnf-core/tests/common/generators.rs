//! Stochastic CST generators
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.
//! Every generated node comes paired with the bytes it must transcribe to,
//! worked out from the chosen code points rather than from the transcriber.

use abnf_core::{
    Alpha, Bit, Char, CoreRule, Cr, Crlf, Ctl, Digit, Dquote, HexDig, Htab, Lf, Lwsp, LwspItem,
    Node, Sp, Vchar, Wsp,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("ABNF_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| rand::random());
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random byte admitted by a single-character rule
    pub fn byte_for(&mut self, rule: CoreRule) -> u8 {
        let candidates: Vec<u8> = (0u8..=0x7F).filter(|&b| rule.matches(b)).collect();
        candidates[self.rng.gen_range(0..candidates.len())]
    }

    /// Random WSP and its byte
    pub fn wsp(&mut self) -> (Wsp, u8) {
        if self.chance(0.5) {
            (Wsp::SPACE, b' ')
        } else {
            (Wsp::TAB, b'\t')
        }
    }

    /// Random LWSP, folds included, and its bytes
    pub fn lwsp(&mut self) -> (Lwsp, Vec<u8>) {
        let mut lwsp = Lwsp::new();
        let mut expected = Vec::new();
        for _ in 0..self.geometric(0.7) {
            let (wsp, byte) = self.wsp();
            if self.chance(0.3) {
                lwsp.push(LwspItem::fold(wsp));
                expected.extend_from_slice(b"\r\n");
            } else {
                lwsp.push(wsp);
            }
            expected.push(byte);
        }
        (lwsp, expected)
    }

    /// Random node of any core rule, and its bytes
    pub fn node(&mut self) -> (Node, Vec<u8>) {
        let rule = CoreRule::ALL[self.rng.gen_range(0..CoreRule::ALL.len())];
        match rule {
            CoreRule::Crlf => (Node::Crlf(Crlf::new()), b"\r\n".to_vec()),
            CoreRule::Lwsp => {
                let (lwsp, expected) = self.lwsp();
                (Node::Lwsp(lwsp), expected)
            }
            _ => {
                let byte = self.byte_for(rule);
                (single_char_node(rule, byte), vec![byte])
            }
        }
    }
}

/// Build the node for a single-character rule. Panics if the byte is illegal.
pub fn single_char_node(rule: CoreRule, byte: u8) -> Node {
    fn build<T>(result: Result<T, abnf_core::ConstructError>) -> T {
        result.unwrap_or_else(|err| panic!("generator produced an illegal node: {}", err))
    }

    match rule {
        CoreRule::Alpha => Node::Alpha(build(Alpha::from_byte(byte))),
        CoreRule::Bit => Node::Bit(build(Bit::from_byte(byte))),
        CoreRule::Char => Node::Char(build(Char::from_byte(byte))),
        CoreRule::Cr => Node::Cr(build(Cr::from_byte(byte))),
        CoreRule::Ctl => Node::Ctl(build(Ctl::from_byte(byte))),
        CoreRule::Digit => Node::Digit(build(Digit::from_byte(byte))),
        CoreRule::Dquote => Node::Dquote(build(Dquote::from_byte(byte))),
        CoreRule::HexDig => Node::HexDig(build(HexDig::from_byte(byte))),
        CoreRule::Htab => Node::Htab(build(Htab::from_byte(byte))),
        CoreRule::Lf => Node::Lf(build(Lf::from_byte(byte))),
        CoreRule::Sp => Node::Sp(build(Sp::from_byte(byte))),
        CoreRule::Vchar => Node::Vchar(build(Vchar::from_byte(byte))),
        CoreRule::Wsp => Node::Wsp(build(Wsp::from_byte(byte))),
        CoreRule::Lwsp => {
            let mut lwsp = Lwsp::new();
            lwsp.push(build(Wsp::from_byte(byte)));
            Node::Lwsp(lwsp)
        }
        CoreRule::Crlf => panic!("CRLF is not a single-character rule"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.node(), g2.node());
            assert_eq!(g1.geometric(0.9), g2.geometric(0.9));
        }
    }

    #[test]
    fn test_byte_for_stays_in_rule() {
        let mut gen = Gen::new(7);
        for rule in CoreRule::ALL.into_iter().filter(|r| r.is_single_char()) {
            for _ in 0..20 {
                assert!(rule.matches(gen.byte_for(rule)));
            }
        }
    }
}
