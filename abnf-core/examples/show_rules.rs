// Print every core rule with its definition and rendered cases
// Run with: cargo run --example show_rules

use abnf_core::{Alpha, Bit, Char, CoreRule, Crlf, Ctl, Digit, HexDig, Lwsp, LwspItem, Transcribe, Vchar, Wsp};

/// Escape control characters so every case is visible.
fn visible(text: &str) -> String {
    text.chars().flat_map(char::escape_default).collect()
}

fn main() {
    for rule in CoreRule::ALL {
        let rendered = match rule {
            CoreRule::Alpha => Alpha::ALL.transcribe_to_string(),
            CoreRule::Bit => Bit::ALL.transcribe_to_string(),
            CoreRule::Char => Char::ALL.transcribe_to_string(),
            CoreRule::Ctl => Ctl::ALL.transcribe_to_string(),
            CoreRule::Digit => Digit::ALL.transcribe_to_string(),
            CoreRule::HexDig => HexDig::ALL.transcribe_to_string(),
            CoreRule::Vchar => Vchar::ALL.transcribe_to_string(),
            CoreRule::Wsp => [Wsp::SPACE, Wsp::TAB].transcribe_to_string(),
            CoreRule::Crlf => Crlf::new().transcribe_to_string(),
            CoreRule::Lwsp => {
                Lwsp::from_items(vec![LwspItem::Wsp(Wsp::SPACE), LwspItem::fold(Wsp::TAB)])
                    .transcribe_to_string()
            }
            single => (0u8..=0x7F)
                .filter(|&b| single.matches(b))
                .map(char::from)
                .collect(),
        };
        println!("{:<7}= {}", rule.name(), rule.definition());
        println!("         {}", visible(&rendered));
    }
}
