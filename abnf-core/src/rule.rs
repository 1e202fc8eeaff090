//! Catalogue of the ABNF core rules (RFC 5234, Appendix B.1).

use std::fmt;

use phf::phf_map;

/// One of the core rules modelled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoreRule {
    Alpha,
    Bit,
    Char,
    Cr,
    Crlf,
    Ctl,
    Digit,
    Dquote,
    HexDig,
    Htab,
    Lf,
    Lwsp,
    Sp,
    Vchar,
    Wsp,
}

/// Rule names are case-insensitive in ABNF; keys are stored lowercased.
static RULES_BY_NAME: phf::Map<&'static str, CoreRule> = phf_map! {
    "alpha" => CoreRule::Alpha,
    "bit" => CoreRule::Bit,
    "char" => CoreRule::Char,
    "cr" => CoreRule::Cr,
    "crlf" => CoreRule::Crlf,
    "ctl" => CoreRule::Ctl,
    "digit" => CoreRule::Digit,
    "dquote" => CoreRule::Dquote,
    "hexdig" => CoreRule::HexDig,
    "htab" => CoreRule::Htab,
    "lf" => CoreRule::Lf,
    "lwsp" => CoreRule::Lwsp,
    "sp" => CoreRule::Sp,
    "vchar" => CoreRule::Vchar,
    "wsp" => CoreRule::Wsp,
};

/// Longest rule name, in bytes.
const MAX_NAME_LEN: usize = 6;

impl CoreRule {
    /// All core rules, in alphabetical order.
    pub const ALL: [CoreRule; 15] = [
        CoreRule::Alpha,
        CoreRule::Bit,
        CoreRule::Char,
        CoreRule::Cr,
        CoreRule::Crlf,
        CoreRule::Ctl,
        CoreRule::Digit,
        CoreRule::Dquote,
        CoreRule::HexDig,
        CoreRule::Htab,
        CoreRule::Lf,
        CoreRule::Lwsp,
        CoreRule::Sp,
        CoreRule::Vchar,
        CoreRule::Wsp,
    ];

    /// Canonical (upper-case) rule name.
    pub fn name(self) -> &'static str {
        match self {
            CoreRule::Alpha => "ALPHA",
            CoreRule::Bit => "BIT",
            CoreRule::Char => "CHAR",
            CoreRule::Cr => "CR",
            CoreRule::Crlf => "CRLF",
            CoreRule::Ctl => "CTL",
            CoreRule::Digit => "DIGIT",
            CoreRule::Dquote => "DQUOTE",
            CoreRule::HexDig => "HEXDIG",
            CoreRule::Htab => "HTAB",
            CoreRule::Lf => "LF",
            CoreRule::Lwsp => "LWSP",
            CoreRule::Sp => "SP",
            CoreRule::Vchar => "VCHAR",
            CoreRule::Wsp => "WSP",
        }
    }

    /// Right-hand side of the rule as written in RFC 5234.
    pub fn definition(self) -> &'static str {
        match self {
            CoreRule::Alpha => "%x41-5A / %x61-7A",
            CoreRule::Bit => "\"0\" / \"1\"",
            CoreRule::Char => "%x01-7F",
            CoreRule::Cr => "%x0D",
            CoreRule::Crlf => "CR LF",
            CoreRule::Ctl => "%x00-1F / %x7F",
            CoreRule::Digit => "%x30-39",
            CoreRule::Dquote => "%x22",
            CoreRule::HexDig => "DIGIT / \"A\" / \"B\" / \"C\" / \"D\" / \"E\" / \"F\"",
            CoreRule::Htab => "%x09",
            CoreRule::Lf => "%x0A",
            CoreRule::Lwsp => "*(WSP / CRLF WSP)",
            CoreRule::Sp => "%x20",
            CoreRule::Vchar => "%x21-7E",
            CoreRule::Wsp => "SP / HTAB",
        }
    }

    /// Whether `byte` on its own is a complete production of this rule.
    ///
    /// Always false for CRLF, which needs two characters. LWSP accepts a
    /// single WSP.
    pub fn matches(self, byte: u8) -> bool {
        match self {
            CoreRule::Alpha => byte.is_ascii_alphabetic(),
            CoreRule::Bit => matches!(byte, b'0' | b'1'),
            CoreRule::Char => matches!(byte, 0x01..=0x7F),
            CoreRule::Cr => byte == 0x0D,
            CoreRule::Crlf => false,
            CoreRule::Ctl => matches!(byte, 0x00..=0x1F | 0x7F),
            CoreRule::Digit => byte.is_ascii_digit(),
            CoreRule::Dquote => byte == 0x22,
            CoreRule::HexDig => matches!(byte, b'0'..=b'9' | b'A'..=b'F'),
            CoreRule::Htab => byte == 0x09,
            CoreRule::Lf => byte == 0x0A,
            CoreRule::Lwsp | CoreRule::Wsp => matches!(byte, 0x20 | 0x09),
            CoreRule::Sp => byte == 0x20,
            CoreRule::Vchar => matches!(byte, 0x21..=0x7E),
        }
    }

    /// Whether every production of this rule is exactly one character.
    pub fn is_single_char(self) -> bool {
        !matches!(self, CoreRule::Crlf | CoreRule::Lwsp)
    }

    /// Look up a rule by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<CoreRule> {
        if name.len() > MAX_NAME_LEN {
            return None;
        }
        let mut buf = [0u8; MAX_NAME_LEN];
        let lowered = &mut buf[..name.len()];
        lowered.copy_from_slice(name.as_bytes());
        lowered.make_ascii_lowercase();
        let key = std::str::from_utf8(lowered).ok()?;
        RULES_BY_NAME.get(key).copied()
    }
}

impl fmt::Display for CoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
