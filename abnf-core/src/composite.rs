//! Composite rules: sequences and alternations over other rules.

use crate::cst::{Cr, Digit, Htab, Lf, Sp};
use crate::error::ConstructError;
use crate::literal::CharacterLiteral;
use crate::rule::CoreRule;

/// `CRLF = CR LF`, the Internet newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Crlf {
    pub cr: Cr,
    pub lf: Lf,
}

impl Crlf {
    pub const RULE: CoreRule = CoreRule::Crlf;

    pub const fn new() -> Self {
        Crlf { cr: Cr, lf: Lf }
    }
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Only the upper-case letters are cases of this rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDig {
    Digit(Digit),
    A,
    B,
    C,
    D,
    E,
    F,
}

impl HexDig {
    pub const RULE: CoreRule = CoreRule::HexDig;

    /// Every case, ordered by value.
    pub const ALL: &'static [HexDig] = &[
        HexDig::Digit(Digit::X30),
        HexDig::Digit(Digit::X31),
        HexDig::Digit(Digit::X32),
        HexDig::Digit(Digit::X33),
        HexDig::Digit(Digit::X34),
        HexDig::Digit(Digit::X35),
        HexDig::Digit(Digit::X36),
        HexDig::Digit(Digit::X37),
        HexDig::Digit(Digit::X38),
        HexDig::Digit(Digit::X39),
        HexDig::A,
        HexDig::B,
        HexDig::C,
        HexDig::D,
        HexDig::E,
        HexDig::F,
    ];

    pub fn from_byte(byte: u8) -> Result<Self, ConstructError> {
        match byte {
            b'0'..=b'9' => Digit::from_byte(byte).map(HexDig::Digit),
            b'A' => Ok(HexDig::A),
            b'B' => Ok(HexDig::B),
            b'C' => Ok(HexDig::C),
            b'D' => Ok(HexDig::D),
            b'E' => Ok(HexDig::E),
            b'F' => Ok(HexDig::F),
            _ => Err(ConstructError::OutsideRule { rule: CoreRule::HexDig, byte }),
        }
    }

    /// The case whose value is `nibble` (`0..=15`).
    pub fn from_value(nibble: u8) -> Option<Self> {
        HexDig::ALL.get(nibble as usize).copied()
    }

    /// Numeric value, 0 through 15.
    pub const fn value(self) -> u8 {
        match self {
            HexDig::Digit(digit) => digit.value(),
            HexDig::A => 10,
            HexDig::B => 11,
            HexDig::C => 12,
            HexDig::D => 13,
            HexDig::E => 14,
            HexDig::F => 15,
        }
    }

    pub const fn literal(self) -> CharacterLiteral {
        match self {
            HexDig::Digit(digit) => digit.literal(),
            HexDig::A => CharacterLiteral::from_ascii(b'A'),
            HexDig::B => CharacterLiteral::from_ascii(b'B'),
            HexDig::C => CharacterLiteral::from_ascii(b'C'),
            HexDig::D => CharacterLiteral::from_ascii(b'D'),
            HexDig::E => CharacterLiteral::from_ascii(b'E'),
            HexDig::F => CharacterLiteral::from_ascii(b'F'),
        }
    }
}

impl From<Digit> for HexDig {
    fn from(digit: Digit) -> Self {
        HexDig::Digit(digit)
    }
}

impl TryFrom<u8> for HexDig {
    type Error = ConstructError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        HexDig::from_byte(byte)
    }
}

/// `WSP = SP / HTAB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wsp {
    Space(Sp),
    Tab(Htab),
}

impl Wsp {
    pub const RULE: CoreRule = CoreRule::Wsp;
    pub const SPACE: Wsp = Wsp::Space(Sp);
    pub const TAB: Wsp = Wsp::Tab(Htab);

    pub fn from_byte(byte: u8) -> Result<Self, ConstructError> {
        match byte {
            0x20 => Ok(Wsp::SPACE),
            0x09 => Ok(Wsp::TAB),
            _ => Err(ConstructError::OutsideRule { rule: CoreRule::Wsp, byte }),
        }
    }

    pub const fn literal(self) -> CharacterLiteral {
        match self {
            Wsp::Space(sp) => sp.literal(),
            Wsp::Tab(htab) => htab.literal(),
        }
    }
}

impl From<Sp> for Wsp {
    fn from(sp: Sp) -> Self {
        Wsp::Space(sp)
    }
}

impl From<Htab> for Wsp {
    fn from(htab: Htab) -> Self {
        Wsp::Tab(htab)
    }
}

impl TryFrom<u8> for Wsp {
    type Error = ConstructError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Wsp::from_byte(byte)
    }
}

/// One repetition inside LWSP: a bare WSP, or a line fold `CRLF WSP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LwspItem {
    Wsp(Wsp),
    Fold(Crlf, Wsp),
}

impl LwspItem {
    /// A line fold continuing with `wsp`.
    pub const fn fold(wsp: Wsp) -> Self {
        LwspItem::Fold(Crlf::new(), wsp)
    }
}

impl From<Wsp> for LwspItem {
    fn from(wsp: Wsp) -> Self {
        LwspItem::Wsp(wsp)
    }
}

/// `LWSP = *(WSP / CRLF WSP)`, linear whitespace with optional line folds.
///
/// May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Lwsp {
    items: Vec<LwspItem>,
}

impl Lwsp {
    pub const RULE: CoreRule = CoreRule::Lwsp;

    pub fn new() -> Self {
        Lwsp { items: Vec::new() }
    }

    pub fn from_items(items: Vec<LwspItem>) -> Self {
        Lwsp { items }
    }

    pub fn push(&mut self, item: impl Into<LwspItem>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[LwspItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any repetition is a line fold.
    pub fn is_folded(&self) -> bool {
        self.items.iter().any(|item| matches!(item, LwspItem::Fold(..)))
    }
}

impl FromIterator<LwspItem> for Lwsp {
    fn from_iter<I: IntoIterator<Item = LwspItem>>(iter: I) -> Self {
        Lwsp { items: iter.into_iter().collect() }
    }
}

impl Extend<LwspItem> for Lwsp {
    fn extend<I: IntoIterator<Item = LwspItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
