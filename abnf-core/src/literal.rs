//! Character literals - the leaves of every core-rule CST.
//!
//! A `CharacterLiteral` is one fixed 7-bit code point. Rule legality is not
//! encoded here; the rule enums in `cst` decide which literals they admit.

use std::fmt;

use crate::error::ConstructError;

/// One ASCII code point, `0x00..=0x7F`.
///
/// Obtained through [`CharacterLiteral::new`], the [`LITERALS`] table, or a
/// rule node's `literal()`. Never holds a byte above `0x7F`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterLiteral(u8);

/// Every character literal, indexed by code point.
pub static LITERALS: [CharacterLiteral; 128] = build_table();

const fn build_table() -> [CharacterLiteral; 128] {
    let mut table = [CharacterLiteral(0); 128];
    let mut i = 0;
    while i < table.len() {
        table[i] = CharacterLiteral(i as u8);
        i += 1;
    }
    table
}

impl CharacterLiteral {
    /// Horizontal tab, `%x09`.
    pub const HTAB: CharacterLiteral = CharacterLiteral(0x09);
    /// Linefeed, `%x0A`.
    pub const LF: CharacterLiteral = CharacterLiteral(0x0A);
    /// Carriage return, `%x0D`.
    pub const CR: CharacterLiteral = CharacterLiteral(0x0D);
    /// Space, `%x20`.
    pub const SP: CharacterLiteral = CharacterLiteral(0x20);
    /// Double quote, `%x22`.
    pub const DQUOTE: CharacterLiteral = CharacterLiteral(0x22);

    /// Validate `byte` as a character literal.
    pub const fn new(byte: u8) -> Result<Self, ConstructError> {
        if byte.is_ascii() {
            Ok(CharacterLiteral(byte))
        } else {
            Err(ConstructError::NotAscii { byte })
        }
    }

    /// Crate-internal constructor for bytes already known to be ASCII.
    #[inline]
    pub(crate) const fn from_ascii(byte: u8) -> Self {
        debug_assert!(byte.is_ascii());
        CharacterLiteral(byte)
    }

    /// Look up the shared table entry for `byte`.
    #[inline]
    pub fn get(byte: u8) -> Option<&'static CharacterLiteral> {
        LITERALS.get(byte as usize)
    }

    /// The code point as a byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The code point as a `char`.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Debug for CharacterLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterLiteral({:#04x})", self.0)
    }
}

impl TryFrom<u8> for CharacterLiteral {
    type Error = ConstructError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        CharacterLiteral::new(byte)
    }
}

impl From<CharacterLiteral> for u8 {
    #[inline]
    fn from(literal: CharacterLiteral) -> Self {
        literal.0
    }
}

impl From<CharacterLiteral> for char {
    #[inline]
    fn from(literal: CharacterLiteral) -> Self {
        literal.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_code_point() {
        for (i, literal) in LITERALS.iter().enumerate() {
            assert_eq!(literal.byte() as usize, i);
        }
    }

    #[test]
    fn test_new_accepts_ascii() {
        assert_eq!(CharacterLiteral::new(0x00).map(u8::from), Ok(0x00));
        assert_eq!(CharacterLiteral::new(0x41).map(char::from), Ok('A'));
        assert_eq!(CharacterLiteral::new(0x7F).map(u8::from), Ok(0x7F));
    }

    #[test]
    fn test_new_rejects_non_ascii() {
        assert_eq!(CharacterLiteral::new(0x80), Err(ConstructError::NotAscii { byte: 0x80 }));
        assert_eq!(CharacterLiteral::try_from(0xFF), Err(ConstructError::NotAscii { byte: 0xFF }));
    }

    #[test]
    fn test_get() {
        assert_eq!(CharacterLiteral::get(b'z').copied(), Some(CharacterLiteral(b'z')));
        assert!(CharacterLiteral::get(0x80).is_none());
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(CharacterLiteral::CR.as_char(), '\r');
        assert_eq!(CharacterLiteral::LF.as_char(), '\n');
        assert_eq!(CharacterLiteral::SP.as_char(), ' ');
        assert_eq!(CharacterLiteral::HTAB.as_char(), '\t');
        assert_eq!(CharacterLiteral::DQUOTE.as_char(), '"');
    }

    #[test]
    fn test_debug_shows_hex() {
        assert_eq!(format!("{:?}", CharacterLiteral::CR), "CharacterLiteral(0x0d)");
    }
}
