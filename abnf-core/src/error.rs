//! Construction errors.
//!
//! Transcription itself cannot fail; the only fallible step is turning a raw
//! byte into a node.

use thiserror::Error;

use crate::rule::CoreRule;

/// A byte was offered to a constructor that does not admit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// Byte above `0x7F` given to `CharacterLiteral::new`.
    #[error("byte {byte:#04x} is not ASCII")]
    NotAscii { byte: u8 },

    /// Byte outside the rule's character set.
    #[error("byte {byte:#04x} is not a valid {rule} character")]
    OutsideRule { rule: CoreRule, byte: u8 },
}

impl ConstructError {
    /// The rejected byte.
    pub fn byte(&self) -> u8 {
        match self {
            ConstructError::NotAscii { byte } => *byte,
            ConstructError::OutsideRule { byte, .. } => *byte,
        }
    }

    /// The rule that rejected the byte, if any.
    pub fn rule(&self) -> Option<CoreRule> {
        match self {
            ConstructError::NotAscii { .. } => None,
            ConstructError::OutsideRule { rule, .. } => Some(*rule),
        }
    }
}
