//! Output buffers for transcription.
//!
//! A sink is an append-only accumulator owned by the caller. Transcribers
//! only ever push one literal at a time, in order, and never read back.

use std::fmt;
use std::fmt::Write as _;

use crate::literal::CharacterLiteral;

/// Append-only destination for transcribed characters.
///
/// `Vec<u8>` and `Vec<u16>` are both sinks, so a fresh vector needs its
/// element type named:
///
/// ```
/// use abnf_core::{Crlf, Transcribe};
///
/// let mut out: Vec<u8> = Vec::new();
/// Crlf::new().transcribe(&mut out);
/// assert_eq!(out, b"\r\n");
/// ```
pub trait Sink {
    /// Append one character.
    fn push_literal(&mut self, literal: CharacterLiteral);
}

impl Sink for String {
    #[inline]
    fn push_literal(&mut self, literal: CharacterLiteral) {
        self.push(literal.as_char());
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn push_literal(&mut self, literal: CharacterLiteral) {
        self.push(literal.byte());
    }
}

/// UTF-16 code units. Every literal is a single unit.
impl Sink for Vec<u16> {
    #[inline]
    fn push_literal(&mut self, literal: CharacterLiteral) {
        self.push(u16::from(literal.byte()));
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn push_literal(&mut self, literal: CharacterLiteral) {
        (**self).push_literal(literal);
    }
}

/// Sink that only counts what it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCount(usize);

impl ByteCount {
    pub fn new() -> Self {
        ByteCount(0)
    }

    /// Characters pushed so far.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Sink for ByteCount {
    #[inline]
    fn push_literal(&mut self, _: CharacterLiteral) {
        self.0 += 1;
    }
}

/// Adapter writing into a `fmt::Formatter`, keeping the first error.
pub(crate) struct FmtSink<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl<'a, 'b> FmtSink<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        FmtSink { f, result: Ok(()) }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.result
    }
}

impl Sink for FmtSink<'_, '_> {
    fn push_literal(&mut self, literal: CharacterLiteral) {
        if self.result.is_ok() {
            self.result = self.f.write_char(literal.as_char());
        }
    }
}
