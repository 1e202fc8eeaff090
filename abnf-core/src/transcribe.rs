//! Transcriber: renders CST nodes back to their exact text.
//!
//! Every node type implements [`Transcribe`]. Variant rules dispatch on their
//! case with an exhaustive `match`; composite rules delegate to their parts in
//! grammar order. Transcribers hold no state, so any node can be transcribed
//! from any thread as long as each sink has a single writer.
//!
//! ```
//! use abnf_core::{Crlf, Digit, HexDig, Transcribe};
//!
//! let mut out = String::new();
//! HexDig::A.transcribe(&mut out);
//! Digit::X37.transcribe(&mut out);
//! Crlf::new().transcribe(&mut out);
//! assert_eq!(out, "A7\r\n");
//! ```

use std::fmt;

use crate::composite::{Crlf, HexDig, Lwsp, LwspItem, Wsp};
use crate::cst::{Alpha, Bit, Char, Cr, Ctl, Digit, Dquote, Htab, Lf, Sp, Vchar};
use crate::literal::CharacterLiteral;
use crate::node::Node;
use crate::sink::{ByteCount, FmtSink, Sink};

/// Render a node onto a sink.
pub trait Transcribe {
    /// Append this node's text to `sink`.
    ///
    /// Appends unconditionally: transcribing the same node twice writes its
    /// text twice.
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S);

    fn transcribe_to_string(&self) -> String {
        let mut out = String::new();
        self.transcribe(&mut out);
        out
    }

    fn transcribe_to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.transcribe(&mut out);
        out
    }

    /// Number of characters `transcribe` would append.
    fn transcribed_len(&self) -> usize {
        let mut count = ByteCount::new();
        self.transcribe(&mut count);
        count.get()
    }
}

/// Free-function form of [`Transcribe::transcribe`].
#[inline]
pub fn transcribe<T, S>(node: &T, sink: &mut S)
where
    T: Transcribe + ?Sized,
    S: Sink + ?Sized,
{
    node.transcribe(sink);
}

// ============================================================================
// Literals
// ============================================================================

impl Transcribe for CharacterLiteral {
    #[inline]
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.push_literal(*self);
    }
}

/// Single-character rules resolve their case to a literal, then append it.
macro_rules! literal_transcriber {
    ($($rule:ty),+ $(,)?) => {
        $(
            impl Transcribe for $rule {
                #[inline]
                fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
                    self.literal().transcribe(sink);
                }
            }
        )+
    };
}

literal_transcriber!(Alpha, Bit, Char, Ctl, Digit, Vchar, Cr, Lf, Sp, Htab, Dquote);

// ============================================================================
// Composites
// ============================================================================

impl Transcribe for HexDig {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        match self {
            HexDig::Digit(digit) => digit.transcribe(sink),
            HexDig::A
            | HexDig::B
            | HexDig::C
            | HexDig::D
            | HexDig::E
            | HexDig::F => self.literal().transcribe(sink),
        }
    }
}

impl Transcribe for Wsp {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        match self {
            Wsp::Space(sp) => sp.transcribe(sink),
            Wsp::Tab(htab) => htab.transcribe(sink),
        }
    }
}

impl Transcribe for Crlf {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.cr.transcribe(sink);
        self.lf.transcribe(sink);
    }
}

impl Transcribe for LwspItem {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        match self {
            LwspItem::Wsp(wsp) => wsp.transcribe(sink),
            LwspItem::Fold(crlf, wsp) => {
                crlf.transcribe(sink);
                wsp.transcribe(sink);
            }
        }
    }
}

impl Transcribe for Lwsp {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.items().transcribe(sink);
    }
}

impl Transcribe for Node {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        match self {
            Node::Alpha(node) => node.transcribe(sink),
            Node::Bit(node) => node.transcribe(sink),
            Node::Char(node) => node.transcribe(sink),
            Node::Cr(node) => node.transcribe(sink),
            Node::Crlf(node) => node.transcribe(sink),
            Node::Ctl(node) => node.transcribe(sink),
            Node::Digit(node) => node.transcribe(sink),
            Node::Dquote(node) => node.transcribe(sink),
            Node::HexDig(node) => node.transcribe(sink),
            Node::Htab(node) => node.transcribe(sink),
            Node::Lf(node) => node.transcribe(sink),
            Node::Lwsp(node) => node.transcribe(sink),
            Node::Sp(node) => node.transcribe(sink),
            Node::Vchar(node) => node.transcribe(sink),
            Node::Wsp(node) => node.transcribe(sink),
        }
    }
}

// ============================================================================
// Structural combinators: concatenation, repetition, optional
// ============================================================================

impl<T: Transcribe + ?Sized> Transcribe for &T {
    #[inline]
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        (**self).transcribe(sink);
    }
}

impl<T: Transcribe + ?Sized> Transcribe for Box<T> {
    #[inline]
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        (**self).transcribe(sink);
    }
}

/// `[ element ]` - nothing when absent.
impl<T: Transcribe> Transcribe for Option<T> {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        if let Some(node) = self {
            node.transcribe(sink);
        }
    }
}

/// `*element` - each repetition in order.
impl<T: Transcribe> Transcribe for [T] {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        for node in self {
            node.transcribe(sink);
        }
    }
}

impl<T: Transcribe, const N: usize> Transcribe for [T; N] {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.as_slice().transcribe(sink);
    }
}

impl<T: Transcribe> Transcribe for Vec<T> {
    fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.as_slice().transcribe(sink);
    }
}

/// Concatenation: fields left to right.
macro_rules! tuple_transcriber {
    ($($name:ident)+) => {
        impl<$($name: Transcribe),+> Transcribe for ($($name,)+) {
            #[allow(non_snake_case)]
            fn transcribe<S: Sink + ?Sized>(&self, sink: &mut S) {
                let ($($name,)+) = self;
                $($name.transcribe(sink);)+
            }
        }
    };
}

tuple_transcriber!(A);
tuple_transcriber!(A B);
tuple_transcriber!(A B C);
tuple_transcriber!(A B C D);
tuple_transcriber!(A B C D E);
tuple_transcriber!(A B C D E F);

// ============================================================================
// Display
// ============================================================================

macro_rules! display_via_transcriber {
    ($($node:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut sink = FmtSink::new(f);
                    self.transcribe(&mut sink);
                    sink.finish()
                }
            }
        )+
    };
}

display_via_transcriber!(
    CharacterLiteral,
    Alpha,
    Bit,
    Char,
    Ctl,
    Digit,
    Vchar,
    Cr,
    Lf,
    Sp,
    Htab,
    Dquote,
    HexDig,
    Wsp,
    Crlf,
    LwspItem,
    Lwsp,
    Node,
);
