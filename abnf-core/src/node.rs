//! A single type over every core-rule node.

use crate::composite::{Crlf, HexDig, Lwsp, Wsp};
use crate::cst::{Alpha, Bit, Char, Cr, Ctl, Digit, Dquote, Htab, Lf, Sp, Vchar};
use crate::rule::CoreRule;

/// Any core-rule node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Alpha(Alpha),
    Bit(Bit),
    Char(Char),
    Cr(Cr),
    Crlf(Crlf),
    Ctl(Ctl),
    Digit(Digit),
    Dquote(Dquote),
    HexDig(HexDig),
    Htab(Htab),
    Lf(Lf),
    Lwsp(Lwsp),
    Sp(Sp),
    Vchar(Vchar),
    Wsp(Wsp),
}

macro_rules! node_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )+
    };
}

node_from!(Alpha, Bit, Char, Cr, Crlf, Ctl, Digit, Dquote, HexDig, Htab, Lf, Lwsp, Sp, Vchar, Wsp);

impl Node {
    /// The rule this node is a production of.
    pub fn rule(&self) -> CoreRule {
        match self {
            Node::Alpha(_) => CoreRule::Alpha,
            Node::Bit(_) => CoreRule::Bit,
            Node::Char(_) => CoreRule::Char,
            Node::Cr(_) => CoreRule::Cr,
            Node::Crlf(_) => CoreRule::Crlf,
            Node::Ctl(_) => CoreRule::Ctl,
            Node::Digit(_) => CoreRule::Digit,
            Node::Dquote(_) => CoreRule::Dquote,
            Node::HexDig(_) => CoreRule::HexDig,
            Node::Htab(_) => CoreRule::Htab,
            Node::Lf(_) => CoreRule::Lf,
            Node::Lwsp(_) => CoreRule::Lwsp,
            Node::Sp(_) => CoreRule::Sp,
            Node::Vchar(_) => CoreRule::Vchar,
            Node::Wsp(_) => CoreRule::Wsp,
        }
    }
}
