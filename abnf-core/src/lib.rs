//! ABNF Core Rules
//!
//! Concrete syntax tree nodes for the ABNF core rules (RFC 5234, Appendix B.1)
//! and a transcriber that renders any such tree back to its exact text.
//! Nodes are built through validated constructors; transcription cannot fail.
//!
//! # Architecture
//!
//! - **literal.rs** - `CharacterLiteral`, the shared table of ASCII code points
//! - **cst.rs** - Single-character rules (ALPHA, BIT, CHAR, CTL, DIGIT, VCHAR, CR, LF, SP, HTAB, DQUOTE)
//! - **composite.rs** - CRLF, HEXDIG, WSP, LWSP
//! - **node.rs** - `Node`, one enum over every rule node
//! - **rule.rs** - `CoreRule` catalogue: names, definitions, byte classes
//! - **sink.rs** - Output buffers
//! - **transcribe.rs** - `Transcribe` for every node type and for ABNF combinators
//! - **error.rs** - Construction errors

pub mod composite;
pub mod cst;
pub mod error;
pub mod literal;
pub mod node;
pub mod rule;
pub mod sink;
pub mod transcribe;

pub use composite::{Crlf, HexDig, Lwsp, LwspItem, Wsp};
pub use cst::{Alpha, Bit, Char, Cr, Ctl, Digit, Dquote, Htab, Lf, Sp, Vchar};
pub use error::ConstructError;
pub use literal::{CharacterLiteral, LITERALS};
pub use node::Node;
pub use rule::CoreRule;
pub use sink::{ByteCount, Sink};
pub use transcribe::{transcribe, Transcribe};
