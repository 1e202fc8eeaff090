//! Variant rules over single characters.
//!
//! Each rule is a fieldless enum whose discriminants are the code points the
//! rule admits, so the case list doubles as the rule's character table. The
//! enums are closed: a byte outside the rule has no case, and the only way to
//! get a node from a raw byte is through `from_byte`.

use crate::error::ConstructError;
use crate::literal::CharacterLiteral;
use crate::rule::CoreRule;

/// Declares a single-character variant rule from its table of cases.
macro_rules! literal_rule {
    (
        $(#[$meta:meta])*
        $name:ident => $rule:ident {
            $($variant:ident = $byte:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $byte,)+
        }

        impl $name {
            /// Every case of the rule, in code-point order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The rule this node type belongs to.
            pub const RULE: CoreRule = CoreRule::$rule;

            /// The literal this case stands for.
            #[inline]
            pub const fn literal(self) -> CharacterLiteral {
                match self {
                    $($name::$variant => CharacterLiteral::from_ascii($byte),)+
                }
            }

            /// The code point of this case.
            #[inline]
            pub const fn byte(self) -> u8 {
                self.literal().byte()
            }

            /// Build the case for `byte`, rejecting bytes the rule does not admit.
            pub fn from_byte(byte: u8) -> Result<Self, ConstructError> {
                match byte {
                    $($byte => Ok($name::$variant),)+
                    _ => Err(ConstructError::OutsideRule { rule: CoreRule::$rule, byte }),
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ConstructError;

            fn try_from(byte: u8) -> Result<Self, Self::Error> {
                $name::from_byte(byte)
            }
        }

        impl TryFrom<CharacterLiteral> for $name {
            type Error = ConstructError;

            fn try_from(literal: CharacterLiteral) -> Result<Self, Self::Error> {
                $name::from_byte(literal.byte())
            }
        }

        impl From<$name> for CharacterLiteral {
            #[inline]
            fn from(node: $name) -> Self {
                node.literal()
            }
        }
    };
}

literal_rule! {
    /// `ALPHA = %x41-5A / %x61-7A`
    Alpha => Alpha {
        X41 = 0x41, X42 = 0x42, X43 = 0x43, X44 = 0x44, X45 = 0x45, X46 = 0x46,
        X47 = 0x47, X48 = 0x48, X49 = 0x49, X4A = 0x4A, X4B = 0x4B, X4C = 0x4C,
        X4D = 0x4D, X4E = 0x4E, X4F = 0x4F, X50 = 0x50, X51 = 0x51, X52 = 0x52,
        X53 = 0x53, X54 = 0x54, X55 = 0x55, X56 = 0x56, X57 = 0x57, X58 = 0x58,
        X59 = 0x59, X5A = 0x5A, X61 = 0x61, X62 = 0x62, X63 = 0x63, X64 = 0x64,
        X65 = 0x65, X66 = 0x66, X67 = 0x67, X68 = 0x68, X69 = 0x69, X6A = 0x6A,
        X6B = 0x6B, X6C = 0x6C, X6D = 0x6D, X6E = 0x6E, X6F = 0x6F, X70 = 0x70,
        X71 = 0x71, X72 = 0x72, X73 = 0x73, X74 = 0x74, X75 = 0x75, X76 = 0x76,
        X77 = 0x77, X78 = 0x78, X79 = 0x79, X7A = 0x7A,
    }
}

literal_rule! {
    /// `BIT = "0" / "1"`
    Bit => Bit {
        Zero = 0x30,
        One = 0x31,
    }
}

literal_rule! {
    /// `CHAR = %x01-7F`, any 7-bit character except NUL.
    Char => Char {
        X01 = 0x01, X02 = 0x02, X03 = 0x03, X04 = 0x04, X05 = 0x05, X06 = 0x06,
        X07 = 0x07, X08 = 0x08, X09 = 0x09, X0A = 0x0A, X0B = 0x0B, X0C = 0x0C,
        X0D = 0x0D, X0E = 0x0E, X0F = 0x0F, X10 = 0x10, X11 = 0x11, X12 = 0x12,
        X13 = 0x13, X14 = 0x14, X15 = 0x15, X16 = 0x16, X17 = 0x17, X18 = 0x18,
        X19 = 0x19, X1A = 0x1A, X1B = 0x1B, X1C = 0x1C, X1D = 0x1D, X1E = 0x1E,
        X1F = 0x1F, X20 = 0x20, X21 = 0x21, X22 = 0x22, X23 = 0x23, X24 = 0x24,
        X25 = 0x25, X26 = 0x26, X27 = 0x27, X28 = 0x28, X29 = 0x29, X2A = 0x2A,
        X2B = 0x2B, X2C = 0x2C, X2D = 0x2D, X2E = 0x2E, X2F = 0x2F, X30 = 0x30,
        X31 = 0x31, X32 = 0x32, X33 = 0x33, X34 = 0x34, X35 = 0x35, X36 = 0x36,
        X37 = 0x37, X38 = 0x38, X39 = 0x39, X3A = 0x3A, X3B = 0x3B, X3C = 0x3C,
        X3D = 0x3D, X3E = 0x3E, X3F = 0x3F, X40 = 0x40, X41 = 0x41, X42 = 0x42,
        X43 = 0x43, X44 = 0x44, X45 = 0x45, X46 = 0x46, X47 = 0x47, X48 = 0x48,
        X49 = 0x49, X4A = 0x4A, X4B = 0x4B, X4C = 0x4C, X4D = 0x4D, X4E = 0x4E,
        X4F = 0x4F, X50 = 0x50, X51 = 0x51, X52 = 0x52, X53 = 0x53, X54 = 0x54,
        X55 = 0x55, X56 = 0x56, X57 = 0x57, X58 = 0x58, X59 = 0x59, X5A = 0x5A,
        X5B = 0x5B, X5C = 0x5C, X5D = 0x5D, X5E = 0x5E, X5F = 0x5F, X60 = 0x60,
        X61 = 0x61, X62 = 0x62, X63 = 0x63, X64 = 0x64, X65 = 0x65, X66 = 0x66,
        X67 = 0x67, X68 = 0x68, X69 = 0x69, X6A = 0x6A, X6B = 0x6B, X6C = 0x6C,
        X6D = 0x6D, X6E = 0x6E, X6F = 0x6F, X70 = 0x70, X71 = 0x71, X72 = 0x72,
        X73 = 0x73, X74 = 0x74, X75 = 0x75, X76 = 0x76, X77 = 0x77, X78 = 0x78,
        X79 = 0x79, X7A = 0x7A, X7B = 0x7B, X7C = 0x7C, X7D = 0x7D, X7E = 0x7E,
        X7F = 0x7F,
    }
}

literal_rule! {
    /// `CTL = %x00-1F / %x7F`
    Ctl => Ctl {
        X00 = 0x00, X01 = 0x01, X02 = 0x02, X03 = 0x03, X04 = 0x04, X05 = 0x05,
        X06 = 0x06, X07 = 0x07, X08 = 0x08, X09 = 0x09, X0A = 0x0A, X0B = 0x0B,
        X0C = 0x0C, X0D = 0x0D, X0E = 0x0E, X0F = 0x0F, X10 = 0x10, X11 = 0x11,
        X12 = 0x12, X13 = 0x13, X14 = 0x14, X15 = 0x15, X16 = 0x16, X17 = 0x17,
        X18 = 0x18, X19 = 0x19, X1A = 0x1A, X1B = 0x1B, X1C = 0x1C, X1D = 0x1D,
        X1E = 0x1E, X1F = 0x1F, X7F = 0x7F,
    }
}

literal_rule! {
    /// `DIGIT = %x30-39`
    Digit => Digit {
        X30 = 0x30, X31 = 0x31, X32 = 0x32, X33 = 0x33, X34 = 0x34,
        X35 = 0x35, X36 = 0x36, X37 = 0x37, X38 = 0x38, X39 = 0x39,
    }
}

literal_rule! {
    /// `VCHAR = %x21-7E`, the visible (printing) characters.
    Vchar => Vchar {
        X21 = 0x21, X22 = 0x22, X23 = 0x23, X24 = 0x24, X25 = 0x25, X26 = 0x26,
        X27 = 0x27, X28 = 0x28, X29 = 0x29, X2A = 0x2A, X2B = 0x2B, X2C = 0x2C,
        X2D = 0x2D, X2E = 0x2E, X2F = 0x2F, X30 = 0x30, X31 = 0x31, X32 = 0x32,
        X33 = 0x33, X34 = 0x34, X35 = 0x35, X36 = 0x36, X37 = 0x37, X38 = 0x38,
        X39 = 0x39, X3A = 0x3A, X3B = 0x3B, X3C = 0x3C, X3D = 0x3D, X3E = 0x3E,
        X3F = 0x3F, X40 = 0x40, X41 = 0x41, X42 = 0x42, X43 = 0x43, X44 = 0x44,
        X45 = 0x45, X46 = 0x46, X47 = 0x47, X48 = 0x48, X49 = 0x49, X4A = 0x4A,
        X4B = 0x4B, X4C = 0x4C, X4D = 0x4D, X4E = 0x4E, X4F = 0x4F, X50 = 0x50,
        X51 = 0x51, X52 = 0x52, X53 = 0x53, X54 = 0x54, X55 = 0x55, X56 = 0x56,
        X57 = 0x57, X58 = 0x58, X59 = 0x59, X5A = 0x5A, X5B = 0x5B, X5C = 0x5C,
        X5D = 0x5D, X5E = 0x5E, X5F = 0x5F, X60 = 0x60, X61 = 0x61, X62 = 0x62,
        X63 = 0x63, X64 = 0x64, X65 = 0x65, X66 = 0x66, X67 = 0x67, X68 = 0x68,
        X69 = 0x69, X6A = 0x6A, X6B = 0x6B, X6C = 0x6C, X6D = 0x6D, X6E = 0x6E,
        X6F = 0x6F, X70 = 0x70, X71 = 0x71, X72 = 0x72, X73 = 0x73, X74 = 0x74,
        X75 = 0x75, X76 = 0x76, X77 = 0x77, X78 = 0x78, X79 = 0x79, X7A = 0x7A,
        X7B = 0x7B, X7C = 0x7C, X7D = 0x7D, X7E = 0x7E,
    }
}

impl Bit {
    /// `true` for `One`.
    #[inline]
    pub const fn value(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl Digit {
    /// Numeric value of the digit, 0 through 9.
    #[inline]
    pub const fn value(self) -> u8 {
        self.byte() - b'0'
    }
}

impl Alpha {
    /// True for `A`-`Z`.
    #[inline]
    pub const fn is_uppercase(self) -> bool {
        self.byte().is_ascii_uppercase()
    }
}

/// Declares a rule that admits exactly one character.
macro_rules! single_literal_rule {
    (
        $(#[$meta:meta])*
        $name:ident => $rule:ident = $literal:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name;

        impl $name {
            /// The only literal this rule admits.
            pub const LITERAL: CharacterLiteral = $literal;

            /// The rule this node type belongs to.
            pub const RULE: CoreRule = CoreRule::$rule;

            #[inline]
            pub const fn literal(self) -> CharacterLiteral {
                Self::LITERAL
            }

            pub fn from_byte(byte: u8) -> Result<Self, ConstructError> {
                if byte == Self::LITERAL.byte() {
                    Ok($name)
                } else {
                    Err(ConstructError::OutsideRule { rule: CoreRule::$rule, byte })
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ConstructError;

            fn try_from(byte: u8) -> Result<Self, Self::Error> {
                $name::from_byte(byte)
            }
        }

        impl From<$name> for CharacterLiteral {
            #[inline]
            fn from(_: $name) -> Self {
                $name::LITERAL
            }
        }
    };
}

single_literal_rule! {
    /// `CR = %x0D`, carriage return.
    Cr => Cr = CharacterLiteral::CR
}

single_literal_rule! {
    /// `LF = %x0A`, linefeed.
    Lf => Lf = CharacterLiteral::LF
}

single_literal_rule! {
    /// `SP = %x20`
    Sp => Sp = CharacterLiteral::SP
}

single_literal_rule! {
    /// `HTAB = %x09`, horizontal tab.
    Htab => Htab = CharacterLiteral::HTAB
}

single_literal_rule! {
    /// `DQUOTE = %x22`, double quote.
    Dquote => Dquote = CharacterLiteral::DQUOTE
}
