use crate::token::Punctuator;

/// The kind of a [`Token`](crate::token::Token).
///
/// `true`, `false`, `null` and every other keyword are lexed as plain
/// [`TokenKind::Name`] tokens. The parser decides what a name means based on
/// where it appears.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Names and punctuation
    // =========================================================================
    /// A name matching `[A-Za-z_][A-Za-z0-9_]*`.
    Name,
    /// One of the GraphQL punctuators.
    Punctuator(Punctuator),

    // =========================================================================
    // Literals
    // =========================================================================
    /// An integer literal. The token literal keeps the optional `-` sign.
    IntValue,
    /// A float literal. The token literal keeps the optional `-` sign.
    FloatValue,
    /// A double-quoted string. The token literal is the decoded content.
    StringValue,
    /// A `"""`-delimited block string. The token literal is the content with
    /// one leading and one trailing line break removed.
    BlockStringValue,

    // =========================================================================
    // Terminals
    // =========================================================================
    /// A malformed token.
    ///
    /// The token literal is a human-readable diagnostic, except when the lexer
    /// encountered a character that cannot start any token. In that case the
    /// literal is the offending character itself.
    Illegal,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// A short, human-readable description of this kind of token for use in
    /// error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Punctuator(p) => p.as_str(),
            Self::IntValue => "int",
            Self::FloatValue => "float",
            Self::StringValue => "string",
            Self::BlockStringValue => "block string",
            Self::Illegal => "illegal token",
            Self::Eof => "end of input",
        }
    }

    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        *self == Self::Punctuator(punctuator)
    }
}
