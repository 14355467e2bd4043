use crate::token::Punctuator;
use crate::token::TokenKind;
use std::borrow::Cow;

/// A single lexical token.
///
/// `line` starts at 1. `position` is the 1-based column, counted in runes
/// (not bytes), of the token's first rune on that line.
///
/// The `'src` lifetime allows zero-copy lexing: names, numbers and strings
/// without escape sequences borrow directly from the source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub literal: Cow<'src, str>,
    pub line: usize,
    pub position: usize,
}

impl<'src> Token<'src> {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<Cow<'src, str>>,
        line: usize,
        position: usize,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            position,
        }
    }

    /// Convenience constructor for a punctuator token whose literal is the
    /// punctuator's own source text.
    pub fn punctuator(punctuator: Punctuator, line: usize, position: usize) -> Self {
        Self::new(
            TokenKind::Punctuator(punctuator),
            punctuator.as_str(),
            line,
            position,
        )
    }

    /// Returns `true` if this is a [`TokenKind::Name`] token whose literal is
    /// exactly `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.literal == keyword
    }
}
