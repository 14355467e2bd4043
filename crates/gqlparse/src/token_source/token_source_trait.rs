use crate::token::Token;

/// Marker trait for anything that produces [`Token`]s one at a time.
///
/// [`Lexer`](crate::token_source::Lexer) is the implementation used for
/// source text. The parser is generic over this trait so that it can also be
/// driven by pre-built token sequences (which is how the parser tests feed it
/// tokens the lexer would never produce).
///
/// Implementors must end their sequence with exactly one
/// [`TokenKind::Eof`](crate::token::TokenKind::Eof) token.
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}
