/// Categorizes syntax errors for programmatic handling.
///
/// The `#[error(...)]` messages are terse. The full human-readable message
/// lives in [`SyntaxError::message`](crate::SyntaxError::message).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// The lexer produced an `Illegal` token (bad escape, bad number,
    /// unterminated string, unrecognized character, ...).
    #[error("lexical error")]
    Lexical,

    /// The parser expected one of `expected` but found something else.
    ///
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found int `1`
    /// ```
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The input ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// Selection sets, values or type annotations were nested deeper than the
    /// parser's recursion limit.
    #[error("maximum nesting depth exceeded")]
    RecursionLimitExceeded,

    /// The input bytes were not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
