/// A GraphQL punctuator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Punctuator {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,
}

impl Punctuator {
    /// Maps a single source character to its punctuator, if it is one.
    ///
    /// `...` is not a single character and is never returned here.
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '&' => Self::Ampersand,
            '@' => Self::At,
            '!' => Self::Bang,
            ':' => Self::Colon,
            '}' => Self::CurlyBraceClose,
            '{' => Self::CurlyBraceOpen,
            '$' => Self::Dollar,
            '=' => Self::Equals,
            ')' => Self::ParenClose,
            '(' => Self::ParenOpen,
            '|' => Self::Pipe,
            ']' => Self::SquareBracketClose,
            '[' => Self::SquareBracketOpen,
            _ => return None,
        })
    }

    /// The source text of this punctuator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
        }
    }
}

impl std::fmt::Display for Punctuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
