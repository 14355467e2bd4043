//! A rune-level lexer over `&str` input.
//!
//! The lexer is zero-copy wherever it can be: names, numbers, strings without
//! escape sequences and block strings without `\"""` all borrow their literal
//! directly from the source text. Only strings that need decoding allocate.
//!
//! # Usage
//!
//! ```rust
//! use gqlparse::token::TokenKind;
//! use gqlparse::token_source::Lexer;
//!
//! let kinds: Vec<TokenKind> =
//!     Lexer::new("{ name }").map(|token| token.kind).collect();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, EOF
//! ```

use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Lexes GraphQL source text into [`Token`]s.
///
/// Call [`Lexer::scan`] repeatedly until it returns a
/// [`TokenKind::Eof`] token, or use the lexer as an [`Iterator`], which yields
/// the `Eof` token exactly once and then ends.
///
/// Malformed input never panics or aborts the lexer; it produces a
/// [`TokenKind::Illegal`] token and scanning can continue after it.
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    offset: usize,

    /// Current 1-based line number.
    line: usize,

    /// Number of runes consumed so far on the current line.
    column: usize,

    /// Whether the previous character was `\r`, so that a following `\n` is
    /// not counted as a second line break.
    last_char_was_cr: bool,

    /// Whether the `Eof` token has already been handed out by the iterator.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates line/column tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as exactly one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.line += 1;
                self.column = 0;
            },
            '\r' => {
                self.line += 1;
                self.column = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.column += 1;
                self.last_char_was_cr = false;
            },
        }

        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn illegal(&self, message: String, line: usize, position: usize) -> Token<'src> {
        Token::new(TokenKind::Illegal, message, line, position)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Scans and returns the next token.
    ///
    /// Once the end of input is reached every further call returns another
    /// `Eof` token.
    pub fn scan(&mut self) -> Token<'src> {
        self.skip_ignored();

        let line = self.line;
        let position = self.column + 1;
        let Some(ch) = self.peek_char() else {
            return Token::new(TokenKind::Eof, "", line, position);
        };

        match ch {
            '.' => self.lex_ellipsis(line, position),
            '"' if self.remaining().starts_with("\"\"\"") => {
                self.lex_block_string(line, position)
            },
            '"' => self.lex_string(line, position),
            '-' | '0'..='9' => self.lex_number(line, position),
            ch if is_name_start(ch) => self.lex_name(line, position),
            ch => match Punctuator::from_char(ch) {
                Some(punctuator) => {
                    self.consume();
                    Token::punctuator(punctuator, line, position)
                },
                None => self.lex_invalid_character(line, position),
            },
        }
    }

    /// Skips whitespace, line terminators, commas, byte order marks and
    /// comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Skips a `#` comment up to, but not including, the next line terminator.
    fn skip_comment(&mut self) {
        let remaining = self.remaining();
        let comment_len =
            memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
                .unwrap_or(remaining.len());

        self.column += remaining[..comment_len].chars().count();
        self.offset += comment_len;
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Ellipsis
    // =========================================================================

    fn lex_ellipsis(&mut self, line: usize, position: usize) -> Token<'src> {
        if self.remaining().starts_with("...") {
            self.offset += 3;
            self.column += 3;
            self.last_char_was_cr = false;
            return Token::punctuator(Punctuator::Ellipsis, line, position);
        }

        let got: String = self.remaining().chars().take(3).collect();
        while self.peek_char() == Some('.') {
            self.consume();
        }
        self.illegal(
            format!("invalid punctuator, expected \"...\" but got: {got:?}"),
            line,
            position,
        )
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&mut self, line: usize, position: usize) -> Token<'src> {
        let start = self.offset;
        let name_len = self.remaining()
            .bytes()
            .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
            .count();

        // Names are ASCII-only, so every byte is exactly one rune.
        self.offset += name_len;
        self.column += name_len;
        self.last_char_was_cr = false;

        Token::new(TokenKind::Name, &self.source[start..self.offset], line, position)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an `IntValue` or `FloatValue`.
    ///
    /// ```text
    /// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
    /// ```
    fn lex_number(&mut self, line: usize, position: usize) -> Token<'src> {
        let start = self.offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char().filter(char::is_ascii_digit) {
                    self.consume();
                    return self.illegal(
                        format!("invalid number, unexpected digit after 0: {ch:?}"),
                        line,
                        position,
                    );
                }
            },
            Some('1'..='9') => self.consume_digits(),
            other => return self.lex_number_error(other, line, position),
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            if let Err(token) = self.expect_digits(line, position) {
                return token;
            }
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if let Err(token) = self.expect_digits(line, position) {
                return token;
            }
        }

        // A number may not run straight into a name or another `.`.
        if let Some(ch) = self.peek_char().filter(|ch| *ch == '.' || is_name_start(*ch)) {
            self.consume();
            return self.illegal(
                format!(
                    "invalid number, unexpected character after number: {}",
                    describe_char(ch),
                ),
                line,
                position,
            );
        }

        let kind = if is_float { TokenKind::FloatValue } else { TokenKind::IntValue };
        Token::new(kind, &self.source[start..self.offset], line, position)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    /// Consumes one or more digits, or produces the `Illegal` token to return
    /// when there isn't at least one.
    fn expect_digits(&mut self, line: usize, position: usize) -> Result<(), Token<'src>> {
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
                Ok(())
            },
            other => Err(self.lex_number_error(other, line, position)),
        }
    }

    fn lex_number_error(
        &mut self,
        found: Option<char>,
        line: usize,
        position: usize,
    ) -> Token<'src> {
        let found = match found {
            Some(ch) => {
                self.consume();
                describe_char(ch)
            },
            None => "end of input".to_string(),
        };
        self.illegal(
            format!("invalid number, expected digit but got: {found}"),
            line,
            position,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a single-line `"..."` string, decoding escape sequences.
    ///
    /// The literal borrows from the source unless an escape sequence forced a
    /// decoded copy.
    fn lex_string(&mut self, line: usize, position: usize) -> Token<'src> {
        self.consume();
        let content_start = self.offset;
        let mut segment_start = content_start;
        let mut decoded: Option<String> = None;

        loop {
            match self.peek_char() {
                None => {
                    return self.illegal("unterminated string".to_string(), line, position);
                },

                Some('"') => {
                    let content_end = self.offset;
                    self.consume();
                    let literal = match decoded {
                        None => Cow::Borrowed(&self.source[content_start..content_end]),
                        Some(mut buf) => {
                            buf.push_str(&self.source[segment_start..content_end]);
                            Cow::Owned(buf)
                        },
                    };
                    return Token::new(TokenKind::StringValue, literal, line, position);
                },

                Some('\\') => {
                    let buf = decoded.get_or_insert_with(String::new);
                    buf.push_str(&self.source[segment_start..self.offset]);
                    self.consume();

                    let unescaped = match self.consume() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => match self.lex_unicode_escape() {
                            Ok(ch) => ch,
                            Err(message) => return self.illegal(message, line, position),
                        },
                        Some(other) => {
                            return self.illegal(
                                format!("invalid character escape sequence: \\{other}"),
                                line,
                                position,
                            );
                        },
                        None => {
                            return self.illegal(
                                "unterminated string".to_string(),
                                line,
                                position,
                            );
                        },
                    };
                    buf.push(unescaped);
                    segment_start = self.offset;
                },

                Some(ch) if ch < ' ' && ch != '\t' => {
                    self.consume();
                    return self.illegal(
                        format!("invalid character within string: {}", describe_char(ch)),
                        line,
                        position,
                    );
                },

                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape (the `\u` is already consumed).
    ///
    /// A high surrogate immediately followed by a `\uXXXX` low surrogate is
    /// combined into a single scalar value. Any other surrogate decodes to
    /// U+FFFD.
    fn lex_unicode_escape(&mut self) -> Result<char, String> {
        let code_point = self.lex_hex_quad()?;

        if (0xD800..=0xDBFF).contains(&code_point)
            && self.remaining().starts_with("\\u")
        {
            let low = self.remaining()
                .get(2..6)
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .filter(|low| (0xDC00..=0xDFFF).contains(low));
            if let Some(low) = low {
                for _ in 0..6 {
                    self.consume();
                }
                let combined = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }

        Ok(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn lex_hex_quad(&mut self) -> Result<u32, String> {
        let mut digits = String::with_capacity(4);
        while digits.len() < 4 {
            match self.peek_char() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    self.consume();
                    digits.push(ch);
                },
                Some(ch) if ch != '"' => {
                    self.consume();
                    digits.push(ch);
                    return Err(format!("invalid character escape sequence: \\u{digits}"));
                },
                _ => return Err(format!("invalid character escape sequence: \\u{digits}")),
            }
        }
        u32::from_str_radix(&digits, 16)
            .map_err(|_| format!("invalid character escape sequence: \\u{digits}"))
    }

    // =========================================================================
    // Block strings
    // =========================================================================

    /// Lexes a `"""`-delimited block string.
    ///
    /// `\"""` is the only escape sequence; every other backslash is kept as-is.
    /// One leading line break (`\r`, `\n` or `\r\n`) and one trailing line
    /// break are removed. No indentation is removed here.
    fn lex_block_string(&mut self, line: usize, position: usize) -> Token<'src> {
        for _ in 0..3 {
            self.consume();
        }
        let content_start = self.offset;
        let mut has_escaped_quotes = false;

        let content_end = loop {
            let remaining = self.remaining();
            if remaining.starts_with("\"\"\"") {
                let end = self.offset;
                for _ in 0..3 {
                    self.consume();
                }
                break end;
            }
            if remaining.starts_with("\\\"\"\"") {
                has_escaped_quotes = true;
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }

            match self.peek_char() {
                None => {
                    return self.illegal(
                        "unterminated block string".to_string(),
                        line,
                        position,
                    );
                },
                Some(ch) if ch < ' ' && !matches!(ch, '\t' | '\n' | '\r') => {
                    self.consume();
                    return self.illegal(
                        format!("invalid character within block string: {}", describe_char(ch)),
                        line,
                        position,
                    );
                },
                Some(_) => {
                    self.consume();
                },
            }
        };

        let mut content = &self.source[content_start..content_end];
        content = content.strip_prefix('\r').unwrap_or(content);
        content = content.strip_prefix('\n').unwrap_or(content);
        content = content.strip_suffix('\n').unwrap_or(content);
        content = content.strip_suffix('\r').unwrap_or(content);

        let literal = if has_escaped_quotes {
            Cow::Owned(content.replace("\\\"\"\"", "\"\"\""))
        } else {
            Cow::Borrowed(content)
        };
        Token::new(TokenKind::BlockStringValue, literal, line, position)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    /// Produces an `Illegal` token whose literal is the offending character.
    fn lex_invalid_character(&mut self, line: usize, position: usize) -> Token<'src> {
        let start = self.offset;
        self.consume();
        Token::new(TokenKind::Illegal, &self.source[start..self.offset], line, position)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.scan();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are wrapped in backticks. Invisible and control
/// characters also get their code point and, where known, their name.
pub(crate) fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        match unicode_char_name(ch) {
            Some(name) => format!("U+{:04X} ({name})", ch as u32),
            None => format!("U+{:04X}", ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{0009}' => Some("HORIZONTAL TAB"),
        '\u{000A}' => Some("LINE FEED"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000D}' => Some("CARRIAGE RETURN"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
